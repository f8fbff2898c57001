use crate::commands::{Command, CommandContext, CommandResult};

pub struct ClearCommand;

impl Command for ClearCommand {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn description(&self) -> &'static str {
        "Clear terminal"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        ctx.session.clear_scrollback();
        Ok(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::CommandRegistry;
    use crate::fs::InMemoryFs;
    use crate::process::default_processes;
    use crate::session::SessionState;
    use crate::stats::SystemStats;

    #[test]
    fn test_clear_empties_scrollback() {
        let mut session = SessionState::new(InMemoryFs::new(), default_processes(), SystemStats::default());
        session.scrollback.push("old".to_string());
        let ctx = CommandContext {
            args: vec![],
            session: &mut session,
            registry: &CommandRegistry::new(),
        };
        assert_eq!(ClearCommand.execute(ctx), Ok(String::new()));
        assert!(session.scrollback.is_empty());
    }
}
