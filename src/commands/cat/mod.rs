// src/commands/cat/mod.rs
use crate::commands::{Command, CommandContext, CommandError, CommandResult};

pub struct CatCommand;

impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn usage(&self) -> &'static str {
        "cat <file>"
    }

    fn description(&self) -> &'static str {
        "Show file contents"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let Some(name) = ctx.args.first() else {
            return Err(CommandError::Usage("cat <filename>"));
        };

        let fs = &ctx.session.fs;
        let dir = ctx.session.current_dir();
        let file = fs
            .find_file(dir, name)
            .ok_or_else(|| CommandError::no_such_file("cat", name))?;
        fs.read_file(file)
            .map(str::to_string)
            .map_err(|source| CommandError::Fs { command: "cat", source })
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

    fn make_session() -> SessionState {
        let mut fs = InMemoryFs::new();
        fs.seed_file("/home/welcome.txt", "Welcome!\nline two").unwrap();
        fs.seed_file("/empty.txt", "").unwrap();
        SessionState::new(fs, default_processes(), SystemStats::default())
    }

    fn cat(session: &mut SessionState, args: &[&str]) -> CommandResult {
        let ctx = CommandContext {
            args: args.iter().map(|s| s.to_string()).collect(),
            session,
            registry: &CommandRegistry::new(),
        };
        CatCommand.execute(ctx)
    }

    #[test]
    fn test_cat_file() {
        let mut s = make_session();
        s.push_dir("home");
        assert_eq!(cat(&mut s, &["welcome.txt"]).unwrap(), "Welcome!\nline two");
    }

    #[test]
    fn test_cat_empty_file() {
        let mut s = make_session();
        assert_eq!(cat(&mut s, &["empty.txt"]).unwrap(), "");
    }

    #[test]
    fn test_cat_only_looks_in_current_directory() {
        let mut s = make_session();
        let err = cat(&mut s, &["welcome.txt"]).unwrap_err();
        assert_eq!(err.to_string(), "cat: welcome.txt: No such file");
    }

    #[test]
    fn test_cat_directory_is_not_a_file() {
        let mut s = make_session();
        let err = cat(&mut s, &["home"]).unwrap_err();
        assert_eq!(err.to_string(), "cat: home: No such file");
    }

    #[test]
    fn test_cat_usage() {
        let mut s = make_session();
        assert_eq!(cat(&mut s, &[]), Err(CommandError::Usage("cat <filename>")));
    }

    #[test]
    fn test_cat_reads_first_argument_only() {
        let mut s = make_session();
        assert_eq!(cat(&mut s, &["empty.txt", "other"]).unwrap(), "");
    }
}
