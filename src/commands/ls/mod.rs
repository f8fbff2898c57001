// src/commands/ls/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};

pub struct LsCommand;

impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn description(&self) -> &'static str {
        "List directory contents"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let session = ctx.session;
        let dir = session.current_dir();
        let lines: Vec<String> = session
            .fs
            .children(dir)
            .into_iter()
            .map(|entry| format!("{} {}", entry.kind.marker(), entry.name))
            .collect();
        Ok(lines.join("\n"))
    }
}
