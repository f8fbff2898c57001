use crate::commands::{Command, CommandContext, CommandResult};
use crate::process::format_table;

pub struct PsCommand;

impl Command for PsCommand {
    fn name(&self) -> &'static str {
        "ps"
    }

    fn description(&self) -> &'static str {
        "List running processes"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        Ok(format_table(&ctx.session.processes))
    }
}
