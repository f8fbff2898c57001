//! help - List the registered commands
//!
//! One line per command, in registration order, built from each command's
//! usage and description.

use crate::commands::{Command, CommandContext, CommandResult};

pub struct HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &'static str { "help" }

    fn description(&self) -> &'static str { "Show this help message" }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let mut stdout = String::from("Available commands:");
        for command in ctx.registry.iter() {
            stdout.push_str(&format!("\n  {} - {}", command.usage(), command.description()));
        }
        Ok(stdout)
    }
}
