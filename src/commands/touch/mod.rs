// src/commands/touch/mod.rs
use tracing::debug;

use crate::commands::{Command, CommandContext, CommandError, CommandResult};

pub struct TouchCommand;

impl Command for TouchCommand {
    fn name(&self) -> &'static str {
        "touch"
    }

    fn usage(&self) -> &'static str {
        "touch <name>"
    }

    fn description(&self) -> &'static str {
        "Create file"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let Some(name) = ctx.args.first() else {
            return Err(CommandError::Usage("touch <filename>"));
        };

        let session = ctx.session;
        let parent = session.current_dir();
        let id = session
            .fs
            .create_file(parent, name)
            .map_err(|e| CommandError::from_create("touch", "File", name, e))?;
        debug!(name = %name, node = id.index(), cwd = %session.cwd, "created file");
        Ok(String::new())
    }
}
