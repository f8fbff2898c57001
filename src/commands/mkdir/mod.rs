// src/commands/mkdir/mod.rs
use tracing::debug;

use crate::commands::{Command, CommandContext, CommandError, CommandResult};

pub struct MkdirCommand;

impl Command for MkdirCommand {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn usage(&self) -> &'static str {
        "mkdir <name>"
    }

    fn description(&self) -> &'static str {
        "Create directory"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let Some(name) = ctx.args.first() else {
            return Err(CommandError::Usage("mkdir <dirname>"));
        };

        let session = ctx.session;
        let parent = session.current_dir();
        let id = session
            .fs
            .create_directory(parent, name)
            .map_err(|e| CommandError::from_create("mkdir", "Directory", name, e))?;
        debug!(name = %name, node = id.index(), cwd = %session.cwd, "created directory");
        Ok(String::new())
    }
}
