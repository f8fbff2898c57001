//! cd - Change directory
//!
//! - cd        - back to `/`
//! - cd ..     - drop the last path segment
//! - cd <name> - enter a child directory of the current directory

use crate::commands::{Command, CommandContext, CommandError, CommandResult};

pub struct CdCommand;

impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn usage(&self) -> &'static str {
        "cd <dir>"
    }

    fn description(&self) -> &'static str {
        "Change directory"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let session = ctx.session;
        let Some(target) = ctx.args.first() else {
            session.reset_dir();
            return Ok(String::new());
        };

        if target == ".." {
            session.pop_dir();
            return Ok(String::new());
        }

        let dir = session.current_dir();
        if session.fs.find_directory(dir, target).is_none() {
            return Err(CommandError::no_such_directory("cd", target));
        }
        session.push_dir(target);
        Ok(String::new())
    }
}
