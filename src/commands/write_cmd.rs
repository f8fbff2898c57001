//! write - Replace a file's content from the command line

use tracing::debug;

use crate::commands::{Command, CommandContext, CommandError, CommandResult};

pub struct WriteCommand;

impl Command for WriteCommand {
    fn name(&self) -> &'static str {
        "write"
    }

    fn usage(&self) -> &'static str {
        "write <file> <content>"
    }

    fn description(&self) -> &'static str {
        "Write content to file"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let [name, content_parts @ ..] = ctx.args.as_slice() else {
            return Err(CommandError::Usage("write <filename> <content>"));
        };
        if content_parts.is_empty() {
            return Err(CommandError::Usage("write <filename> <content>"));
        }

        let session = ctx.session;
        let dir = session.current_dir();
        let file = session
            .fs
            .find_file(dir, name)
            .ok_or_else(|| CommandError::no_such_file("write", name))?;

        let content = content_parts.join(" ");
        let written = session
            .fs
            .write_file(file, content)
            .map_err(|source| CommandError::Fs { command: "write", source })?;
        debug!(name = %name, bytes = written, "wrote file");
        Ok(format!("Written {} bytes to {}", written, name))
    }
}
