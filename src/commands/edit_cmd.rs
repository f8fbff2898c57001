//! edit - Open a file in the edit buffer
//!
//! Seeds the session's edit buffer with the file's current content. The
//! buffer is committed later by the shell's save action.

use crate::commands::{Command, CommandContext, CommandError, CommandResult};
use crate::session::EditBuffer;

/// Line that commits the edit buffer.
pub const SAVE_COMMAND: &str = ":w";

/// Line that empties the edit buffer.
pub const CLEAR_BUFFER_COMMAND: &str = ":c";

pub const EDIT_PROMPT: &str = "Entering edit mode. Type your content and enter :w to save:";

pub struct EditCommand;

impl Command for EditCommand {
    fn name(&self) -> &'static str {
        "edit"
    }

    fn usage(&self) -> &'static str {
        "edit <file>"
    }

    fn description(&self) -> &'static str {
        "Edit file contents"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let Some(name) = ctx.args.first() else {
            return Err(CommandError::Usage("edit <filename>"));
        };

        let session = ctx.session;
        if let Some(open) = &session.editing {
            return Err(CommandError::Busy {
                command: "edit",
                name: name.clone(),
                open: open.name.clone(),
            });
        }

        let dir = session.current_dir();
        let file = session
            .fs
            .find_file(dir, name)
            .ok_or_else(|| CommandError::no_such_file("edit", name))?;
        let content = session
            .fs
            .read_file(file)
            .map_err(|source| CommandError::Fs { command: "edit", source })?
            .to_string();

        session.editing = Some(EditBuffer {
            file,
            name: name.clone(),
            content,
        });
        Ok(EDIT_PROMPT.to_string())
    }
}
