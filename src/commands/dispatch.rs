//! Command Dispatch
//!
//! Splits an input line into tokens and routes it to the registered handler.

use tracing::debug;

use super::registry::CommandRegistry;
use super::types::{CommandContext, CommandError};
use crate::session::SessionState;

/// Split a line into tokens.
///
/// The line is trimmed, then split on single spaces. Runs of spaces inside
/// the line yield empty tokens, which `write` rejoins verbatim.
pub fn tokenize(line: &str) -> Vec<String> {
    line.trim().split(' ').map(String::from).collect()
}

/// Run one input line against the session and return its display text.
///
/// Errors are rendered to text here; nothing propagates past one command.
pub fn dispatch(registry: &CommandRegistry, session: &mut SessionState, line: &str) -> String {
    let mut tokens = tokenize(line);
    let name = tokens.remove(0);

    let Some(command) = registry.get(&name) else {
        debug!(command = %name, "unknown command");
        return CommandError::UnknownCommand(name).to_string();
    };

    debug!(command = %name, args = ?tokens, cwd = %session.cwd, "dispatching");
    let ctx = CommandContext {
        args: tokens,
        session,
        registry,
    };
    match command.execute(ctx) {
        Ok(output) => output,
        Err(err) => {
            debug!(command = %name, error = %err, "command failed");
            err.to_string()
        }
    }
}
