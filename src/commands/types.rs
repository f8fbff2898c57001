// src/commands/types.rs
use thiserror::Error;

use super::registry::CommandRegistry;
use crate::fs::FsError;
use crate::session::SessionState;

/// User-facing command failure. The `Display` text is what lands in the
/// scrollback.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("{command}: {name}: No such {kind}")]
    NotFound {
        command: &'static str,
        name: String,
        kind: &'static str,
    },

    #[error("{command}: {name}: {kind} already exists")]
    AlreadyExists {
        command: &'static str,
        name: String,
        kind: &'static str,
    },

    #[error("{command}: {name}: Invalid name")]
    InvalidName { command: &'static str, name: String },

    #[error("{command}: {name}: Already editing {open}")]
    Busy {
        command: &'static str,
        name: String,
        open: String,
    },

    #[error("Command not found: {0}")]
    UnknownCommand(String),

    #[error("{command}: {source}")]
    Fs {
        command: &'static str,
        #[source]
        source: FsError,
    },
}

impl CommandError {
    pub fn no_such_file(command: &'static str, name: &str) -> Self {
        CommandError::NotFound { command, name: name.to_string(), kind: "file" }
    }

    pub fn no_such_directory(command: &'static str, name: &str) -> Self {
        CommandError::NotFound { command, name: name.to_string(), kind: "directory" }
    }

    /// Map a tree error raised while creating `name`. `kind` labels the
    /// conflict message ("Directory" or "File").
    pub fn from_create(command: &'static str, kind: &'static str, name: &str, err: FsError) -> Self {
        match err {
            FsError::AlreadyExists { .. } => CommandError::AlreadyExists {
                command,
                name: name.to_string(),
                kind,
            },
            FsError::InvalidName { .. } => CommandError::InvalidName {
                command,
                name: name.to_string(),
            },
            source => CommandError::Fs { command, source },
        }
    }
}

/// 命令执行结果
pub type CommandResult = Result<String, CommandError>;

/// 命令执行上下文
pub struct CommandContext<'a> {
    pub args: Vec<String>,
    pub session: &'a mut SessionState,
    /// The registry the command was dispatched from.
    pub registry: &'a CommandRegistry,
}

/// 命令 trait
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;

    /// Synopsis shown by `help`.
    fn usage(&self) -> &'static str {
        self.name()
    }

    fn description(&self) -> &'static str;

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult;
}
