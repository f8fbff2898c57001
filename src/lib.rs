//! simple-os - A simulated terminal session
//!
//! An in-memory file tree, a fixed table of commands (`help`, `ls`, `cd`,
//! `cat`, `clear`, `ps`, `mkdir`, `touch`, `edit`, `write`), a buffered edit
//! mode, and a cosmetic stats panel. No real storage or processes are
//! involved; everything lives in one `Shell` value.

pub mod commands;
pub mod config;
pub mod fs;
pub mod process;
pub mod repl;
pub mod session;
pub mod shell;
pub mod stats;

pub use commands::{Command, CommandContext, CommandError, CommandRegistry, CommandResult};
pub use config::{ConfigError, ShellConfig};
pub use fs::{FsError, InMemoryFs, Node, NodeId, NodeKind};
pub use session::{EditBuffer, SessionState};
pub use shell::{Shell, ShellError, ShellOptions};
pub use stats::SystemStats;
