// src/commands/mod.rs
pub mod cat;
pub mod cd_cmd;
pub mod clear_cmd;
pub mod dispatch;
pub mod edit_cmd;
pub mod help_cmd;
pub mod ls;
pub mod mkdir;
pub mod ps_cmd;
pub mod registry;
pub mod touch;
pub mod types;
pub mod write_cmd;

pub use dispatch::{dispatch, tokenize};
pub use registry::{create_default_registry, CommandRegistry};
pub use types::{Command, CommandContext, CommandError, CommandResult};
