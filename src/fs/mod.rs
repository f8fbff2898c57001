//! File System Module
//!
//! Virtual file tree backing the session. Nodes live in an arena owned by
//! `InMemoryFs` and are addressed by `NodeId`.

pub mod types;
pub mod in_memory_fs;

pub use types::*;
pub use in_memory_fs::{split_path, InMemoryFs};
