//! File System Types
//!
//! Core types for the virtual file tree: nodes, their kinds, and errors.

use chrono::{DateTime, Local};
use thiserror::Error;

/// File system errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error("ENOENT: no such file or directory, {operation} '{name}'")]
    NotFound { name: String, operation: String },

    #[error("EEXIST: file already exists, {operation} '{name}'")]
    AlreadyExists { name: String, operation: String },

    #[error("EISDIR: illegal operation on a directory, {operation} '{name}'")]
    IsDirectory { name: String, operation: String },

    #[error("ENOTDIR: not a directory, {operation} '{name}'")]
    NotDirectory { name: String, operation: String },

    #[error("EINVAL: invalid name, {operation} '{name}'")]
    InvalidName { name: String, operation: String },
}

/// Stable handle to a node in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Node kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Directory,
}

impl NodeKind {
    /// Marker shown in directory listings.
    pub fn marker(self) -> &'static str {
        match self {
            NodeKind::File => "📄",
            NodeKind::Directory => "📁",
        }
    }
}

/// Kind-specific payload. A file has content, a directory has children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeBody {
    File { content: String },
    Directory { children: Vec<NodeId> },
}

/// A file or directory entry in the tree.
#[derive(Debug, Clone)]
pub struct Node {
    name: String,
    created_at: DateTime<Local>,
    pub(crate) body: NodeBody,
}

impl Node {
    /// New empty file stamped with the current time.
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            created_at: Local::now(),
            body: NodeBody::File { content: String::new() },
        }
    }

    /// New empty directory stamped with the current time.
    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            created_at: Local::now(),
            body: NodeBody::Directory { children: Vec::new() },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    pub fn kind(&self) -> NodeKind {
        match self.body {
            NodeBody::File { .. } => NodeKind::File,
            NodeBody::Directory { .. } => NodeKind::Directory,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self.body, NodeBody::File { .. })
    }

    pub fn is_directory(&self) -> bool {
        matches!(self.body, NodeBody::Directory { .. })
    }

    /// File content, `None` for directories.
    pub fn content(&self) -> Option<&str> {
        match &self.body {
            NodeBody::File { content } => Some(content),
            NodeBody::Directory { .. } => None,
        }
    }

    /// Children in creation order, `None` for files.
    pub fn children(&self) -> Option<&[NodeId]> {
        match &self.body {
            NodeBody::File { .. } => None,
            NodeBody::Directory { children } => Some(children),
        }
    }
}

/// Directory entry with type information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirentEntry {
    pub id: NodeId,
    pub name: String,
    pub kind: NodeKind,
}
