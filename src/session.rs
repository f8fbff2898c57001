//! Session State
//!
//! Everything a single terminal session owns: the file tree, the current
//! path, the scrollback, the optional edit buffer, the process table and the
//! stats panel. Command handlers receive `&mut SessionState` and mutate it
//! directly; nothing here is shared between sessions.

use chrono::{DateTime, Local};

use crate::fs::{split_path, InMemoryFs, NodeId};
use crate::process::Process;
use crate::stats::SystemStats;

/// A file open for buffered editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBuffer {
    /// Node being edited, captured when the edit began.
    pub file: NodeId,
    pub name: String,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct SessionState {
    pub fs: InMemoryFs,
    /// Always starts with `/`.
    pub cwd: String,
    pub scrollback: Vec<String>,
    pub editing: Option<EditBuffer>,
    pub processes: Vec<Process>,
    pub stats: SystemStats,
    pub started_at: DateTime<Local>,
}

impl SessionState {
    pub fn new(fs: InMemoryFs, processes: Vec<Process>, stats: SystemStats) -> Self {
        Self {
            fs,
            cwd: "/".to_string(),
            scrollback: Vec::new(),
            editing: None,
            processes,
            stats,
            started_at: Local::now(),
        }
    }

    /// The directory addressed by the current path.
    pub fn current_dir(&self) -> NodeId {
        self.fs.resolve(&self.cwd)
    }

    /// Path segments of the current path.
    pub fn cwd_segments(&self) -> Vec<&str> {
        split_path(&self.cwd).collect()
    }

    /// Move up one segment; a no-op at `/`.
    pub fn pop_dir(&mut self) {
        let mut parts: Vec<String> = split_path(&self.cwd).map(String::from).collect();
        parts.pop();
        self.cwd = format!("/{}", parts.join("/"));
    }

    /// Append a child directory name to the current path.
    pub fn push_dir(&mut self, name: &str) {
        if self.cwd == "/" {
            self.cwd = format!("/{}", name);
        } else {
            self.cwd = format!("{}/{}", self.cwd, name);
        }
    }

    pub fn reset_dir(&mut self) {
        self.cwd = "/".to_string();
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn clear_scrollback(&mut self) {
        self.scrollback.clear();
    }

    /// Seconds elapsed since the session started.
    pub fn uptime_secs(&self) -> u64 {
        (Local::now() - self.started_at).num_seconds().max(0) as u64
    }
}
