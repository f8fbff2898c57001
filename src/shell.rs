//! Shell Environment
//!
//! Main entry point for a SimpleOS session.
//! Ties together the command registry, the file tree and the session state.

use rand::Rng;
use thiserror::Error;
use tracing::{info, warn};

use crate::commands::{create_default_registry, dispatch, CommandRegistry};
use crate::config::ShellConfig;
use crate::fs::{FsError, InMemoryFs};
use crate::session::{EditBuffer, SessionState};
use crate::stats::SystemStats;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    #[error("editing {file}: save the buffer before running commands")]
    Editing { file: String },

    #[error("no edit session is open")]
    NotEditing,

    #[error("cannot save {file}: {source}")]
    Save {
        file: String,
        #[source]
        source: FsError,
    },

    #[error("cannot build initial file tree: {0}")]
    Seed(#[from] FsError),
}

/// Options for creating a Shell.
#[derive(Debug, Clone, Default)]
pub struct ShellOptions {
    /// Initial tree, processes, banner and stats totals
    pub config: ShellConfig,
    /// Start directory; missing segments are dropped
    pub cwd: Option<String>,
}

/// A single simulated terminal session.
pub struct Shell {
    registry: CommandRegistry,
    state: SessionState,
}

impl Shell {
    /// Create a new session from options.
    pub fn new(options: ShellOptions) -> Result<Self, ShellError> {
        let config = options.config;

        let mut fs = InMemoryFs::new();
        for dir in &config.directories {
            fs.mkdir_all(dir)?;
        }
        for file in &config.files {
            fs.seed_file(&file.path, &file.content)?;
        }

        let processes = config.processes.iter().map(|p| p.to_process()).collect();
        let stats = SystemStats::new(config.memory_total, config.storage_total);

        let mut state = SessionState::new(fs, processes, stats);
        if let Some(cwd) = options.cwd {
            state.cwd = state.fs.canonicalize(&cwd);
        }
        state.scrollback.extend(config.banner);

        info!(nodes = state.fs.len(), cwd = %state.cwd, "session started");
        Ok(Self {
            registry: create_default_registry(),
            state,
        })
    }

    /// Submit one input line: echo it, run it, and append the result to the
    /// scrollback. Refused while an edit session is open.
    pub fn submit(&mut self, line: &str) -> Result<String, ShellError> {
        if let Some(buffer) = &self.state.editing {
            warn!(file = %buffer.name, "command input refused while editing");
            return Err(ShellError::Editing { file: buffer.name.clone() });
        }

        let echo = format!("{}$ {}", self.state.cwd, line);
        self.state.scrollback.push(echo);
        let before = self.state.scrollback.len();
        let output = dispatch(&self.registry, &mut self.state, line);
        // A shorter history means the command cleared it, echo included.
        if self.state.scrollback.len() >= before {
            self.state.scrollback.push(output.clone());
        }
        Ok(output)
    }

    /// Run one line without echoing it or recording its result.
    ///
    /// There is no edit-mode gate here: any command runs even while a buffer
    /// is open. `edit` itself still refuses to open a second buffer.
    pub fn dispatch(&mut self, line: &str) -> String {
        dispatch(&self.registry, &mut self.state, line)
    }

    pub fn is_editing(&self) -> bool {
        self.state.is_editing()
    }

    pub fn edit_buffer(&self) -> Option<&EditBuffer> {
        self.state.editing.as_ref()
    }

    /// Working content of the open edit buffer.
    pub fn edit_buffer_mut(&mut self) -> Option<&mut String> {
        self.state.editing.as_mut().map(|b| &mut b.content)
    }

    /// Append a line to the open edit buffer.
    pub fn append_edit_line(&mut self, line: &str) -> Result<(), ShellError> {
        let content = self.edit_buffer_mut().ok_or(ShellError::NotEditing)?;
        if !content.is_empty() {
            content.push('\n');
        }
        content.push_str(line);
        Ok(())
    }

    /// Commit the edit buffer into its file and return to normal input.
    pub fn save_edit(&mut self) -> Result<String, ShellError> {
        let buffer = self.state.editing.take().ok_or(ShellError::NotEditing)?;
        if let Err(source) = self.state.fs.write_file(buffer.file, buffer.content) {
            return Err(ShellError::Save { file: buffer.name, source });
        }

        let message = format!("Saved {}", buffer.name);
        info!(file = %buffer.name, "edit buffer saved");
        self.state.scrollback.push(message.clone());
        Ok(message)
    }

    /// Refresh the stats panel. Driven by the host timer.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) {
        let storage = self.state.fs.storage_used() as u64;
        let uptime = self.state.uptime_secs();
        self.state.stats.refresh(rng, storage, uptime);
    }

    pub fn cwd(&self) -> &str {
        &self.state.cwd
    }

    /// Prompt text for the current path.
    pub fn prompt(&self) -> String {
        format!("{}$ ", self.state.cwd)
    }

    pub fn scrollback(&self) -> &[String] {
        &self.state.scrollback
    }

    pub fn stats(&self) -> &SystemStats {
        &self.state.stats
    }

    pub fn fs(&self) -> &InMemoryFs {
        &self.state.fs
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }
}
