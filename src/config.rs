//! Shell Configuration
//!
//! Optional TOML file describing the initial tree, process table, banner and
//! stats panel. Every key has a default matching a stock SimpleOS session.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::process::{Process, ProcessStatus};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// A file created in the tree when the session starts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedFile {
    pub path: String,
    #[serde(default)]
    pub content: String,
}

/// A row of the process table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProcessSpec {
    pub id: u32,
    pub name: String,
    #[serde(default = "default_status")]
    pub status: ProcessStatus,
    #[serde(default)]
    pub cpu: u32,
    #[serde(default)]
    pub memory: u32,
}

impl ProcessSpec {
    pub fn to_process(&self) -> Process {
        Process::new(self.id, self.name.clone(), self.status, self.cpu, self.memory)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShellConfig {
    /// Lines placed in the scrollback when the session starts.
    #[serde(default = "default_banner")]
    pub banner: Vec<String>,

    /// Stats refresh period for the interactive loop.
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_ms: u64,

    /// MB
    #[serde(default = "default_total")]
    pub memory_total: u64,

    /// MB
    #[serde(default = "default_total")]
    pub storage_total: u64,

    /// Directories created at startup, parents included.
    #[serde(default = "default_directories")]
    pub directories: Vec<String>,

    #[serde(default = "default_files")]
    pub files: Vec<SeedFile>,

    #[serde(default = "default_processes")]
    pub processes: Vec<ProcessSpec>,
}

fn default_banner() -> Vec<String> {
    vec![
        "Welcome to SimpleOS v1.0".to_string(),
        "Type \"help\" for available commands".to_string(),
    ]
}

fn default_refresh_interval() -> u64 {
    2_000
}

fn default_total() -> u64 {
    1024
}

fn default_directories() -> Vec<String> {
    vec!["/home".to_string()]
}

fn default_files() -> Vec<SeedFile> {
    vec![SeedFile {
        path: "/home/welcome.txt".to_string(),
        content: "Welcome to SimpleOS!\nType \"help\" to see available commands.".to_string(),
    }]
}

fn default_status() -> ProcessStatus {
    ProcessStatus::Running
}

fn default_processes() -> Vec<ProcessSpec> {
    vec![ProcessSpec {
        id: 1,
        name: "system".to_string(),
        status: ProcessStatus::Running,
        cpu: 2,
        memory: 128,
    }]
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            banner: default_banner(),
            refresh_interval_ms: default_refresh_interval(),
            memory_total: default_total(),
            storage_total: default_total(),
            directories: default_directories(),
            files: default_files(),
            processes: default_processes(),
        }
    }
}

impl ShellConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = ShellConfig::from_toml("").unwrap();
        assert_eq!(config, ShellConfig::default());
        assert_eq!(config.refresh_interval_ms, 2_000);
        assert_eq!(config.files[0].path, "/home/welcome.txt");
    }

    #[test]
    fn test_partial_override() {
        let config = ShellConfig::from_toml(
            r#"
            banner = ["hi"]
            memory_total = 2048
            directories = []

            [[files]]
            path = "/etc/motd"
            content = "hello"

            [[processes]]
            id = 9
            name = "idle"
            status = "waiting"
            "#,
        )
        .unwrap();
        assert_eq!(config.banner, vec!["hi"]);
        assert_eq!(config.memory_total, 2048);
        assert_eq!(config.storage_total, 1024);
        assert!(config.directories.is_empty());
        assert_eq!(config.files, vec![SeedFile { path: "/etc/motd".to_string(), content: "hello".to_string() }]);
        let process = config.processes[0].to_process();
        assert_eq!(process.status, ProcessStatus::Waiting);
        assert_eq!(process.cpu, 0);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(ShellConfig::from_toml("colour = \"green\"").is_err());
    }

    #[test]
    fn test_bad_status_rejected() {
        let text = "[[processes]]\nid = 1\nname = \"x\"\nstatus = \"zombie\"\n";
        assert!(ShellConfig::from_toml(text).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = ShellConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("cannot read config file"));
    }
}
