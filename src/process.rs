//! Process Table
//!
//! Static list of fake processes reported by `ps`.

use std::fmt;

use chrono::{DateTime, Local};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessStatus {
    Running,
    Stopped,
    Waiting,
}

impl fmt::Display for ProcessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProcessStatus::Running => "running",
            ProcessStatus::Stopped => "stopped",
            ProcessStatus::Waiting => "waiting",
        };
        f.write_str(s)
    }
}

/// A simulated process entry.
#[derive(Debug, Clone)]
pub struct Process {
    pub id: u32,
    pub name: String,
    pub status: ProcessStatus,
    /// CPU share in percent.
    pub cpu: u32,
    /// Resident memory in MB.
    pub memory: u32,
    pub start_time: DateTime<Local>,
}

impl Process {
    pub fn new(id: u32, name: impl Into<String>, status: ProcessStatus, cpu: u32, memory: u32) -> Self {
        Self {
            id,
            name: name.into(),
            status,
            cpu,
            memory,
            start_time: Local::now(),
        }
    }

    /// One tab-separated row of the `ps` table.
    pub fn table_row(&self) -> String {
        format!(
            "{}\t{}\t\t{}\t\t{}%\t{}MB",
            self.id, self.name, self.status, self.cpu, self.memory
        )
    }
}

/// Header line of the `ps` table.
pub const TABLE_HEADER: &str = "PID\tNAME\t\tSTATUS\t\tCPU\tMEM";

/// Render the full `ps` table.
pub fn format_table(processes: &[Process]) -> String {
    let rows: Vec<String> = processes.iter().map(Process::table_row).collect();
    format!("{}\n{}", TABLE_HEADER, rows.join("\n"))
}

/// The process list a fresh session starts with.
pub fn default_processes() -> Vec<Process> {
    vec![Process::new(1, "system", ProcessStatus::Running, 2, 128)]
}
