//! System Stats
//!
//! Cosmetic CPU/memory/storage figures. CPU and memory take a bounded random
//! walk on every refresh; storage reflects the bytes held by the file tree.

use std::fmt;

use rand::Rng;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemStats {
    /// Percent, kept within [1, 100].
    pub cpu_usage: f64,
    /// MB, kept within [128, memory_total].
    pub memory_used: f64,
    pub memory_total: u64,
    /// Bytes of file content in the tree.
    pub storage_used: u64,
    /// MB, as configured.
    pub storage_total: u64,
    /// Seconds since the session started.
    pub uptime: u64,
}

const CPU_MIN: f64 = 1.0;
const CPU_MAX: f64 = 100.0;
const CPU_STEP: f64 = 10.0;
const MEMORY_MIN: f64 = 128.0;
const MEMORY_STEP: f64 = 50.0;
const BYTES_PER_MB: u64 = 1024 * 1024;

impl SystemStats {
    pub fn new(memory_total: u64, storage_total: u64) -> Self {
        Self {
            memory_total,
            storage_total,
            ..Self::default()
        }
    }

    /// Advance the random walk and record fresh storage/uptime figures.
    pub fn refresh<R: Rng>(&mut self, rng: &mut R, storage_used: u64, uptime: u64) {
        let cpu_delta = (rng.gen::<f64>() - 0.5) * CPU_STEP;
        self.cpu_usage = (self.cpu_usage + cpu_delta).clamp(CPU_MIN, CPU_MAX);

        let memory_delta = (rng.gen::<f64>() - 0.5) * MEMORY_STEP;
        let memory_max = (self.memory_total as f64).max(MEMORY_MIN);
        self.memory_used = (self.memory_used + memory_delta).clamp(MEMORY_MIN, memory_max);

        self.storage_used = storage_used;
        self.uptime = uptime;
    }

    pub fn storage_total_bytes(&self) -> u64 {
        self.storage_total.saturating_mul(BYTES_PER_MB)
    }

    /// Bytes left; zero once the tree outgrows the configured total.
    pub fn storage_free(&self) -> u64 {
        self.storage_total_bytes().saturating_sub(self.storage_used)
    }

    /// Single-line summary suitable for printing above a prompt.
    pub fn status_line(&self) -> String {
        format!(
            "[cpu {:.1}% | mem {:.0}/{}MB | disk {}/{}B | up {}s]",
            self.cpu_usage,
            self.memory_used,
            self.memory_total,
            self.storage_used,
            self.storage_total_bytes(),
            self.uptime
        )
    }
}

impl Default for SystemStats {
    fn default() -> Self {
        Self {
            cpu_usage: 5.0,
            memory_used: 256.0,
            memory_total: 1024,
            storage_used: 128,
            storage_total: 1024,
            uptime: 0,
        }
    }
}

impl fmt::Display for SystemStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "System Status")?;
        writeln!(f, "  CPU Usage: {:.1}%", self.cpu_usage)?;
        writeln!(f, "  Memory: {:.0}MB/{}MB", self.memory_used, self.memory_total)?;
        writeln!(f, "  Uptime: {}s", self.uptime)?;
        writeln!(f, "Storage")?;
        writeln!(f, "  Total: {}B", self.storage_total_bytes())?;
        writeln!(f, "  Used: {}B", self.storage_used)?;
        write!(f, "  Free: {}B", self.storage_free())
    }
}
