//! A single CPU/RAM reading and the strings derived from it.

use serde::Serialize;

/// Total RAM assumed when the one-time physical memory query fails.
pub const FALLBACK_TOTAL_RAM_MB: f32 = 8192.0;

/// One tick's worth of usage data. Not persisted; no history is kept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UsageSample {
    pub cpu_percent: f32,
    pub ram_used_mb: f32,
    pub ram_total_mb: f32,
}

impl UsageSample {
    /// Builds a sample from a CPU reading and the available-memory counter.
    pub fn new(cpu_percent: f32, available_mb: f32, ram_total_mb: f32) -> Self {
        Self {
            cpu_percent,
            ram_used_mb: ram_total_mb - available_mb,
            ram_total_mb,
        }
    }

    /// `(total - available) / total * 100`, clamped to 0–100.
    ///
    /// Returns 0 when the total is not positive.
    pub fn ram_percent(&self) -> f32 {
        if self.ram_total_mb <= 0.0 {
            return 0.0;
        }
        (self.ram_used_mb / self.ram_total_mb * 100.0).clamp(0.0, 100.0)
    }

    /// CPU usage clamped to 0–100.
    pub fn cpu_percent(&self) -> f32 {
        self.cpu_percent.clamp(0.0, 100.0)
    }

    pub fn ram_used_gb(&self) -> f32 {
        self.ram_used_mb / 1024.0
    }

    /// Label drawn for the outer gauge (e.g. "CPU: 12.5%").
    pub fn cpu_text(&self) -> String {
        format!("CPU: {:.1}%", self.cpu_percent)
    }

    /// Label drawn for the inner gauge (e.g. "RAM: 4.0 GB").
    pub fn ram_text(&self) -> String {
        format!("RAM: {:.1} GB", self.ram_used_gb())
    }

    /// Detail line shown on hover (e.g. "RAM usage: 4096.0 MB / 8192.0 MB").
    pub fn ram_detail(&self) -> String {
        format!(
            "RAM usage: {:.1} MB / {:.1} MB",
            self.ram_used_mb, self.ram_total_mb
        )
    }
}
