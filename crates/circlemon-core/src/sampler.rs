//! Periodic usage sampling with a stale-value policy for failed reads.
//!
//! The platform crate implements [`UsageSource`] on top of the OS
//! counters; [`Sampler`] owns one and turns its raw readings into a
//! [`UsageSample`] every tick.

use crate::usage::{FALLBACK_TOTAL_RAM_MB, UsageSample};
use crate::{WidgetResult, log_info, log_warn};

/// Raw OS counters the sampler reads.
///
/// Each Windows implementation call is a synchronous, blocking query.
pub trait UsageSource {
    /// Processor busy percentage since the previous call (0–100).
    fn cpu_percent(&mut self) -> WidgetResult<f32>;

    /// Currently available physical memory in megabytes.
    fn available_mb(&mut self) -> WidgetResult<f32>;

    /// Total physical memory in megabytes. Queried once at startup.
    fn total_mb(&mut self) -> WidgetResult<f32>;
}

/// Turns [`UsageSource`] readings into samples.
///
/// A failed read keeps the last good value; CPU starts at 0 and
/// available memory starts at the total (0% used).
pub struct Sampler<S> {
    source: S,
    total_mb: f32,
    last_cpu: f32,
    last_available: f32,
    cpu_failing: bool,
    ram_failing: bool,
}

impl<S: UsageSource> Sampler<S> {
    /// Creates a sampler and performs the one-time total memory query.
    pub fn new(mut source: S) -> Self {
        let total_mb = match source.total_mb() {
            Ok(total) if total > 0.0 => total,
            Ok(total) => {
                log_warn!("total memory query returned {total} MB, assuming {FALLBACK_TOTAL_RAM_MB} MB");
                FALLBACK_TOTAL_RAM_MB
            }
            Err(e) => {
                log_warn!("total memory query failed ({e}), assuming {FALLBACK_TOTAL_RAM_MB} MB");
                FALLBACK_TOTAL_RAM_MB
            }
        };
        log_info!("total physical memory: {total_mb:.1} MB");

        Self {
            source,
            total_mb,
            last_cpu: 0.0,
            last_available: total_mb,
            cpu_failing: false,
            ram_failing: false,
        }
    }

    /// Total physical memory used for every sample.
    pub fn total_mb(&self) -> f32 {
        self.total_mb
    }

    /// Reads both counters and returns the resulting sample.
    pub fn sample(&mut self) -> UsageSample {
        match self.source.cpu_percent() {
            Ok(cpu) => {
                if self.cpu_failing {
                    log_info!("cpu counter recovered");
                }
                self.cpu_failing = false;
                self.last_cpu = cpu;
            }
            Err(e) => {
                if !self.cpu_failing {
                    log_warn!("cpu counter read failed: {e}");
                }
                self.cpu_failing = true;
            }
        }

        match self.source.available_mb() {
            Ok(available) => {
                if self.ram_failing {
                    log_info!("memory counter recovered");
                }
                self.ram_failing = false;
                self.last_available = available;
            }
            Err(e) => {
                if !self.ram_failing {
                    log_warn!("memory counter read failed: {e}");
                }
                self.ram_failing = true;
            }
        }

        UsageSample::new(self.last_cpu, self.last_available, self.total_mb)
    }
}
