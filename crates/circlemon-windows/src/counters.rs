//! CPU and memory counters.
//!
//! CPU usage is the busy share of `GetSystemTimes` ticks between two
//! samples; memory comes from `GlobalMemoryStatusEx`. The tracker must
//! persist across ticks, so the widget owns one for its whole lifetime.

use std::mem;

use circlemon_core::{UsageSource, WidgetResult};
use windows::Win32::Foundation::FILETIME;
use windows::Win32::System::SystemInformation::{GlobalMemoryStatusEx, MEMORYSTATUSEX};
use windows::Win32::System::Threading::GetSystemTimes;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Live OS counters for one process lifetime.
pub struct SystemCounters {
    prev_idle: u64,
    prev_total: u64,
}

impl SystemCounters {
    /// Creates the counters and takes the first CPU baseline.
    ///
    /// A failed baseline leaves zeros, so the first successful read
    /// reports usage since boot instead of failing.
    pub fn new() -> Self {
        let (idle, kernel, user) = system_times().unwrap_or((0, 0, 0));
        Self {
            prev_idle: idle,
            prev_total: kernel + user,
        }
    }
}

impl Default for SystemCounters {
    fn default() -> Self {
        Self::new()
    }
}

impl UsageSource for SystemCounters {
    fn cpu_percent(&mut self) -> WidgetResult<f32> {
        let (idle, kernel, user) = system_times()?;
        // Kernel time already includes idle time.
        let total = kernel + user;

        let delta_idle = idle.saturating_sub(self.prev_idle);
        let delta_total = total.saturating_sub(self.prev_total);

        self.prev_idle = idle;
        self.prev_total = total;

        if delta_total == 0 {
            return Ok(0.0);
        }
        let busy = delta_total.saturating_sub(delta_idle);
        Ok((busy as f64 * 100.0 / delta_total as f64) as f32)
    }

    fn available_mb(&mut self) -> WidgetResult<f32> {
        let status = memory_status()?;
        Ok((status.ullAvailPhys as f64 / BYTES_PER_MB) as f32)
    }

    fn total_mb(&mut self) -> WidgetResult<f32> {
        let status = memory_status()?;
        Ok((status.ullTotalPhys as f64 / BYTES_PER_MB) as f32)
    }
}

/// Queries idle, kernel, and user times as 64-bit tick counts.
fn system_times() -> WidgetResult<(u64, u64, u64)> {
    let mut idle = FILETIME::default();
    let mut kernel = FILETIME::default();
    let mut user = FILETIME::default();

    // SAFETY: all three out-pointers reference live stack FILETIMEs.
    unsafe { GetSystemTimes(Some(&mut idle), Some(&mut kernel), Some(&mut user))? };

    Ok((ft_to_u64(idle), ft_to_u64(kernel), ft_to_u64(user)))
}

fn memory_status() -> WidgetResult<MEMORYSTATUSEX> {
    let mut status = MEMORYSTATUSEX {
        dwLength: mem::size_of::<MEMORYSTATUSEX>() as u32,
        ..Default::default()
    };
    // SAFETY: dwLength is set as the API requires.
    unsafe { GlobalMemoryStatusEx(&mut status)? };
    Ok(status)
}

fn ft_to_u64(ft: FILETIME) -> u64 {
    u64::from(ft.dwLowDateTime) | (u64::from(ft.dwHighDateTime) << 32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filetime_halves_combine() {
        let ft = FILETIME {
            dwLowDateTime: 0x0000_0001,
            dwHighDateTime: 0x0000_0002,
        };
        assert_eq!(ft_to_u64(ft), 0x0000_0002_0000_0001);
    }

    #[test]
    fn memory_readings_are_consistent() {
        let mut counters = SystemCounters::new();
        let total = counters.total_mb().unwrap();
        let available = counters.available_mb().unwrap();
        assert!(total > 0.0);
        assert!(available <= total);
    }

    #[test]
    fn cpu_reading_is_a_percentage() {
        let mut counters = SystemCounters::new();
        std::thread::sleep(std::time::Duration::from_millis(50));
        let cpu = counters.cpu_percent().unwrap();
        assert!((0.0..=100.0).contains(&cpu));
    }
}
