/*!
 * Process Statistics
 * Memory statistics from the tracking allocator and the OS
 */

use super::tracking::{AllocationCounters, COUNTERS};
use super::traits::StatsSource;
use super::types::{MemoryStats, ProcStatus};
use crate::core::limits::BYTES_PER_KIB;

/// Convert an optional kB figure from procfs to bytes
#[inline]
pub fn kib_to_bytes(kib: Option<u64>) -> u64 {
    kib.unwrap_or(0).saturating_mul(BYTES_PER_KIB)
}

/// Read this process's memory figures from the OS
#[cfg(target_os = "linux")]
pub fn read_proc_status() -> Option<ProcStatus> {
    use procfs::process::Process;

    let status = Process::myself()
        .and_then(|process| process.status())
        .map_err(|e| tracing::debug!(error = %e, "Failed to read process status"))
        .ok()?;

    Some(ProcStatus {
        stack_bytes: kib_to_bytes(status.vmstk),
        data_bytes: kib_to_bytes(status.vmdata),
        resident_bytes: kib_to_bytes(status.vmrss),
    })
}

/// Read this process's memory figures from the OS
#[cfg(not(target_os = "linux"))]
pub fn read_proc_status() -> Option<ProcStatus> {
    None
}

/// Statistics for the running process
pub struct ProcessStats {
    counters: &'static AllocationCounters,
}

impl ProcessStats {
    pub fn new() -> Self {
        Self::with_counters(&COUNTERS)
    }

    pub fn with_counters(counters: &'static AllocationCounters) -> Self {
        Self { counters }
    }
}

impl Default for ProcessStats {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsSource for ProcessStats {
    fn read(&self) -> MemoryStats {
        MemoryStats::from_parts(self.counters.snapshot(), read_proc_status(), 0)
    }
}
