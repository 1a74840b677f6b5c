/*!
 * Memory Traits
 * Seams between the reporter and the memory subsystem
 */

use super::types::MemoryStats;

/// Collection pass run before and after a measurement
#[cfg_attr(test, mockall::automock)]
pub trait Collector: Send + Sync {
    /// Run one collection pass
    fn collect(&self);

    /// Number of completed passes
    fn cycles(&self) -> u32;
}

/// Memory statistics provider
#[cfg_attr(test, mockall::automock)]
pub trait StatsSource: Send + Sync {
    /// Read current statistics; `num_gc` is left to the caller
    fn read(&self) -> MemoryStats;
}
