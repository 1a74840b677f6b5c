/*!
 * Memory Types
 * Snapshots of heap and process memory usage
 */

use crate::core::limits::BYTES_PER_KIB;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Convert a byte count to whole MiB (integer division)
#[inline]
pub const fn bytes_to_mib(bytes: u64) -> u64 {
    bytes / BYTES_PER_KIB / BYTES_PER_KIB
}

/// Point-in-time copy of the tracking allocator counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterSnapshot {
    pub live_bytes: u64,
    pub peak_bytes: u64,
    pub total_bytes: u64,
    pub allocations: u64,
    pub deallocations: u64,
}

impl CounterSnapshot {
    /// Allocations not yet freed
    pub fn outstanding(&self) -> u64 {
        self.allocations.saturating_sub(self.deallocations)
    }
}

/// Memory figures reported by the kernel for this process
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcStatus {
    pub stack_bytes: u64,
    pub data_bytes: u64,
    pub resident_bytes: u64,
}

/// Memory statistics
///
/// Field names follow the classic runtime counters: `alloc`/`heap_alloc` are
/// live heap bytes, `total_alloc` is cumulative, the `*_sys` fields are what
/// the OS has handed to the process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryStats {
    pub alloc: u64,
    pub heap_alloc: u64,
    pub total_alloc: u64,
    pub stack_sys: u64,
    pub heap_sys: u64,
    pub sys: u64,
    pub num_gc: u32,
}

impl MemoryStats {
    /// Combine allocator counters with OS figures
    ///
    /// Without OS figures the heap falls back to the tracked peak and the
    /// system total to heap plus stack.
    pub fn from_parts(counters: CounterSnapshot, proc: Option<ProcStatus>, num_gc: u32) -> Self {
        let (stack_sys, heap_sys, sys) = match proc {
            Some(status) => (status.stack_bytes, status.data_bytes, status.resident_bytes),
            None => (0, counters.peak_bytes, counters.peak_bytes),
        };

        Self {
            alloc: counters.live_bytes,
            heap_alloc: counters.live_bytes,
            total_alloc: counters.total_bytes,
            stack_sys,
            heap_sys,
            sys,
            num_gc,
        }
    }
}

impl fmt::Display for MemoryStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Alloc = {} MiB\tHeapAlloc = {} MiB\tTotalAlloc = {} MiB\t\
             StackSys = {} MiB\tHeapSys = {} MiB\tSys = {} MiB\tNumGC = {}",
            bytes_to_mib(self.alloc),
            bytes_to_mib(self.heap_alloc),
            bytes_to_mib(self.total_alloc),
            bytes_to_mib(self.stack_sys),
            bytes_to_mib(self.heap_sys),
            bytes_to_mib(self.sys),
            self.num_gc
        )
    }
}
