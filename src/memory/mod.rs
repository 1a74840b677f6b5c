/*!
 * Memory Module
 * Heap accounting and memory statistics
 */

pub mod gc;
pub mod stats;
pub mod tracking;
pub mod traits;
pub mod types;

// Re-export for convenience
pub use gc::FlushCollector;
pub use stats::{kib_to_bytes, read_proc_status, ProcessStats};
pub use tracking::{AllocationCounters, TrackingAllocator, COUNTERS};
pub use traits::*;
pub use types::*;
