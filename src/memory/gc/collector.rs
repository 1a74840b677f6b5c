/*!
 * Flush Collector
 * Collection hook for manually managed memory
 *
 * Rust frees memory when its owner is dropped, so there is nothing left to
 * sweep. A pass only records that it ran, which keeps the cycle count in the
 * reported statistics meaningful.
 */

use super::super::traits::Collector;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Instant;
use tracing::debug;

/// Collector that counts passes
pub struct FlushCollector {
    cycles: AtomicU32,
    last_pass: RwLock<Option<Instant>>,
}

impl FlushCollector {
    pub fn new() -> Self {
        Self {
            cycles: AtomicU32::new(0),
            last_pass: RwLock::new(None),
        }
    }

    /// Time of the most recent pass, if any
    pub fn last_pass(&self) -> Option<Instant> {
        *self.last_pass.read()
    }
}

impl Default for FlushCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl Collector for FlushCollector {
    fn collect(&self) {
        let cycle = self.cycles.fetch_add(1, Ordering::AcqRel) + 1;
        *self.last_pass.write() = Some(Instant::now());
        debug!(cycle, "collection pass complete");
    }

    fn cycles(&self) -> u32 {
        self.cycles.load(Ordering::Acquire)
    }
}
