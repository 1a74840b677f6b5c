/*!
 * Allocation Reporter
 * Allocates records on request and logs memory statistics around it
 */

use super::record::Record;
use super::types::{Allocation, ReportError, ReportResult};
use crate::memory::{
    bytes_to_mib, Collector, FlushCollector, MemoryStats, ProcessStats, StatsSource,
};
use parking_lot::Mutex;
use tracing::{info, instrument, warn};

/// Parse a requested record count
///
/// Accepts a base-10 integer in the 32-bit signed range. Anything else parses
/// as zero.
pub fn parse_count(count: &str) -> i64 {
    count.parse::<i32>().map(i64::from).unwrap_or(0)
}

/// Handles count-driven allocation requests
///
/// The record store lives here rather than in a global, and its lock is held
/// for a whole request so a clear-then-repopulate cannot interleave.
pub struct AllocationReporter {
    records: Mutex<Vec<Record>>,
    collector: Box<dyn Collector>,
    stats: Box<dyn StatsSource>,
}

impl AllocationReporter {
    pub fn new(
        collector: impl Collector + 'static,
        stats: impl StatsSource + 'static,
    ) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            collector: Box::new(collector),
            stats: Box::new(stats),
        }
    }

    /// Reporter wired to the process collector and process statistics
    pub fn for_process() -> Self {
        Self::new(FlushCollector::new(), ProcessStats::new())
    }

    /// Shallow size of one record in bytes
    pub fn record_size() -> usize {
        Record::SIZE
    }

    /// Number of records currently held
    pub fn held_records(&self) -> usize {
        self.records.lock().len()
    }

    /// Current statistics, with the collector's cycle count
    pub fn read_stats(&self) -> MemoryStats {
        MemoryStats {
            num_gc: self.collector.cycles(),
            ..self.stats.read()
        }
    }

    /// Replace the held records with `count` fresh ones and report the size
    #[instrument(skip(self))]
    pub fn handle(&self, count: &str) -> ReportResult<Allocation> {
        info!("called create_records");
        let mut records = self.records.lock();

        // Release the previous batch before measuring
        *records = Vec::new();
        self.collector.collect();

        info!("creating records");
        let amount = parse_count(count);
        if amount == 0 {
            warn!("Error: amount was 0");
            return Err(ReportError::ZeroCount);
        }
        let amount = usize::try_from(amount).map_err(|_| {
            warn!(amount, "negative record count");
            ReportError::NegativeCount(amount)
        })?;

        reserve_records(&mut records, amount)?;
        info!(records = amount, "created records");

        let allocation = Allocation {
            records: amount,
            bytes: Record::SIZE * amount,
        };

        self.collector.collect();
        log_stats(&self.read_stats());

        Ok(allocation)
    }
}

/// Fill an empty store with `amount` default records
///
/// The reservation is fallible; on failure the store is left untouched.
fn reserve_records(store: &mut Vec<Record>, amount: usize) -> ReportResult<()> {
    store.try_reserve_exact(amount).map_err(|e| {
        warn!(amount, error = %e, "record reservation failed");
        ReportError::AllocationFailed { requested: amount }
    })?;
    store.resize_with(amount, Record::default);
    Ok(())
}

fn log_stats(stats: &MemoryStats) {
    info!(
        alloc_mib = bytes_to_mib(stats.alloc),
        heap_alloc_mib = bytes_to_mib(stats.heap_alloc),
        total_alloc_mib = bytes_to_mib(stats.total_alloc),
        stack_sys_mib = bytes_to_mib(stats.stack_sys),
        heap_sys_mib = bytes_to_mib(stats.heap_sys),
        sys_mib = bytes_to_mib(stats.sys),
        num_gc = stats.num_gc,
        "{}",
        stats
    );
}
