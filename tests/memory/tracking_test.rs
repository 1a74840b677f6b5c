/*!
 * Tracking Allocator Tests
 * Counters and statistics with the allocator installed globally
 */

use alloc_reporter::memory::{COUNTERS, ProcessStats, StatsSource};
use alloc_reporter::{AllocationReporter, FlushCollector, Record};
use serial_test::serial;
use std::hint::black_box;

const ONE_MIB: u64 = 1024 * 1024;

#[test]
#[serial]
fn test_global_counters_are_tracking() {
    let _warmup = black_box(vec![0u8; 16]);
    assert!(COUNTERS.is_tracking());
}

#[test]
#[serial]
fn test_vec_allocation_is_counted() {
    let before = COUNTERS.snapshot();

    let buffer: Vec<u8> = black_box(Vec::with_capacity(ONE_MIB as usize));
    let during = COUNTERS.snapshot();
    assert!(during.total_bytes >= before.total_bytes + ONE_MIB);
    assert!(during.live_bytes >= ONE_MIB);
    assert!(during.allocations > before.allocations);

    drop(buffer);
    let after = COUNTERS.snapshot();
    assert!(after.deallocations > during.deallocations);
    assert!(after.total_bytes >= during.total_bytes);
}

#[test]
#[serial]
fn test_total_alloc_is_monotonic() {
    let stats = ProcessStats::new();
    let mut previous = stats.read().total_alloc;

    for size in [128usize, 4096, 65536] {
        let block = black_box(vec![1u8; size]);
        let current = stats.read().total_alloc;
        assert!(current >= previous + size as u64);
        previous = current;
        drop(block);
    }
}

#[test]
#[serial]
fn test_reporter_stats_reflect_held_records() {
    let reporter = AllocationReporter::new(FlushCollector::new(), ProcessStats::new());
    let count = 100_000usize;

    let allocation = reporter.handle(&count.to_string()).unwrap();
    assert_eq!(allocation.bytes, count * Record::SIZE);

    let stats = reporter.read_stats();
    assert!(stats.alloc >= (count * Record::SIZE) as u64);
    assert_eq!(stats.alloc, stats.heap_alloc);
    assert!(stats.total_alloc >= stats.alloc);
    assert_eq!(stats.num_gc, 2);
}

#[cfg(target_os = "linux")]
#[test]
#[serial]
fn test_process_stats_include_os_figures() {
    let stats = ProcessStats::new().read();
    assert!(stats.sys > 0);
    assert!(stats.heap_sys > 0);
}
