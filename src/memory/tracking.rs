/*!
 * Tracking Allocator
 * Global allocator wrapper that keeps process-wide heap counters
 *
 * Install it in the binary:
 *
 * ```rust,ignore
 * #[global_allocator]
 * static GLOBAL: TrackingAllocator = TrackingAllocator::new(std::alloc::System);
 * ```
 */

use super::types::CounterSnapshot;
use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Counters shared by every allocation routed through the global allocator
pub static COUNTERS: AllocationCounters = AllocationCounters::new();

/// Heap counters updated from allocator hooks
///
/// All updates are relaxed: each counter is independent and readers only
/// need an approximate snapshot.
pub struct AllocationCounters {
    live: AtomicU64,
    peak: AtomicU64,
    total: AtomicU64,
    allocations: AtomicU64,
    deallocations: AtomicU64,
    tracking: AtomicBool,
}

impl AllocationCounters {
    pub const fn new() -> Self {
        Self {
            live: AtomicU64::new(0),
            peak: AtomicU64::new(0),
            total: AtomicU64::new(0),
            allocations: AtomicU64::new(0),
            deallocations: AtomicU64::new(0),
            tracking: AtomicBool::new(false),
        }
    }

    #[inline]
    fn mark_tracking(&self) {
        if !self.tracking.load(Ordering::Relaxed) {
            self.tracking.store(true, Ordering::Relaxed);
        }
    }

    #[inline]
    fn grow(&self, size: u64) {
        self.total.fetch_add(size, Ordering::Relaxed);
        let live = self.live.fetch_add(size, Ordering::Relaxed) + size;
        self.peak.fetch_max(live, Ordering::Relaxed);
    }

    #[inline]
    fn shrink(&self, size: u64) {
        self.live.fetch_sub(size, Ordering::Relaxed);
    }

    /// Record a successful allocation of `size` bytes
    #[inline]
    pub fn record_alloc(&self, size: usize) {
        self.mark_tracking();
        self.allocations.fetch_add(1, Ordering::Relaxed);
        self.grow(size as u64);
    }

    /// Record a deallocation of `size` bytes
    #[inline]
    pub fn record_dealloc(&self, size: usize) {
        self.deallocations.fetch_add(1, Ordering::Relaxed);
        self.shrink(size as u64);
    }

    /// Record a successful reallocation from `old_size` to `new_size` bytes
    #[inline]
    pub fn record_realloc(&self, old_size: usize, new_size: usize) {
        self.mark_tracking();
        if new_size >= old_size {
            self.grow((new_size - old_size) as u64);
        } else {
            self.shrink((old_size - new_size) as u64);
        }
    }

    /// Whether any allocation has been routed through these counters
    pub fn is_tracking(&self) -> bool {
        self.tracking.load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            live_bytes: self.live.load(Ordering::Relaxed),
            peak_bytes: self.peak.load(Ordering::Relaxed),
            total_bytes: self.total.load(Ordering::Relaxed),
            allocations: self.allocations.load(Ordering::Relaxed),
            deallocations: self.deallocations.load(Ordering::Relaxed),
        }
    }
}

impl Default for AllocationCounters {
    fn default() -> Self {
        Self::new()
    }
}

/// Allocator wrapper that forwards to `A` and updates counters
pub struct TrackingAllocator<A = System> {
    inner: A,
    counters: &'static AllocationCounters,
}

impl<A> TrackingAllocator<A> {
    /// Wrap `inner`, reporting into the process-wide [`COUNTERS`]
    pub const fn new(inner: A) -> Self {
        Self {
            inner,
            counters: &COUNTERS,
        }
    }

    /// Wrap `inner`, reporting into a caller-owned counter set
    pub const fn with_counters(inner: A, counters: &'static AllocationCounters) -> Self {
        Self { inner, counters }
    }

    pub fn counters(&self) -> &'static AllocationCounters {
        self.counters
    }
}

// SAFETY: every call is delegated to `inner`, which upholds the GlobalAlloc
// contract. Counter updates are atomics and never allocate.
unsafe impl<A: GlobalAlloc> GlobalAlloc for TrackingAllocator<A> {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { self.inner.alloc(layout) };
        if !ptr.is_null() {
            self.counters.record_alloc(layout.size());
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { self.inner.alloc_zeroed(layout) };
        if !ptr.is_null() {
            self.counters.record_alloc(layout.size());
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { self.inner.dealloc(ptr, layout) };
        self.counters.record_dealloc(layout.size());
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = unsafe { self.inner.realloc(ptr, layout, new_size) };
        if !new_ptr.is_null() {
            self.counters.record_realloc(layout.size(), new_size);
        }
        new_ptr
    }
}
