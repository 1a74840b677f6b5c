/*!
 * Allocation Reporter Library
 * Allocates records on request and reports process memory statistics
 */

pub mod api;
pub mod core;
pub mod memory;
pub mod monitoring;
pub mod reporter;

// Re-exports
pub use api::{start_http_server, HttpServer, ServerConfig, ZeroCountPolicy};
pub use crate::core::errors::{ConfigError, ServerError, ServerResult};
pub use memory::{
    Collector, FlushCollector, MemoryStats, ProcessStats, StatsSource, TrackingAllocator,
};
pub use monitoring::init_tracing;
pub use reporter::{Allocation, AllocationReporter, Record, ReportError, ReportResult};
