/*!
 * Allocation Reporter - Main Entry Point
 *
 * Serves `GET /entity/{count}`: allocates `count` records and logs heap
 * statistics before and after.
 */

use std::error::Error;
use std::sync::Arc;
use tracing::{error, info};

use alloc_reporter::{
    init_tracing, start_http_server, AllocationReporter, ServerConfig, TrackingAllocator,
};

#[cfg(all(feature = "jemalloc", not(target_env = "msvc")))]
#[global_allocator]
static GLOBAL: TrackingAllocator<tikv_jemallocator::Jemalloc> =
    TrackingAllocator::new(tikv_jemallocator::Jemalloc);

#[cfg(not(all(feature = "jemalloc", not(target_env = "msvc"))))]
#[global_allocator]
static GLOBAL: TrackingAllocator<std::alloc::System> = TrackingAllocator::new(std::alloc::System);

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    info!("Allocation reporter starting...");

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return Err(e.into());
        }
    };

    let reporter = Arc::new(AllocationReporter::for_process());
    info!(
        record_size = AllocationReporter::record_size(),
        tracking = GLOBAL.counters().is_tracking(),
        "Reporter initialized"
    );

    if let Err(e) = start_http_server(config, reporter).await {
        error!(error = %e, "HTTP server error");
        return Err(e.into());
    }

    Ok(())
}
