/*!
 * System Limits and Constants
 *
 * Centralized location for defaults and fixed values used across the service.
 */

// =============================================================================
// NETWORK
// =============================================================================

/// Port the service listens on when no address is configured
pub const DEFAULT_PORT: u16 = 8000;

/// Time allowed for a client to finish sending request headers
pub const DEFAULT_HEADER_READ_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// ROUTING
// =============================================================================

/// Path prefix of the allocation endpoint (`/entity/{count}`)
pub const ENTITY_ROUTE_PREFIX: &str = "/entity/";

// =============================================================================
// MEMORY REPORTING
// =============================================================================

/// Bytes per KiB, as used by `/proc/self/status`
pub const BYTES_PER_KIB: u64 = 1024;

// =============================================================================
// ENVIRONMENT
// =============================================================================

/// Listen address override
pub const ENV_ADDR: &str = "REPORTER_ADDR";

/// Zero-count policy override (`silent` or `reject`)
pub const ENV_ZERO_COUNT: &str = "REPORTER_ZERO_COUNT";

/// Enables JSON log output when set to `1` or `true`
pub const ENV_TRACE_JSON: &str = "REPORTER_TRACE_JSON";
