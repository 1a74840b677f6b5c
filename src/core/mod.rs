/*!
 * Core Module
 * Shared limits and error types
 */

pub mod errors;
pub mod limits;

// Re-export for convenience
pub use errors::*;
