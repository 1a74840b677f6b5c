/*!
 * Reporter Module
 * Count-driven allocation and memory reporting
 */

pub mod record;
pub mod reporter;
pub mod types;

// Re-export for convenience
pub use record::Record;
pub use reporter::{parse_count, AllocationReporter};
pub use types::*;
