/*!
 * Reporter Types
 * Allocation results and errors
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reporter operation result
pub type ReportResult<T> = Result<T, ReportError>;

/// Reporter errors
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ReportError {
    /// Explicit zero, or a count that did not parse
    #[error("amount was 0")]
    #[diagnostic(
        code(reporter::zero_count),
        help("Request a positive base-10 record count, e.g. /entity/1000.")
    )]
    ZeroCount,

    #[error("Record count must not be negative: {0}")]
    #[diagnostic(
        code(reporter::negative_count),
        help("Request a positive base-10 record count.")
    )]
    NegativeCount(i64),

    #[error("Failed to allocate {requested} records")]
    #[diagnostic(
        code(reporter::allocation_failed),
        help("The process could not reserve enough memory. Request fewer records.")
    )]
    AllocationFailed { requested: usize },
}

/// Outcome of a successful allocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    pub records: usize,
    pub bytes: usize,
}

impl Allocation {
    /// Text returned to the caller
    pub fn message(&self) -> String {
        format!("allocated: {} bytes", self.bytes)
    }
}
