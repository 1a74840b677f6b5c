/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export ReportError from reporter module
pub use crate::reporter::{ReportError, ReportResult};

/// Configuration errors raised while reading the environment
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ConfigError {
    #[error("Invalid listen address '{value}': {reason}")]
    #[diagnostic(
        code(config::invalid_address),
        help("Use HOST:PORT, for example 0.0.0.0:8000.")
    )]
    InvalidAddress { value: String, reason: String },

    #[error("Invalid zero-count policy '{0}'")]
    #[diagnostic(
        code(config::invalid_policy),
        help("Use 'silent' or 'reject'.")
    )]
    InvalidPolicy(String),
}

/// HTTP server errors
#[derive(Error, Debug, Diagnostic)]
pub enum ServerError {
    #[error("Failed to bind {address}: {source}")]
    #[diagnostic(
        code(server::bind_failed),
        help("Check that the port is free and the address is valid on this host.")
    )]
    Bind {
        address: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server I/O error: {0}")]
    #[diagnostic(code(server::io))]
    Io(#[from] std::io::Error),
}

/// Server operation result
pub type ServerResult<T> = Result<T, ServerError>;
