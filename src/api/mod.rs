/*!
 * API Module
 * External HTTP interface
 */

pub mod conversions;
pub mod handlers;
pub mod router;
pub mod server;
pub mod types;

// Re-export for convenience
pub use handlers::handle_request;
pub use router::{route, Route};
pub use server::{start_http_server, HttpServer};
pub use types::*;
