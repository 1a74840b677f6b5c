/*!
 * Server Module
 * HTTP server components
 */

pub mod http_server;

pub use http_server::{start_http_server, HttpServer};
