/*!
 * Handler implementations for HTTP routes
 */

pub mod entity_handlers;

pub use entity_handlers::{handle_create_records, handle_request};
