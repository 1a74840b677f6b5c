/*!
 * Monitoring
 * Structured logging and request tracing
 */

mod tracer;

pub use tracer::{generate_trace_id, init_tracing, json_output_enabled, span_request};
