/*!
 * Conversion utilities for HTTP responses
 */

pub mod response;

pub use response::{
    allocation_response, empty_response, error_response, method_not_allowed, not_found,
    report_error_response, HttpResponse,
};
