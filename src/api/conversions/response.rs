/*!
 * Response Conversion Utilities
 * Converts reporter results to HTTP responses
 */

use crate::api::types::ZeroCountPolicy;
use crate::reporter::{Allocation, ReportError};
use bytes::Bytes;
use http_body_util::Full;
use hyper::header::{HeaderValue, ALLOW, CONTENT_TYPE};
use hyper::{Response, StatusCode};
use serde::Serialize;
use tracing::error;

/// Response type produced by every handler
pub type HttpResponse = Response<Full<Bytes>>;

const JSON: &str = "application/json";
const TEXT: &str = "text/plain; charset=utf-8";

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

fn build(status: StatusCode, content_type: Option<&'static str>, body: Bytes) -> HttpResponse {
    let mut response = Response::new(Full::new(body));
    *response.status_mut() = status;
    if let Some(content_type) = content_type {
        response
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    }
    response
}

/// Serialize `value` as one JSON document followed by a newline
fn encode_json_line<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<Bytes> {
    let mut body = serde_json::to_vec(value)?;
    body.push(b'\n');
    Ok(Bytes::from(body))
}

/// 200 with the allocation message as a JSON string
pub fn allocation_response(allocation: &Allocation) -> HttpResponse {
    match encode_json_line(&allocation.message()) {
        Ok(body) => build(StatusCode::OK, Some(JSON), body),
        Err(e) => {
            error!(error = %e, "Failed to encode allocation response");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "failed to encode response")
        }
    }
}

/// JSON error body `{"error": "..."}`
pub fn error_response(status: StatusCode, message: &str) -> HttpResponse {
    match encode_json_line(&ErrorBody { error: message }) {
        Ok(body) => build(status, Some(JSON), body),
        Err(_) => build(status, Some(TEXT), Bytes::copy_from_slice(message.as_bytes())),
    }
}

/// 200 with no body
pub fn empty_response() -> HttpResponse {
    build(StatusCode::OK, None, Bytes::new())
}

pub fn not_found() -> HttpResponse {
    build(
        StatusCode::NOT_FOUND,
        Some(TEXT),
        Bytes::from_static(b"404 page not found\n"),
    )
}

pub fn method_not_allowed() -> HttpResponse {
    let mut response = build(
        StatusCode::METHOD_NOT_ALLOWED,
        Some(TEXT),
        Bytes::from_static(b"Method Not Allowed"),
    );
    response
        .headers_mut()
        .insert(ALLOW, HeaderValue::from_static("GET"));
    response
}

/// Map a reporter error onto a response
pub fn report_error_response(err: &ReportError, policy: ZeroCountPolicy) -> HttpResponse {
    match err {
        ReportError::ZeroCount => match policy {
            ZeroCountPolicy::Silent => empty_response(),
            ZeroCountPolicy::Reject => error_response(StatusCode::BAD_REQUEST, &err.to_string()),
        },
        ReportError::NegativeCount(_) => error_response(StatusCode::BAD_REQUEST, &err.to_string()),
        ReportError::AllocationFailed { .. } => {
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    }
}
