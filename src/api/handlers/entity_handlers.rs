/*!
 * Entity route handlers
 */

use crate::api::conversions::{
    allocation_response, error_response, method_not_allowed, not_found, report_error_response,
    HttpResponse,
};
use crate::api::router::{route, Route};
use crate::api::types::ZeroCountPolicy;
use crate::monitoring::span_request;
use crate::reporter::AllocationReporter;
use hyper::{Method, Request, StatusCode};
use std::convert::Infallible;
use std::sync::Arc;
use tracing::{error, info, Instrument};

/// Dispatch one request
///
/// The body is never read, so any body type is accepted.
pub async fn handle_request<B>(
    reporter: Arc<AllocationReporter>,
    policy: ZeroCountPolicy,
    request: Request<B>,
) -> Result<HttpResponse, Infallible> {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    drop(request);
    let span = span_request(&method, &path);

    async move {
        let response = match route(&path) {
            Some(Route::Entity { count }) if method == Method::GET => {
                handle_create_records(reporter, policy, count.into_owned()).await
            }
            Some(Route::Entity { .. }) => method_not_allowed(),
            None => not_found(),
        };
        info!(status = response.status().as_u16(), "request complete");
        Ok::<_, Infallible>(response)
    }
    .instrument(span)
    .await
}

/// `GET /entity/{count}`
///
/// Allocation is blocking CPU work and runs off the async workers.
pub async fn handle_create_records(
    reporter: Arc<AllocationReporter>,
    policy: ZeroCountPolicy,
    count: String,
) -> HttpResponse {
    let span = tracing::Span::current();
    let result =
        tokio::task::spawn_blocking(move || span.in_scope(|| reporter.handle(&count))).await;

    match result {
        Ok(Ok(allocation)) => allocation_response(&allocation),
        Ok(Err(err)) => report_error_response(&err, policy),
        Err(e) => {
            error!(error = %e, "Allocation task failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "allocation task failed")
        }
    }
}
