/*!
 * Handler Tests
 * Request dispatch without a network listener
 */

use alloc_reporter::api::handle_request;
use alloc_reporter::{AllocationReporter, Record, ZeroCountPolicy};
use http_body_util::BodyExt;
use hyper::{Method, Request, StatusCode};
use pretty_assertions::assert_eq;
use std::sync::Arc;

async fn call(
    reporter: &Arc<AllocationReporter>,
    policy: ZeroCountPolicy,
    method: Method,
    path: &str,
) -> (StatusCode, String) {
    let request = Request::builder()
        .method(method)
        .uri(path)
        .body(())
        .unwrap();

    let response = handle_request(reporter.clone(), policy, request)
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

fn reporter() -> Arc<AllocationReporter> {
    Arc::new(AllocationReporter::for_process())
}

fn expected_body(count: usize) -> String {
    format!("\"allocated: {} bytes\"\n", count * Record::SIZE)
}

#[tokio::test]
async fn test_get_entity_reports_bytes() {
    let reporter = reporter();
    let (status, body) = call(&reporter, ZeroCountPolicy::Silent, Method::GET, "/entity/5").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, expected_body(5));
    assert_eq!(reporter.held_records(), 5);
}

#[tokio::test]
async fn test_same_request_twice_is_idempotent() {
    let reporter = reporter();
    let first = call(&reporter, ZeroCountPolicy::Silent, Method::GET, "/entity/1000").await;
    let second = call(&reporter, ZeroCountPolicy::Silent, Method::GET, "/entity/1000").await;

    assert_eq!(first, second);
    assert_eq!(reporter.held_records(), 1000);
}

#[tokio::test]
async fn test_zero_and_garbage_are_silent_by_default() {
    let reporter = reporter();
    for path in ["/entity/0", "/entity/abc"] {
        let (status, body) = call(&reporter, ZeroCountPolicy::Silent, Method::GET, path).await;
        assert_eq!(status, StatusCode::OK, "path {}", path);
        assert_eq!(body, "", "path {}", path);
    }
}

#[tokio::test]
async fn test_zero_rejected_with_reject_policy() {
    let reporter = reporter();
    let (status, body) = call(&reporter, ZeroCountPolicy::Reject, Method::GET, "/entity/0").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "{\"error\":\"amount was 0\"}\n");
}

#[tokio::test]
async fn test_negative_count_is_bad_request() {
    let reporter = reporter();
    let (status, body) = call(&reporter, ZeroCountPolicy::Silent, Method::GET, "/entity/-1").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("must not be negative"));
    assert_eq!(reporter.held_records(), 0);
}

#[tokio::test]
async fn test_wrong_method_and_unknown_path() {
    let reporter = reporter();

    let (status, _) = call(&reporter, ZeroCountPolicy::Silent, Method::POST, "/entity/5").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(reporter.held_records(), 0);

    let (status, body) = call(&reporter, ZeroCountPolicy::Silent, Method::GET, "/entity/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "404 page not found\n");

    let (status, _) = call(&reporter, ZeroCountPolicy::Silent, Method::GET, "/other").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_percent_encoded_count_is_decoded() {
    let reporter = reporter();
    let (status, body) =
        call(&reporter, ZeroCountPolicy::Silent, Method::GET, "/entity/%35").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, expected_body(5));
    assert_eq!(reporter.held_records(), 5);
}
