/*!
 * Server Tests
 * End-to-end requests over a real listener
 */

use alloc_reporter::{AllocationReporter, HttpServer, Record, ServerConfig, ZeroCountPolicy};
use pretty_assertions::assert_eq;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

struct RunningServer {
    addr: SocketAddr,
    server: Arc<HttpServer>,
    reporter: Arc<AllocationReporter>,
    stop: oneshot::Sender<()>,
    handle: JoinHandle<alloc_reporter::ServerResult<()>>,
}

async fn start(configure: impl FnOnce(ServerConfig) -> ServerConfig) -> RunningServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let reporter = Arc::new(AllocationReporter::for_process());
    let server = Arc::new(HttpServer::new(
        configure(ServerConfig::new(addr)),
        reporter.clone(),
    ));
    let (stop, stop_rx) = oneshot::channel::<()>();

    let serving = server.clone();
    let handle = tokio::spawn(async move {
        serving
            .serve(listener, async {
                let _ = stop_rx.await;
            })
            .await
    });

    RunningServer {
        addr,
        server,
        reporter,
        stop,
        handle,
    }
}

impl RunningServer {
    async fn get(&self, path: &str) -> reqwest::Response {
        reqwest::get(format!("http://{}{}", self.addr, path))
            .await
            .unwrap()
    }

    async fn shutdown(self) -> Arc<HttpServer> {
        self.stop.send(()).unwrap();
        self.handle.await.unwrap().unwrap();
        self.server
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_serves_entity_endpoint() {
    let running = start(|config| config).await;

    let response = running.get("/entity/5").await;
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/json"
    );
    assert_eq!(
        response.text().await.unwrap(),
        format!("\"allocated: {} bytes\"\n", 5 * Record::SIZE)
    );

    let response = running.get("/entity/%35").await;
    assert_eq!(
        response.text().await.unwrap(),
        format!("\"allocated: {} bytes\"\n", 5 * Record::SIZE)
    );
    assert_eq!(running.reporter.held_records(), 5);

    let response = running.get("/entity/0").await;
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "");
    assert_eq!(running.reporter.held_records(), 0);

    running.shutdown().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_reject_policy_and_lifecycle() {
    let running = start(|config| {
        config
            .with_zero_count_policy(ZeroCountPolicy::Reject)
            .with_header_read_timeout(5)
    })
    .await;

    assert_eq!(
        running.server.config().zero_count_policy,
        ZeroCountPolicy::Reject
    );
    assert_eq!(running.server.config().header_read_timeout_secs, 5);

    let response = running.get("/entity/0").await;
    assert!(running.server.is_running());
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    assert_eq!(
        response.text().await.unwrap(),
        "{\"error\":\"amount was 0\"}\n"
    );

    let server = running.shutdown().await;
    assert!(!server.is_running());
}
