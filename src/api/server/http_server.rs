/*!
 * HTTP Server
 * Serves the allocation endpoint over HTTP/1
 */

use crate::api::handlers::handle_request;
use crate::api::types::ServerConfig;
use crate::core::errors::{ServerError, ServerResult};
use crate::reporter::AllocationReporter;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::{TokioIo, TokioTimer};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, info, warn};

/// HTTP server for the reporter
pub struct HttpServer {
    config: ServerConfig,
    reporter: Arc<AllocationReporter>,
    running: Arc<AtomicBool>,
}

impl HttpServer {
    pub fn new(config: ServerConfig, reporter: Arc<AllocationReporter>) -> Self {
        info!(
            addr = %config.address,
            policy = %config.zero_count_policy,
            "HTTP server initialized"
        );
        Self {
            config,
            reporter,
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Bind the configured address
    pub async fn bind(&self) -> ServerResult<TcpListener> {
        TcpListener::bind(self.config.address)
            .await
            .map_err(|source| ServerError::Bind {
                address: self.config.address,
                source,
            })
    }

    /// Accept connections on `listener` until `shutdown` resolves
    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> ServerResult<()>
    where
        F: Future<Output = ()>,
    {
        let local_addr = listener.local_addr()?;
        info!(addr = %local_addr, "HTTP server listening");
        self.running.store(true, Ordering::SeqCst);

        tokio::pin!(shutdown);
        loop {
            tokio::select! {
                accepted = listener.accept() => match accepted {
                    Ok((stream, peer)) => self.spawn_connection(stream, peer),
                    Err(e) => warn!(error = %e, "Failed to accept connection"),
                },
                _ = &mut shutdown => break,
            }
        }

        self.running.store(false, Ordering::SeqCst);
        info!("HTTP server stopped");
        Ok(())
    }

    fn spawn_connection(&self, stream: TcpStream, peer: SocketAddr) {
        let io = TokioIo::new(stream);
        let reporter = self.reporter.clone();
        let policy = self.config.zero_count_policy;
        let header_timeout = Duration::from_secs(self.config.header_read_timeout_secs);

        tokio::spawn(async move {
            let service =
                service_fn(move |request| handle_request(reporter.clone(), policy, request));

            if let Err(e) = http1::Builder::new()
                .timer(TokioTimer::new())
                .header_read_timeout(header_timeout)
                .serve_connection(io, service)
                .await
            {
                debug!(peer = %peer, error = %e, "Connection closed with error");
            }
        });
    }
}

/// Bind and serve until Ctrl+C
pub async fn start_http_server(
    config: ServerConfig,
    reporter: Arc<AllocationReporter>,
) -> ServerResult<()> {
    let server = HttpServer::new(config, reporter);
    let listener = server.bind().await?;

    server
        .serve(listener, async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!(error = %e, "Failed to listen for Ctrl+C");
                std::future::pending::<()>().await;
            }
            info!("Shutdown signal received");
        })
        .await
}
