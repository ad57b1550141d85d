//! Test server lifecycle management
//!
//! Each test gets an isolated server with its own temp dataset.
//! When dropped, the server shuts down and temp resources are cleaned up.

use super::constants::*;
use super::fixtures::write_test_dataset;
use fest_catalog_server::catalog::EventCatalog;
use fest_catalog_server::server::{make_app, RequestsLoggingLevel, ServerConfig};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::net::TcpListener;

pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// The directory holding the dataset, exposed so tests can edit the
    /// file and observe the per-request reload.
    pub dataset_dir: TempDir,

    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    /// Spawns a test server on a random port over the standard dataset.
    pub async fn spawn() -> Self {
        let (dataset_dir, dataset_path) =
            write_test_dataset().expect("Failed to create test dataset");
        Self::spawn_at(dataset_dir, dataset_path).await
    }

    /// Spawns a test server whose dataset file does not exist, for
    /// degraded-catalog scenarios.
    pub async fn spawn_with_missing_dataset() -> Self {
        let dataset_dir = TempDir::new().expect("Failed to create temp dir");
        let dataset_path = dataset_dir.path().join("absent.json");
        Self::spawn_at(dataset_dir, dataset_path).await
    }

    async fn spawn_at(dataset_dir: TempDir, dataset_path: std::path::PathBuf) -> Self {
        let catalog = Arc::new(EventCatalog::new(&dataset_path));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");

        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let base_url = format!("http://127.0.0.1:{}", port);

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let config = ServerConfig {
            requests_logging_level: RequestsLoggingLevel::None,
            port,
            frontend_dir_path: None,
        };

        let app = make_app(config, catalog);

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Server failed");
        });

        let server = Self {
            base_url,
            dataset_dir,
            _shutdown_tx: Some(shutdown_tx),
        };

        server.wait_for_ready().await;

        server
    }

    /// Waits for the server to become ready by polling the /health endpoint
    async fn wait_for_ready(&self) {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .expect("Failed to build reqwest client");

        let start = std::time::Instant::now();
        let timeout = Duration::from_millis(SERVER_READY_TIMEOUT_MS);

        loop {
            if start.elapsed() > timeout {
                panic!(
                    "Server did not become ready within {}ms",
                    SERVER_READY_TIMEOUT_MS
                );
            }

            match client.get(format!("{}/health", self.base_url)).send().await {
                Ok(response) if response.status().is_success() => {
                    return;
                }
                _ => {
                    tokio::time::sleep(Duration::from_millis(SERVER_READY_POLL_INTERVAL_MS)).await;
                }
            }
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self._shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
