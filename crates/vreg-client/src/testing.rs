//! Test utilities for vreg-client
//!
//! Provides an in-process server harness for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::TcpListener;

use crate::{Result, VehicleClient};

/// A test server that shuts down when dropped
pub struct TestServer {
    addr: SocketAddr,
    client: VehicleClient,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
    handle: Option<tokio::task::JoinHandle<()>>,
}

impl TestServer {
    /// Serve an axum router on an ephemeral local port
    ///
    /// # Example
    ///
    /// ```ignore
    /// use vreg_client::testing::TestServer;
    /// use vreg_api::{create_router, AppState};
    ///
    /// let server = TestServer::start(create_router(AppState::new())).await?;
    /// let vehicles = server.client().list_vehicles().await?;
    /// ```
    pub async fn start(router: axum::Router) -> Result<Self> {
        Self::start_with_timeout(router, Duration::from_secs(5), Duration::from_secs(2)).await
    }

    /// Serve a router with custom client timeouts
    pub async fn start_with_timeout(
        router: axum::Router,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self> {
        // Bind to any available port
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();

        // Spawn the server
        let handle = tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .ok();
        });

        // Give the server a moment to start
        tokio::time::sleep(Duration::from_millis(10)).await;

        let base_url = format!("http://{}", addr);
        let client = VehicleClient::with_config(&base_url, timeout, connect_timeout)?;

        Ok(Self {
            addr,
            client,
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        })
    }

    /// Get the bound address
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Get the base URL of the test server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Get a reference to the client
    pub fn client(&self) -> &VehicleClient {
        &self.client
    }

    /// Shut the server down gracefully
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        // Send shutdown signal if not already done
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        // Abort the task if still running
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
