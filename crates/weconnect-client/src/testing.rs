//! Test utilities for weconnect-client
//!
//! Provides helpers for running integration tests against a mock of the
//! vendor API served by axum.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::identity::{StaticToken, TokenProvider};
use crate::{Result, WeConnectClient};

/// Bearer token used by [`TestServer::start`]
pub const TEST_TOKEN: &str = "test-token";

/// A test server that automatically shuts down when dropped
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: WeConnectClient,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
    handle: Option<tokio::task::JoinHandle<()>>,
}

impl TestServer {
    /// Create a new test server from an axum Router.
    ///
    /// The returned client is pointed at the server and authenticates with
    /// [`TEST_TOKEN`].
    ///
    /// # Example
    ///
    /// ```ignore
    /// use weconnect_client::testing::TestServer;
    ///
    /// let router = axum::Router::new().route("/vehicles", get(list_handler));
    /// let server = TestServer::start(router).await?;
    ///
    /// let vins = server.client.list_vehicles().await?;
    /// ```
    pub async fn start<S>(router: axum::Router<S>) -> Result<Self>
    where
        S: Clone + Send + Sync + 'static,
        axum::Router<S>: Into<axum::Router>,
    {
        Self::start_with_identity(router, Arc::new(StaticToken::new(TEST_TOKEN))).await
    }

    /// Create a new test server with a caller-supplied token source, for
    /// exercising token-refresh behaviour.
    pub async fn start_with_identity<S>(
        router: axum::Router<S>,
        identity: Arc<dyn TokenProvider>,
    ) -> Result<Self>
    where
        S: Clone + Send + Sync + 'static,
        axum::Router<S>: Into<axum::Router>,
    {
        // Bind to any available port
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();

        let router: axum::Router = router.into();

        // Spawn the server
        let handle = tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .ok();
        });

        let client = WeConnectClient::new(identity).with_base_url(format!("http://{}", addr));

        Ok(Self {
            addr,
            client,
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        })
    }

    /// Get the base URL of the test server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Get a reference to the client
    pub fn client(&self) -> &WeConnectClient {
        &self.client
    }

    /// Shutdown the server gracefully
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
