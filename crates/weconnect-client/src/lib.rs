//! WeConnect ID Client Library
//!
//! Provides a typed HTTP client for the VW WeConnect ID vehicle cloud API:
//! vehicle discovery, status telemetry, and asynchronous action commands.
//!
//! The client is stateless and reads the bearer token from an externally
//! owned [`TokenProvider`] on every call, so token refresh is entirely the
//! identity provider's concern. It never retries, caches, or polls; callers
//! own that policy.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use weconnect_client::{Action, ActionValue, SharedToken, WeConnectClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Token slot refreshed elsewhere by the identity provider
//!     let token = SharedToken::new("eyJ...");
//!     let client = WeConnectClient::new(Arc::new(token));
//!
//!     // Discover vehicles
//!     let vins = client.list_vehicles().await?;
//!
//!     // Fetch telemetry
//!     let status = client.status(&vins[0]).await?;
//!     println!("SOC: {}%", status.battery_status.current_soc_pct);
//!
//!     // Fire-and-forget command
//!     client
//!         .action(&vins[0], Action::Charging, ActionValue::Start)
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Unmodeled endpoints
//!
//! The vendor API has more endpoints than this crate types. The
//! [`WeConnectClient::any`] escape hatch issues an authenticated GET against
//! a caller-supplied endpoint (with an optional `%s` vehicle-id placeholder)
//! and returns the raw [`serde_json::Value`] for ad-hoc inspection.
//!
//! # Testing
//!
//! The `testing` module provides an axum-backed [`testing::TestServer`]:
//!
//! ```rust,ignore
//! use weconnect_client::testing::TestServer;
//!
//! let server = TestServer::start(mock_router()).await?;
//! let vins = server.client.list_vehicles().await?;
//! ```

mod client;
mod error;
mod identity;
pub mod testing;
mod types;

pub use client::WeConnectClient;
pub use error::{Result, WeConnectError};
pub use identity::{SharedToken, StaticToken, TokenProvider};
pub use types::*;
