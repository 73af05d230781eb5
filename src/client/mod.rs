//! Client module for the attribute-oriented key-value store
//!
//! Provides the components for interacting with an attrkv store:
//! - [`Client`] - Main entry point owning the session
//! - [`ClientBuilder`] - Configurable client construction
//! - [`SpaceClient`] - GET/PUT/PARTIAL-GET/DELETE operations
//! - [`Connection`] - Underlying session management
//! - [`Attributes`] / [`Status`] - Typed operation results
//!
//! # Basic Usage
//! ```no_run
//! use attrkv::{Client, Status};
//! use std::time::Duration;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let client = Client::builder("127.0.0.1", 1982)
//!         .connect_timeout(Duration::from_secs(3))
//!         .request_timeout(Duration::from_secs(1))
//!         .enable_compression(true)
//!         .build()
//!         .await
//!         .unwrap();
//!
//!     let attrs = [("v1", "ABC")].into_iter().collect();
//!     let status = client.space().put("kv", "k", attrs).await.unwrap();
//!     assert_eq!(status, Status::Success);
//!
//!     let (attrs, status) = client.space().get("kv", "k").await.unwrap();
//!     println!("read {status:?}: {attrs:?}");
//! }
//! ```

mod attrs;
mod builder;
mod config;
mod connection;
mod error;
mod space;

pub use attrs::*;
pub use builder::*;
pub use config::*;
pub use connection::*;
pub use error::*;
pub use space::*;

#[cfg(test)]
pub(crate) mod mock_rpc;
#[cfg(test)]
pub(crate) mod mock_rpc_service;

use std::sync::Arc;

use arc_swap::ArcSwap;

/// Main entry point for interacting with an attrkv store
///
/// Owns the session and provides access to the operations client via
/// [`space()`](Client::space). Created through
/// [`builder()`](Client::builder) or [`connect()`](Client::connect).
#[derive(Clone)]
pub struct Client {
    /// Space operations client interface
    pub(super) space: SpaceClient,

    pub(super) inner: Arc<ArcSwap<ClientInner>>,
}

#[derive(Clone)]
pub struct ClientInner {
    pub(super) conn: Connection,
    pub(super) config: ClientConfig,
}

impl Client {
    /// Access the space operations client
    ///
    /// # Examples
    /// ```rust,ignore
    /// client.space().put("kv", "k", attrs).await?;
    /// ```
    pub fn space(&self) -> &SpaceClient {
        &self.space
    }

    /// Create a configured client builder
    ///
    /// Starts client construction with the store address. Chain
    /// configuration methods before calling
    /// [`build()`](ClientBuilder::build).
    pub fn builder(
        host: impl Into<String>,
        port: u16,
    ) -> ClientBuilder {
        ClientBuilder::new(host, port)
    }

    /// Connect with default configuration
    ///
    /// # Errors
    /// [`ClientApiError::Network`] when the store is unreachable or the
    /// handshake fails.
    pub async fn connect(
        host: impl Into<String>,
        port: u16,
    ) -> std::result::Result<Self, ClientApiError> {
        Self::builder(host, port).build().await
    }

    pub(crate) async fn create(
        host: String,
        port: u16,
        config: ClientConfig,
    ) -> std::result::Result<Self, ClientApiError> {
        let conn = Connection::create(&host, port, &config).await?;
        let inner = Arc::new(ArcSwap::from_pointee(ClientInner { conn, config }));
        Ok(Self {
            space: SpaceClient::new(inner.clone()),
            inner,
        })
    }

    /// Server version reported during the connect handshake
    pub fn server_version(&self) -> String {
        self.inner.load().conn.server_version().to_string()
    }

    /// Tears down and re-establishes the underlying channel.
    ///
    /// The swap is atomic: on failure the previous session stays in place.
    pub async fn refresh(&self) -> std::result::Result<(), ClientApiError> {
        let old_inner = self.inner.load();
        let config = old_inner.config.clone();

        let mut conn = old_inner.conn.clone();
        conn.refresh(&config).await?;

        let new_inner = Arc::new(ClientInner { conn, config });
        self.inner.store(new_inner);
        Ok(())
    }
}
