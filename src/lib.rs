//! # attrkv
//!
//! Client library for an attribute-oriented distributed key-value store.
//!
//! Records live in named **spaces** and carry a set of scalar attributes.
//! The client owns a single gRPC session to the store and exposes typed
//! GET/PUT/PARTIAL-GET/DELETE operations; store-level outcomes such as a
//! missing key are returned as [`Status`] values, never as errors, so
//! callers can branch on expected conditions.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use attrkv::{Attributes, Client, Status};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::connect("127.0.0.1", 1982).await?;
//!
//!     // Write attributes (merge semantics: unnamed attributes are kept)
//!     let attrs: Attributes = [("v1", "ABC")].into_iter().collect();
//!     client.space().put("kv", "k", attrs).await?;
//!
//!     // Read them back
//!     let (attrs, status) = client.space().get("kv", "k").await?;
//!     assert_eq!(status, Status::Success);
//!     println!("v1 = {:?}", attrs.get("v1"));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! This crate provides:
//! - [`Client`] - Main entry point owning the session
//! - [`ClientBuilder`] - Configurable client construction
//! - [`SpaceClient`] - Space operations (GET/PUT/PARTIAL-GET/DELETE)
//! - [`Attributes`] - Attribute mapping with documented sloppy equality
//! - [`Status`] - Closed operation outcome taxonomy

mod client;
mod proto;
mod scoped_timer;
pub mod utils;

pub use client::*;

// ==================== Protocol Types (Essential for Public API) ====================

/// Protocol types needed for advanced client usage
///
/// These are the wire-level request/response types; most callers only need
/// the typed API on [`SpaceClient`].
pub mod protocol {
    pub use crate::proto::client::Attribute;
    pub use crate::proto::client::SpaceDeleteRequest;
    pub use crate::proto::client::SpaceReadRequest;
    pub use crate::proto::client::SpaceReadResponse;
    pub use crate::proto::client::SpaceWriteRequest;
    pub use crate::proto::client::SpaceWriteResponse;
    pub use crate::proto::client::StoreMetadata;
    pub use crate::proto::error::ErrorCode;
    pub use crate::proto::SpaceReadResponseExt;
    pub use crate::proto::SpaceWriteResponseExt;
}
