//! Protocol Buffer definitions and generated code for the SpaceService RPC
//! surface.
//!
//! The Rust types are generated from the definitions under `proto/` with
//! `tonic-build` and committed under `src/generated/`; regenerate them when
//! the `.proto` files change.

pub mod error {
    include!("../generated/attrkv.error.rs");
}

pub mod client {
    include!("../generated/attrkv.client.rs");
}

mod client_ext;
pub use client_ext::*;

#[cfg(test)]
mod client_ext_test;
