//! API module
//!
//! Typed client for the upstream REST API, reached through the proxy relay.

pub mod client;
pub mod envelope;

pub use client::ApiClient;
pub use envelope::ApiResponse;
