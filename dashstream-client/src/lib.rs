#![deny(missing_docs)]
//! HTTP client and chat stream decoder for the dashstream dashboard.
//!
//! [`DashClient`] covers both sides of the service contract: the simple
//! request/response widget refresh endpoints, and the `stream_chat` endpoint
//! whose chunked response body is decoded into [`StreamEvent`]s.

pub mod client;
pub(crate) mod error;
pub(crate) mod streaming;
pub(crate) mod wire;

pub use client::DashClient;
pub use error::ClientError;

// Re-export the stream types for convenience
pub use dashstream_types::{StreamEvent, StreamHandle};
