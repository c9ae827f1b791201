//! Portal scraping pipeline: form encoding, HTML extraction, and the
//! client that sequences the remote calls.
//!
//! The main entry point is [`PortalClient`]; [`codec`] and [`extractor`]
//! are exposed for direct use by tests and fixtures.

pub mod codec;
pub mod extractor;

mod client;

// Re-export public API
pub use client::PortalClient;
