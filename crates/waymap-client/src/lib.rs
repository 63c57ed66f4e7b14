//! HTTP client for the waymap graph document
//!
//! Fetches the JSON graph document from the backend and answers node
//! lookups against it. Nothing is cached: every operation is one fresh
//! round trip, and failures surface as `None` plus a diagnostic log entry,
//! never as an error.

pub mod client;
pub mod config;
pub mod transport;

pub use client::GraphClient;
pub use config::ClientConfig;
pub use transport::{GraphTransport, HttpTransport};
