//! Shared data model for waymap
//!
//! Defines the graph document served by the backend and the normalized
//! outcome of a route search, plus the normalization itself.

pub mod document;
pub mod outcome;

pub use document::{GraphDocument, Node};
pub use outcome::{normalize, SearchOutcome};
