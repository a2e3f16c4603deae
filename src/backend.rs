//! Search backend access
//!
//! Holds the typed wire model for `GET /search`, the HTTP client that
//! performs the call, and the worker thread that runs it off the UI thread.

mod client;
mod types;
pub mod uri;
pub mod worker;

pub use client::{RequestError, SearchClient};
pub use types::{SearchParams, SearchResponse, SearchResult};

/// What the worker hands back for one search request
pub type SearchOutcome = Result<SearchResponse, RequestError>;
