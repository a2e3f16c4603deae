//! HTTP client for the search endpoint
//!
//! Uses reqwest for the request and classifies every failure into a
//! [`RequestError`] whose `Display` output is what the view shows.

use reqwest::{Client, Url};
use serde_json::Value;
use thiserror::Error;

use super::types::{SearchParams, SearchResponse};
use crate::error::SiteSearchError;

/// Errors surfaced to the user when a search request fails
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    /// Non-2xx response carrying a body; shown as the serialized body
    #[error("{body}")]
    Rejected { status: u16, body: Value },

    /// Anything else: connection failures and error responses without a body
    #[error("Network / backend error: {0}")]
    Transport(String),
}

impl RequestError {
    /// Classify a non-2xx response from its status and raw body text
    pub fn from_rejection(status: u16, body: &str) -> Self {
        let body = if body.is_empty() {
            None
        } else {
            Some(serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string())))
        };

        match body {
            Some(Value::Null) | None => {
                RequestError::Transport(format!("Request failed with status code {}", status))
            }
            Some(Value::String(text)) if text.is_empty() => {
                RequestError::Transport(format!("Request failed with status code {}", status))
            }
            Some(body) => RequestError::Rejected { status, body },
        }
    }
}

/// Client bound to one backend's `/search` URL
#[derive(Debug, Clone)]
pub struct SearchClient {
    client: Client,
    search_url: Url,
}

impl SearchClient {
    /// Create a client for the backend rooted at `endpoint`.
    ///
    /// A path prefix in the endpoint is kept, so `http://host/api` resolves
    /// to `http://host/api/search`.
    pub fn new(endpoint: &str) -> Result<Self, SiteSearchError> {
        let invalid = |reason: String| SiteSearchError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason,
        };

        let mut base = endpoint.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }

        let base = Url::parse(&base).map_err(|e| invalid(e.to_string()))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", base.scheme())));
        }
        let search_url = base.join("search").map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            client: Client::new(),
            search_url,
        })
    }

    pub fn search_url(&self) -> &Url {
        &self.search_url
    }

    /// Run one search against the backend
    pub async fn search(&self, params: &SearchParams) -> Result<SearchResponse, RequestError> {
        log::debug!(
            "GET {} url={:?} query={:?}",
            self.search_url,
            params.url,
            params.query
        );

        let response = self
            .client
            .get(self.search_url.clone())
            .query(&[("url", params.url.as_str()), ("query", params.query.as_str())])
            .send()
            .await
            .map_err(|e| RequestError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RequestError::Transport(e.to_string()))?;

        if !status.is_success() {
            log::debug!("Search rejected with status {}", status);
            return Err(RequestError::from_rejection(status.as_u16(), &body));
        }

        Ok(SearchResponse::from_body(&body))
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
