//! View state and its transitions
//!
//! `ViewState` is treated as an immutable record: [`ViewState::reduce`]
//! consumes the previous state together with one event and returns the next
//! state. Nothing here touches the terminal or the network.

use crate::backend::{RequestError, SearchParams, SearchResponse, SearchResult};
use crate::error::SiteSearchError;

/// Everything that can change the view
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    UrlChanged(String),
    QueryChanged(String),
    /// Search was triggered with an empty field
    ValidationFailed,
    /// Search passed validation and the request is on its way
    SearchStarted,
    SearchSucceeded(SearchResponse),
    SearchFailed(RequestError),
    /// Expand or collapse the raw HTML panel of the result at this index
    HtmlToggled(usize),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub url: String,
    pub query: String,
    pub results: Vec<SearchResult>,
    pub loading: bool,
    pub error: Option<String>,
    /// One flag per entry in `results`
    pub expanded: Vec<bool>,
}

impl ViewState {
    pub fn with_inputs(url: &str, query: &str) -> Self {
        Self {
            url: url.to_string(),
            query: query.to_string(),
            ..Self::default()
        }
    }

    /// Parameters for a search from the current inputs, or `None` if a field is empty
    pub fn search_params(&self) -> Option<SearchParams> {
        SearchParams::from_inputs(&self.url, &self.query)
    }

    /// Whether the search trigger accepts input
    pub fn can_search(&self) -> bool {
        !self.loading
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.get(index).copied().unwrap_or(false)
    }

    pub fn reduce(self, event: ViewEvent) -> Self {
        match event {
            ViewEvent::UrlChanged(url) => Self {
                url,
                ..self.without_results()
            },

            ViewEvent::QueryChanged(query) => Self {
                query,
                ..self.without_results()
            },

            ViewEvent::ValidationFailed => Self {
                error: Some(SiteSearchError::MissingInput.to_string()),
                ..self
            },

            ViewEvent::SearchStarted => Self {
                loading: true,
                error: None,
                ..self.without_results()
            },

            ViewEvent::SearchSucceeded(response) => match response.error_message() {
                Some(message) => Self {
                    loading: false,
                    error: Some(message.to_string()),
                    ..self.without_results()
                },
                None => {
                    let results = response.into_results();
                    Self {
                        loading: false,
                        error: None,
                        expanded: vec![false; results.len()],
                        results,
                        ..self
                    }
                }
            },

            ViewEvent::SearchFailed(err) => Self {
                loading: false,
                error: Some(err.to_string()),
                ..self
            },

            ViewEvent::HtmlToggled(index) => {
                let mut next = self;
                if let Some(flag) = next.expanded.get_mut(index) {
                    *flag = !*flag;
                }
                next
            }
        }
    }

    fn without_results(self) -> Self {
        Self {
            results: Vec::new(),
            expanded: Vec::new(),
            ..self
        }
    }
}

#[cfg(test)]
#[path = "view_state_tests.rs"]
mod view_state_tests;
