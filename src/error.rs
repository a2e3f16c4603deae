use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteSearchError {
    #[error("Invalid backend endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("Please enter both Website URL and Search Query.")]
    MissingInput,
}
