//! Error types for the quote module

use std::io;
use thiserror::Error;

/// Result type for quote operations
pub type QuoteResult<T> = Result<T, QuoteError>;

/// Errors that can occur while fetching or storing quotes
#[derive(Error, Debug)]
pub enum QuoteError {
    /// The quote service answered with a failure status
    #[error("API error: {0}")]
    ApiError(String),

    /// Transport failure talking to the quote service
    #[error("Request error: {0}")]
    RequestError(String),

    /// Response body was not a quote
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// IO error while storing a quote
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

impl From<reqwest::Error> for QuoteError {
    fn from(error: reqwest::Error) -> Self {
        QuoteError::RequestError(error.to_string())
    }
}
