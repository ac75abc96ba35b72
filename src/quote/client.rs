//! HTTP quote supplier

use reqwest::blocking::Client;
use tracing::debug;
use url::Url;

use super::error::{QuoteError, QuoteResult};
use super::{Quote, QuoteSource};

/// Quote service queried when no endpoint is configured
pub const DEFAULT_ENDPOINT: &str = "https://api.quotable.io/random";

/// Fetches one random quote per request from a JSON endpoint
pub struct HttpQuoteClient {
    endpoint: Url,
    client: Client,
}

impl HttpQuoteClient {
    /// Create a client for `endpoint`
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            client: Client::new(),
        }
    }

    /// Endpoint this client queries
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl QuoteSource for HttpQuoteClient {
    fn fetch_one(&self) -> QuoteResult<Quote> {
        debug!(endpoint = %self.endpoint, "requesting quote");

        let response = self
            .client
            .get(self.endpoint.clone())
            .header("accept", "application/json")
            .send()?;

        // Check response status
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .unwrap_or_else(|_| "Unable to read error message".to_string());

            return Err(QuoteError::ApiError(format!(
                "Quote service returned error status {}: {}",
                status, error_text
            )));
        }

        let body = response.text()?;
        Quote::from_json(&body)
    }
}
