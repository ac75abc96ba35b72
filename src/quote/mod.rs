//! Quote fetching and storage
//!
//! A [`QuoteSource`] supplies `(text, tags)` records one at a time; a
//! [`QuoteStore`] lays them out on disk below one directory per tag.

mod client;
mod error;
mod store;

// Re-exports for public API
pub use client::{HttpQuoteClient, DEFAULT_ENDPOINT};
pub use error::{QuoteError, QuoteResult};
pub use store::QuoteStore;

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

/// A quote and the tags classifying it
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Quote {
    /// Quote text
    #[serde(alias = "quote", alias = "content")]
    pub text: String,
    /// Ordered tags, outermost directory first
    #[serde(default, alias = "categories")]
    pub tags: Vec<String>,
}

impl Quote {
    /// Parse a quote from a JSON payload
    pub fn from_json(body: &str) -> QuoteResult<Self> {
        Ok(serde_json::from_str(body)?)
    }
}

/// Trait defining the interface for quote suppliers
pub trait QuoteSource {
    /// Fetch exactly one quote; failures are not retried
    fn fetch_one(&self) -> QuoteResult<Quote>;
}

/// Trait for reporting progress while quotes are stored
pub trait StoreProgress {
    /// Called after quote number `index` (1-based) was written to `path`
    fn stored(&self, index: usize, path: &Path);
}

// Implement StoreProgress for closures
impl<F> StoreProgress for F
where
    F: Fn(usize, &Path),
{
    fn stored(&self, index: usize, path: &Path) {
        self(index, path)
    }
}

/// File name used for the `index`-th quote
pub fn quote_file_name(index: usize, extension: &str) -> String {
    format!("quote-{}.{}", index, extension)
}

/// Fetch `count` quotes from `source` and store quote `i` as
/// `quote-<i>.<extension>` under its tag chain
pub fn fetch_and_store<S, P>(
    source: &S,
    store: &QuoteStore,
    count: usize,
    extension: &str,
    progress: Option<&P>,
) -> QuoteResult<Vec<PathBuf>>
where
    S: QuoteSource + ?Sized,
    P: StoreProgress,
{
    let mut stored = Vec::with_capacity(count);

    for index in 1..=count {
        let quote = source.fetch_one()?;
        let path = store.store(&quote, &quote_file_name(index, extension))?;

        info!("Received a new quote with {} tags.", quote.tags.len());
        for tag in &quote.tags {
            debug!("> {}", tag);
        }

        if let Some(progress) = progress {
            progress.stored(index, &path);
        }
        stored.push(path);
    }

    Ok(stored)
}
