//! Global error handling for quotefs
//!
//! This module provides a centralized error type that can represent errors
//! from all modules in the project.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::quote::QuoteError;

/// Global error type for quotefs operations
#[derive(Error, Debug)]
pub enum QuoteFsError {
    /// Quote fetching or storage errors
    #[error("Quote error: {0}")]
    Quote(#[from] QuoteError),

    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A file could not be rewritten; the original is left in place
    #[error("Failed to rewrite {}: {source}", .path.display())]
    Rewrite {
        /// File being rewritten
        path: PathBuf,
        /// Underlying failure
        source: io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Specialized Result type for quotefs operations
pub type Result<T> = std::result::Result<T, QuoteFsError>;

/// Creates a QuoteFsError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::QuoteFsError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}

// Allow converting QuoteFsError to io::Error for callers working in io::Result
impl From<QuoteFsError> for io::Error {
    fn from(err: QuoteFsError) -> Self {
        match err {
            QuoteFsError::Io(e) => e,
            other => io::Error::new(io::ErrorKind::Other, other.to_string()),
        }
    }
}
