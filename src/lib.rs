/*!
 * quotefs - Fetch quotes into a tag tree and rewrite them line by line
 *
 * The library walks a directory tree depth-first (files before
 * subdirectories, names in byte order) and rewrites text through stacked
 * stream filters that uppercase content and number lines terminated by
 * `\n`, `\r` or `\r\n`.
 */

pub mod app;
pub mod config;
pub mod error;
pub mod explorer;
pub mod quote;
pub mod report;
pub mod transform;
pub mod types;
pub mod utils;
pub mod visitor;


// Re-export main components for easier access
pub use app::Application;
pub use config::Config;
pub use error::{QuoteFsError, Result};
pub use explorer::TreeExplorer;
pub use quote::{HttpQuoteClient, Quote, QuoteSource, QuoteStore};
pub use report::{ReportFormat, Reporter, RunReport};
pub use transform::{next_line, LineRecord, Stage, TransformPipeline, DEFAULT_STAGES};
pub use types::{FsNode, NodeKind};
pub use visitor::{FileRewriter, NodeVisitor, PathPrinter, RewriteStatistics};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
