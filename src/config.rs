/*!
 * Configuration handling for quotefs
 */

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;
use url::Url;

use crate::error::Result;
use crate::quote::DEFAULT_ENDPOINT;

/// Directory quotes are stored in unless `--workspace` says otherwise
pub const DEFAULT_WORKSPACE: &str = "./workspace/quotes";

/// Command-line arguments for quotefs
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "quotefs",
    version = env!("CARGO_PKG_VERSION"),
    about = "Fetch quotes into a tag tree, list it and number every line of every quote",
    long_about = "Fetches quotes from a JSON endpoint, stores each one under a directory per tag, prints the resulting tree depth-first (files before directories) and rewrites every quote file uppercased with numbered lines."
)]
pub struct Args {
    /// Number of quotes to fetch
    #[clap(required_unless_present = "generate")]
    pub count: Option<usize>,

    /// Directory the quotes are stored in (cleared on every run)
    #[clap(long, default_value = DEFAULT_WORKSPACE)]
    pub workspace: String,

    /// Quote service URL returning one JSON quote per request
    #[clap(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Extension of the stored quote files
    #[clap(long, default_value = "utf8")]
    pub extension: String,

    /// Fetch, store and list quotes without rewriting them
    #[clap(long)]
    pub skip_rewrite: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[clap(short, long)]
    pub verbose: bool,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Number of quotes to fetch
    pub count: usize,

    /// Root of the quote tree
    pub workspace_dir: PathBuf,

    /// Raw quote service URL
    pub endpoint: String,

    /// Extension of the stored quote files
    pub extension: String,

    /// Whether stored quotes get rewritten
    pub rewrite: bool,

    /// Debug logging requested
    pub verbose: bool,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        Self {
            count: args.count.unwrap_or_default(),
            workspace_dir: PathBuf::from(args.workspace),
            endpoint: args.endpoint,
            extension: args.extension,
            rewrite: !args.skip_rewrite,
            verbose: args.verbose,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        crate::ensure!(
            self.count > 0,
            InvalidArgument,
            "the number of quotes to fetch must be at least 1"
        );

        crate::ensure!(
            !self.extension.is_empty()
                && !self.extension.contains(|c: char| c == '/' || c == '\\' || c == '.'),
            InvalidArgument,
            "invalid file extension: {:?}",
            self.extension
        );

        if self.workspace_dir.as_os_str().is_empty() {
            crate::bail!(Config, "workspace directory must not be empty");
        }

        // Refuse to wipe an existing file
        if self.workspace_dir.exists() && !self.workspace_dir.is_dir() {
            crate::bail!(
                Config,
                "workspace is not a directory: {}",
                self.workspace_dir.display()
            );
        }

        self.endpoint_url()?;

        Ok(())
    }

    /// Parsed quote service URL
    pub fn endpoint_url(&self) -> Result<Url> {
        let url = Url::parse(&self.endpoint)
            .map_err(|e| crate::error!(Config, "invalid endpoint {}: {}", self.endpoint, e))?;
        crate::ensure!(
            matches!(url.scheme(), "http" | "https"),
            Config,
            "endpoint must use http or https: {}",
            self.endpoint
        );
        Ok(url)
    }
}
