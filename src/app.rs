/*!
 * The quotefs run: clear, fetch and store, list, rewrite
 */

use std::time::Instant;

use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::explorer::TreeExplorer;
use crate::quote::{fetch_and_store, QuoteSource, QuoteStore, StoreProgress};
use crate::report::RunReport;
use crate::visitor::{FileRewriter, PathPrinter, RewriteStatistics};

/// Runs every step against the configured workspace
pub struct Application {
    config: Config,
    explorer: TreeExplorer,
}

impl Application {
    /// Create an application for a validated configuration
    pub fn new(config: Config) -> Self {
        Self {
            config,
            explorer: TreeExplorer::new(),
        }
    }

    /// Configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run all steps, pulling quotes from `source`
    pub fn run<S, P>(&self, source: &S, progress: Option<&P>) -> Result<RunReport>
    where
        S: QuoteSource + ?Sized,
        P: StoreProgress,
    {
        let start_time = Instant::now();
        let store = QuoteStore::new(&self.config.workspace_dir);

        store.clear()?;
        let stored_files = fetch_and_store(
            source,
            &store,
            self.config.count,
            &self.config.extension,
            progress,
        )?;

        let (listing, nodes_listed) = self.list_files()?;
        info!("{}", listing.trim_end());

        let rewrite = if self.config.rewrite {
            Some(self.process_quote_files()?)
        } else {
            debug!("Skipping rewrite of quote files");
            None
        };

        Ok(RunReport {
            workspace: self.config.workspace_dir.clone(),
            duration: start_time.elapsed(),
            stored_files,
            nodes_listed,
            rewrite,
        })
    }

    /// Every path in the workspace in exploration order, one per line,
    /// along with the number of nodes
    pub fn list_files(&self) -> Result<(String, usize)> {
        let mut printer = PathPrinter::new(Vec::new());
        self.explorer.explore(&self.config.workspace_dir, &mut printer)?;
        let visited = printer.visited();
        let listing = String::from_utf8_lossy(&printer.into_inner()).into_owned();
        Ok((listing, visited))
    }

    /// Rewrite every file in the workspace, uppercased with numbered lines
    pub fn process_quote_files(&self) -> Result<RewriteStatistics> {
        let mut rewriter = FileRewriter::default();
        self.explorer.explore(&self.config.workspace_dir, &mut rewriter)?;
        info!("Rewrote {} quote files", rewriter.statistics().files_rewritten);
        Ok(rewriter.statistics().clone())
    }
}
