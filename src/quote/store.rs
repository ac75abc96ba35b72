//! On-disk quote layout: `<root>/<tag>/<tag>/.../<filename>`

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::error::QuoteResult;
use super::Quote;

/// Writes quotes under a root directory, one directory level per tag
#[derive(Debug, Clone)]
pub struct QuoteStore {
    root: PathBuf,
}

impl QuoteStore {
    /// Create a store rooted at `root`; nothing is created until a quote is stored
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory of the store
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Remove the root directory and everything below it
    pub fn clear(&self) -> QuoteResult<()> {
        match fs::remove_dir_all(&self.root) {
            Ok(()) => {
                debug!(root = %self.root.display(), "cleared quote store");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Path a quote would be stored at
    pub fn path_for(&self, quote: &Quote, filename: &str) -> PathBuf {
        let mut path = self.root.clone();
        for tag in &quote.tags {
            match tag_component(tag) {
                Some(component) => path.push(component),
                None => warn!("Skipping unusable tag {:?}", tag),
            }
        }
        path.push(filename);
        path
    }

    /// Write the quote text as UTF-8, creating the tag directories
    pub fn store(&self, quote: &Quote, filename: &str) -> QuoteResult<PathBuf> {
        let path = self.path_for(quote, filename);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, quote.text.as_bytes())?;
        Ok(path)
    }
}

/// Turn a tag into a single path component that stays below the root
fn tag_component(tag: &str) -> Option<String> {
    let cleaned: String = tag
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    match cleaned.as_str() {
        "" | "." | ".." => None,
        _ => Some(cleaned),
    }
}
