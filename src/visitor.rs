/*!
 * Visitors invoked by the tree explorer
 */

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{QuoteFsError, Result};
use crate::transform::{lines, Stage, TransformPipeline, DEFAULT_STAGES};
use crate::types::FsNode;

/// Behaviour applied to every node the explorer reaches
pub trait NodeVisitor {
    /// Visit one node. An error stops the exploration.
    fn visit(&mut self, node: &FsNode) -> Result<()>;
}

impl<V: NodeVisitor + ?Sized> NodeVisitor for &mut V {
    fn visit(&mut self, node: &FsNode) -> Result<()> {
        (**self).visit(node)
    }
}

/// Writes the path of every visited node on its own line
pub struct PathPrinter<W: Write> {
    writer: W,
    visited: usize,
}

impl<W: Write> PathPrinter<W> {
    /// Print into `writer`
    pub fn new(writer: W) -> Self {
        Self { writer, visited: 0 }
    }

    /// Number of nodes printed so far
    pub fn visited(&self) -> usize {
        self.visited
    }

    /// Unwrap the printer, returning the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> NodeVisitor for PathPrinter<W> {
    fn visit(&mut self, node: &FsNode) -> Result<()> {
        writeln!(self.writer, "{}", node.path.display())?;
        self.visited += 1;
        Ok(())
    }
}

/// Totals collected by a [`FileRewriter`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteStatistics {
    /// Nodes seen, files or not
    pub nodes_visited: usize,
    /// Files rewritten
    pub files_rewritten: usize,
    /// Lines found in the original content
    pub lines_processed: usize,
    /// Bytes read from the originals
    pub bytes_read: u64,
    /// Bytes written in place of them
    pub bytes_written: u64,
}

/// Rewrites every regular file through a fresh transform pipeline
///
/// Directories and other nodes are left untouched. Running the rewriter twice
/// over the same tree transforms the content twice.
pub struct FileRewriter {
    stages: Vec<Stage>,
    statistics: RewriteStatistics,
}

impl FileRewriter {
    /// Rewriter applying `stages` in order
    pub fn new(stages: &[Stage]) -> Self {
        Self {
            stages: stages.to_vec(),
            statistics: RewriteStatistics::default(),
        }
    }

    /// Get rewrite statistics
    pub fn statistics(&self) -> &RewriteStatistics {
        &self.statistics
    }
}

impl Default for FileRewriter {
    fn default() -> Self {
        Self::new(&DEFAULT_STAGES)
    }
}

impl NodeVisitor for FileRewriter {
    fn visit(&mut self, node: &FsNode) -> Result<()> {
        self.statistics.nodes_visited += 1;
        if !node.is_file() {
            return Ok(());
        }

        let rewrite_error = |source: io::Error| QuoteFsError::Rewrite {
            path: node.path.clone(),
            source,
        };
        let content = fs::read_to_string(&node.path).map_err(rewrite_error)?;
        let written = rewrite_file(&node.path, &content, &self.stages).map_err(rewrite_error)?;

        debug!(path = %node.path.display(), bytes = written, "rewrote file");

        self.statistics.files_rewritten += 1;
        self.statistics.lines_processed += lines(&content).count();
        self.statistics.bytes_read += content.len() as u64;
        self.statistics.bytes_written += written;
        Ok(())
    }
}

/// Replace the file at `path` with `content` run through `stages`.
///
/// Output goes to a temporary file next to the file `path` resolves to, which
/// is then renamed over it, so the original survives any failure and symlinks
/// stay in place. Returns the new size.
pub fn rewrite_file(path: &Path, content: &str, stages: &[Stage]) -> io::Result<u64> {
    let target = fs::canonicalize(path)?;
    let dir = target.parent().unwrap_or_else(|| Path::new("."));
    let permissions = fs::metadata(&target)?.permissions();

    let mut writer = BufWriter::new(NamedTempFile::new_in(dir)?);
    let mut pipeline = TransformPipeline::new(stages, &mut writer);
    pipeline.write(content)?;
    pipeline.close()?;

    let temp = writer.into_inner().map_err(|e| e.into_error())?;
    let written = temp.as_file().metadata()?.len();
    temp.as_file().set_permissions(permissions)?;
    temp.persist(&target).map_err(|e| e.error)?;

    Ok(written)
}
