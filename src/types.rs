/*!
 * Core types shared by the explorer and its visitors
 */

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Kind of a filesystem entry, with links resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Regular file
    File,
    /// Directory that may hold other entries
    Directory,
    /// Anything else (sockets, fifos, devices)
    Other,
}

impl From<fs::FileType> for NodeKind {
    fn from(file_type: fs::FileType) -> Self {
        if file_type.is_file() {
            NodeKind::File
        } else if file_type.is_dir() {
            NodeKind::Directory
        } else {
            NodeKind::Other
        }
    }
}

/// A filesystem entry as seen during exploration
///
/// Nodes only carry a path and a kind. Directory contents are listed again
/// every time a directory is explored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsNode {
    /// Path as reached from the exploration root
    pub path: PathBuf,
    /// Entry kind
    pub kind: NodeKind,
}

impl FsNode {
    /// Create a node from its parts
    pub fn new(path: impl Into<PathBuf>, kind: NodeKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// Stat `path` (following links); `None` when it cannot be read
    pub fn from_path(path: &Path) -> Option<Self> {
        fs::metadata(path)
            .ok()
            .map(|metadata| Self::new(path, NodeKind::from(metadata.file_type())))
    }

    /// Last path component, or the whole path for roots such as `.`
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Whether this is a regular file
    pub fn is_file(&self) -> bool {
        self.kind == NodeKind::File
    }

    /// Whether this is a directory
    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Directory
    }
}

impl fmt::Display for FsNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
