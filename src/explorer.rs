/*!
 * Depth-first directory exploration
 *
 * A directory is visited before its contents; inside it, every file is
 * visited (sorted by name) before the explorer descends into the remaining
 * entries, again sorted by name:
 *
 * ```text
 * root, root/a.txt, root/b.txt, root/dir1, root/dir1/c.txt, root/dir2, ...
 * ```
 */

use std::path::Path;

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::Result;
use crate::types::{FsNode, NodeKind};
use crate::visitor::NodeVisitor;

/// Depth-first explorer, files before directories at every level
#[derive(Debug, Clone, Default)]
pub struct TreeExplorer;

impl TreeExplorer {
    /// Create a new explorer
    pub fn new() -> Self {
        Self
    }

    /// Visit `root` and everything below it.
    ///
    /// A missing root is not an error and produces no visits. Directories
    /// that cannot be listed are treated as empty. The first error returned
    /// by `visitor` stops the exploration and is returned.
    pub fn explore(&self, root: &Path, visitor: &mut dyn NodeVisitor) -> Result<()> {
        match FsNode::from_path(root) {
            Some(node) => self.explore_node(&node, visitor),
            None => {
                debug!(root = %root.display(), "nothing to explore");
                Ok(())
            }
        }
    }

    /// Like [`explore`](Self::explore), doing nothing without a root
    pub fn explore_option(&self, root: Option<&Path>, visitor: &mut dyn NodeVisitor) -> Result<()> {
        match root {
            Some(root) => self.explore(root, visitor),
            None => Ok(()),
        }
    }

    fn explore_node(&self, node: &FsNode, visitor: &mut dyn NodeVisitor) -> Result<()> {
        visitor.visit(node)?;

        if !node.is_dir() {
            return Ok(());
        }

        // Both halves keep the name order of the listing
        let (files, others): (Vec<FsNode>, Vec<FsNode>) = self
            .list_children(&node.path)
            .into_iter()
            .partition(FsNode::is_file);

        for file in &files {
            visitor.visit(file)?;
        }
        for child in &others {
            self.explore_node(child, visitor)?;
        }

        Ok(())
    }

    /// Immediate children of `dir`, sorted by file name
    fn list_children(&self, dir: &Path) -> Vec<FsNode> {
        WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(FsNode::new(entry.path(), NodeKind::from(entry.file_type()))),
                Err(e) => {
                    warn!(dir = %dir.display(), error = %e, "skipping unreadable entry");
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::fs::{self, File};
    use std::io;
    use std::path::PathBuf;

    use tempfile::tempdir;

    use super::*;
    use crate::error::QuoteFsError;

    /// Records visited paths relative to a base directory
    struct Recorder {
        base: PathBuf,
        visited: Vec<String>,
    }

    impl Recorder {
        fn new(base: &Path) -> Self {
            Self {
                base: base.to_path_buf(),
                visited: Vec::new(),
            }
        }
    }

    impl NodeVisitor for Recorder {
        fn visit(&mut self, node: &FsNode) -> Result<()> {
            let relative = node.path.strip_prefix(&self.base).unwrap_or(&node.path);
            self.visited.push(relative.to_string_lossy().replace('\\', "/"));
            Ok(())
        }
    }

    /// Fails once it reaches a node with the given name
    struct FailAt {
        name: &'static str,
        visited: usize,
    }

    impl NodeVisitor for FailAt {
        fn visit(&mut self, node: &FsNode) -> Result<()> {
            if node.name() == self.name {
                return Err(QuoteFsError::InvalidArgument(format!("refusing {}", self.name)));
            }
            self.visited += 1;
            Ok(())
        }
    }

    // root/{f2.txt, f1.txt, dirB/{f3.txt}, dirA/{}}
    fn setup_sample_tree() -> io::Result<tempfile::TempDir> {
        let temp_dir = tempdir()?;
        let root = temp_dir.path().join("root");
        fs::create_dir(&root)?;
        File::create(root.join("f2.txt"))?;
        File::create(root.join("f1.txt"))?;
        fs::create_dir(root.join("dirB"))?;
        File::create(root.join("dirB").join("f3.txt"))?;
        fs::create_dir(root.join("dirA"))?;
        Ok(temp_dir)
    }

    #[test]
    fn test_files_before_directories_order() -> Result<()> {
        let temp_dir = setup_sample_tree()?;
        let mut recorder = Recorder::new(temp_dir.path());

        TreeExplorer::new().explore(&temp_dir.path().join("root"), &mut recorder)?;

        assert_eq!(
            recorder.visited,
            vec![
                "root",
                "root/f1.txt",
                "root/f2.txt",
                "root/dirA",
                "root/dirB",
                "root/dirB/f3.txt",
            ]
        );
        Ok(())
    }

    #[test]
    fn test_nested_interleaving() -> Result<()> {
        let temp_dir = tempdir()?;
        let root = temp_dir.path();
        fs::create_dir_all(root.join("b").join("d"))?;
        fs::create_dir_all(root.join("a"))?;
        File::create(root.join("z.txt"))?;
        File::create(root.join("b").join("y.txt"))?;
        File::create(root.join("b").join("d").join("x.txt"))?;
        File::create(root.join("a").join("w.txt"))?;

        let mut recorder = Recorder::new(root);
        TreeExplorer::new().explore(root, &mut recorder)?;

        assert_eq!(
            recorder.visited,
            vec!["", "z.txt", "a", "a/w.txt", "b", "b/y.txt", "b/d", "b/d/x.txt"]
        );
        Ok(())
    }

    #[test]
    fn test_byte_order_sorting() -> Result<()> {
        let temp_dir = tempdir()?;
        for name in ["b.txt", "B.txt", "a.txt", "_.txt", "10.txt", "9.txt"] {
            File::create(temp_dir.path().join(name))?;
        }

        let mut recorder = Recorder::new(temp_dir.path());
        TreeExplorer::new().explore(temp_dir.path(), &mut recorder)?;

        assert_eq!(
            recorder.visited,
            vec!["", "10.txt", "9.txt", "B.txt", "_.txt", "a.txt", "b.txt"]
        );
        Ok(())
    }

    #[test]
    fn test_missing_root_is_a_no_op() -> Result<()> {
        let temp_dir = tempdir()?;
        let mut recorder = Recorder::new(temp_dir.path());
        let explorer = TreeExplorer::new();

        explorer.explore(&temp_dir.path().join("missing"), &mut recorder)?;
        explorer.explore_option(None, &mut recorder)?;

        assert!(recorder.visited.is_empty());
        Ok(())
    }

    #[test]
    fn test_file_root_is_visited_once() -> Result<()> {
        let temp_dir = tempdir()?;
        let file_path = temp_dir.path().join("single.txt");
        File::create(&file_path)?;

        let mut recorder = Recorder::new(temp_dir.path());
        TreeExplorer::new().explore_option(Some(&file_path), &mut recorder)?;
        assert_eq!(recorder.visited, vec!["single.txt"]);
        Ok(())
    }

    #[test]
    fn test_visitor_failure_stops_exploration() -> Result<()> {
        let temp_dir = setup_sample_tree()?;
        let mut visitor = FailAt {
            name: "dirA",
            visited: 0,
        };

        let result = TreeExplorer::new().explore(&temp_dir.path().join("root"), &mut visitor);

        assert!(matches!(result, Err(QuoteFsError::InvalidArgument(_))));
        // root, f1.txt, f2.txt
        assert_eq!(visitor.visited, 3);
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_directory_is_treated_as_empty() -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = tempdir()?;
        let locked = temp_dir.path().join("locked");
        fs::create_dir(&locked)?;
        File::create(locked.join("hidden.txt"))?;
        File::create(temp_dir.path().join("open.txt"))?;
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))?;

        // Permission bits do not restrict root
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;
            return Ok(());
        }

        let mut recorder = Recorder::new(temp_dir.path());
        let result = TreeExplorer::new().explore(temp_dir.path(), &mut recorder);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;
        result?;

        assert_eq!(recorder.visited, vec!["", "open.txt", "locked"]);
        Ok(())
    }
}
