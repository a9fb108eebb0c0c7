//! TreeWalker - recursive descent that streams visible entries to an output

use std::io;
use std::path::Path;

use tracing::{debug, trace};

use crate::error::Result;

use super::config::WalkerConfig;
use super::entry::{DirEntry, read_sorted};
use super::filter::EntryFilter;
use super::traversal::child_prefix;

/// A visible entry, handed to the output in traversal order.
#[derive(Debug, Clone, Copy)]
pub struct Node<'a> {
    pub name: &'a str,
    /// Path the entry was reached by: the root argument joined with each name below it.
    pub path: &'a Path,
    pub is_dir: bool,
    /// Last visible entry among its siblings
    pub is_last: bool,
    /// Accumulated prefix from the ancestors, without this entry's connector
    pub prefix: &'a str,
}

/// Callback for streaming output - receives one call per visible entry.
pub trait TreeOutput {
    fn output_node(&mut self, node: &Node<'_>) -> io::Result<()>;

    /// Called once after the traversal completes, and also after it fails.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Counts of entries emitted by a walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    pub directories: usize,
    pub files: usize,
}

impl WalkSummary {
    pub fn total(&self) -> usize {
        self.directories + self.files
    }
}

/// Streaming tree walker: lists each directory in sorted order, filters,
/// emits surviving entries and descends into directories up to `max_depth`.
/// Memory use is O(depth) plus one directory listing per level.
#[derive(Debug)]
pub struct TreeWalker {
    config: WalkerConfig,
    filter: EntryFilter,
}

impl TreeWalker {
    /// Create a walker, compiling the include/exclude patterns up front.
    pub fn new(config: WalkerConfig) -> Result<Self> {
        let filter = EntryFilter::new(&config)?;
        debug!(?config, "walker configured");
        Ok(Self { config, filter })
    }

    /// Walk `root` and stream every visible entry to `output`.
    ///
    /// The first read or write failure aborts the walk. `output.finish()` runs
    /// either way so buffered lines already produced are not lost.
    pub fn walk<O: TreeOutput>(&self, root: &Path, output: &mut O) -> Result<WalkSummary> {
        let mut summary = WalkSummary::default();
        let walked = self.walk_dir(root, "", 0, output, &mut summary);
        let finished = output.finish();
        walked?;
        finished?;
        debug!(
            directories = summary.directories,
            files = summary.files,
            "walk complete"
        );
        Ok(summary)
    }

    fn walk_dir<O: TreeOutput>(
        &self,
        path: &Path,
        prefix: &str,
        depth: usize,
        output: &mut O,
        summary: &mut WalkSummary,
    ) -> Result<()> {
        let entries = read_sorted(path)?;
        debug!(path = %path.display(), depth, entries = entries.len(), "read directory");

        let visible: Vec<DirEntry> = entries
            .into_iter()
            .filter(|entry| match self.filter.check(entry) {
                Ok(()) => true,
                Err(reason) => {
                    trace!(name = %entry.name, ?reason, "skipping entry");
                    false
                }
            })
            .collect();

        let count = visible.len();
        for (i, entry) in visible.iter().enumerate() {
            let is_last = i + 1 == count;
            let entry_path = entry.path_in(path);

            output.output_node(&Node {
                name: &entry.name,
                path: &entry_path,
                is_dir: entry.is_dir(),
                is_last,
                prefix,
            })?;

            if entry.is_dir() {
                summary.directories += 1;
                if self.config.descends_at(depth) {
                    let next = child_prefix(prefix, is_last);
                    self.walk_dir(&entry_path, &next, depth + 1, output, summary)?;
                }
            } else {
                summary.files += 1;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTree;
    use std::path::PathBuf;

    /// Records every node for inspection.
    #[derive(Default)]
    struct Recorder {
        nodes: Vec<(String, PathBuf, bool, bool, String)>,
        finished: bool,
    }

    impl TreeOutput for Recorder {
        fn output_node(&mut self, node: &Node<'_>) -> io::Result<()> {
            self.nodes.push((
                node.name.to_string(),
                node.path.to_path_buf(),
                node.is_dir,
                node.is_last,
                node.prefix.to_string(),
            ));
            Ok(())
        }

        fn finish(&mut self) -> io::Result<()> {
            self.finished = true;
            Ok(())
        }
    }

    fn walk(tree: &TestTree, config: WalkerConfig) -> Recorder {
        let mut rec = Recorder::default();
        TreeWalker::new(config)
            .unwrap()
            .walk(tree.path(), &mut rec)
            .unwrap();
        rec
    }

    fn names(rec: &Recorder) -> Vec<&str> {
        rec.nodes.iter().map(|n| n.0.as_str()).collect()
    }

    #[test]
    fn test_preorder_sorted_traversal() {
        let tree = TestTree::new();
        tree.add_file("b.txt", "");
        tree.add_file("a/z.txt", "");
        tree.add_file("a/y.txt", "");
        tree.add_file("c.txt", "");

        let rec = walk(&tree, WalkerConfig::default());
        assert_eq!(names(&rec), vec!["a", "y.txt", "z.txt", "b.txt", "c.txt"]);
        assert!(rec.finished);
    }

    #[test]
    fn test_prefix_tracking() {
        let tree = TestTree::new();
        tree.add_file("sub/file.txt", "");
        tree.add_file("zz.txt", "");

        let rec = walk(&tree, WalkerConfig::default());
        let sub = &rec.nodes[0];
        let file = &rec.nodes[1];
        assert_eq!((sub.0.as_str(), sub.4.as_str()), ("sub", ""));
        assert_eq!((file.0.as_str(), file.4.as_str()), ("file.txt", "│   "));
        assert!(file.3, "only child is last");
        assert!(!sub.3, "sub has a following sibling");
    }

    #[test]
    fn test_lastness_uses_visible_siblings() {
        let tree = TestTree::new();
        tree.add_file("a.txt", "");
        tree.add_file("b.txt", "");
        tree.add_file(".zzz", "");

        let rec = walk(&tree, WalkerConfig::default());
        assert_eq!(names(&rec), vec!["a.txt", "b.txt"]);
        assert!(!rec.nodes[0].3);
        assert!(rec.nodes[1].3, "b.txt is the last visible entry");
    }

    #[test]
    fn test_max_depth_zero_does_not_recurse() {
        let tree = TestTree::new();
        tree.add_file("top.txt", "");
        tree.add_file("dir/inner.txt", "");

        let rec = walk(
            &tree,
            WalkerConfig {
                max_depth: Some(0),
                ..Default::default()
            },
        );
        assert_eq!(names(&rec), vec!["dir", "top.txt"]);
    }

    #[test]
    fn test_max_depth_one_lists_one_level_down() {
        let tree = TestTree::new();
        tree.add_file("l1/mid.txt", "");
        tree.add_file("l1/l2/deep.txt", "");

        let rec = walk(
            &tree,
            WalkerConfig {
                max_depth: Some(1),
                ..Default::default()
            },
        );
        assert_eq!(names(&rec), vec!["l1", "l2", "mid.txt"]);
    }

    #[test]
    fn test_filtered_directory_is_not_descended() {
        let tree = TestTree::new();
        tree.add_file(".git/config", "");
        tree.add_file("build/out.o", "");
        tree.add_file("src/main.rs", "");

        let rec = walk(
            &tree,
            WalkerConfig {
                exclude_pattern: Some("^build$".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(names(&rec), vec!["src", "main.rs"]);
    }

    #[test]
    fn test_paths_are_joined_from_root() {
        let tree = TestTree::new();
        tree.add_file("sub/file.txt", "");

        let rec = walk(&tree, WalkerConfig::default());
        assert_eq!(rec.nodes[1].1, tree.path().join("sub").join("file.txt"));
    }

    #[test]
    fn test_summary_counts() {
        let tree = TestTree::new();
        tree.add_file("a/b/c.txt", "");
        tree.add_file("d.txt", "");

        let mut rec = Recorder::default();
        let summary = TreeWalker::new(WalkerConfig::default())
            .unwrap()
            .walk(tree.path(), &mut rec)
            .unwrap();
        assert_eq!(summary, WalkSummary { directories: 2, files: 2 });
        assert_eq!(summary.total(), rec.nodes.len());
    }

    #[test]
    fn test_missing_root_errors_and_still_finishes() {
        let tree = TestTree::new();
        let mut rec = Recorder::default();
        let err = TreeWalker::new(WalkerConfig::default())
            .unwrap()
            .walk(&tree.path().join("nope"), &mut rec)
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(rec.finished);
        assert!(rec.nodes.is_empty());
    }

    /// Removes a directory as soon as the first node is emitted, so the walk
    /// fails when it later tries to descend into it.
    struct RemoveOnFirstNode {
        target: PathBuf,
        names: Vec<String>,
        finished: bool,
    }

    impl TreeOutput for RemoveOnFirstNode {
        fn output_node(&mut self, node: &Node<'_>) -> io::Result<()> {
            if self.names.is_empty() {
                std::fs::remove_dir_all(&self.target)?;
            }
            self.names.push(node.name.to_string());
            Ok(())
        }

        fn finish(&mut self) -> io::Result<()> {
            self.finished = true;
            Ok(())
        }
    }

    #[test]
    fn test_read_error_mid_walk_aborts_and_finishes() {
        let tree = TestTree::new();
        tree.add_file("a.txt", "");
        tree.add_file("b_dir/inner.txt", "");
        tree.add_file("c.txt", "");

        let mut out = RemoveOnFirstNode {
            target: tree.path().join("b_dir"),
            names: Vec::new(),
            finished: false,
        };
        let err = TreeWalker::new(WalkerConfig::default())
            .unwrap()
            .walk(tree.path(), &mut out)
            .unwrap_err();

        assert!(matches!(err, crate::TreeError::DirectoryRead { .. }));
        assert!(err.is_not_found());
        assert!(out.finished);
        // b_dir is listed before its read fails; nothing after it is emitted.
        assert_eq!(out.names, vec!["a.txt", "b_dir"]);
    }

    #[test]
    fn test_invalid_pattern_rejected_before_walk() {
        let err = TreeWalker::new(WalkerConfig {
            include_pattern: Some("*".to_string()),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, crate::TreeError::InvalidPattern { .. }));
    }
}
