//! Shared utility functions for output formatting

use std::path::{Component, Path, PathBuf};

/// Lexically clean a path for display.
///
/// Drops `.` components and resolves `..` against a preceding normal
/// component. A `..` directly under the root is dropped; leading `..` of a
/// relative path is kept. An empty result becomes `.`. The filesystem is
/// never consulted.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        PathBuf::from(".")
    } else {
        parts.iter().collect()
    }
}
