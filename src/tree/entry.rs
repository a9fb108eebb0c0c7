//! Directory entries as read from the filesystem

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TreeError};

/// Kind of a directory entry, taken from the entry itself (symlinks are not followed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Display name (lossy for non-UTF-8 names)
    pub name: String,
    pub kind: EntryKind,
    file_name: OsString,
}

impl DirEntry {
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        let name = name.into();
        Self {
            file_name: OsString::from(&name),
            name,
            kind,
        }
    }

    fn from_fs(entry: fs::DirEntry, dir: &Path) -> Result<Self> {
        let file_type = entry.file_type().map_err(|source| TreeError::DirectoryRead {
            path: dir.to_path_buf(),
            source,
        })?;
        let file_name = entry.file_name();
        Ok(Self {
            name: file_name.to_string_lossy().into_owned(),
            kind: if file_type.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            },
            file_name,
        })
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }

    /// Path of this entry inside `parent`.
    pub fn path_in(&self, parent: &Path) -> PathBuf {
        parent.join(&self.file_name)
    }
}

/// Read a directory and return its entries sorted by file name.
pub fn read_sorted(path: &Path) -> Result<Vec<DirEntry>> {
    let read_err = |source| TreeError::DirectoryRead {
        path: path.to_path_buf(),
        source,
    };

    let mut entries = fs::read_dir(path)
        .map_err(read_err)?
        .map(|entry| entry.map_err(read_err).and_then(|e| DirEntry::from_fs(e, path)))
        .collect::<Result<Vec<_>>>()?;
    entries.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(entries)
}
