//! Per-entry filtering for tree walking

use regex::Regex;

use crate::error::{Result, TreeError};

use super::config::WalkerConfig;
use super::entry::DirEntry;

/// Why an entry was left out of the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Hidden,
    NotDirectory,
    Excluded,
    NotIncluded,
}

/// Name-based entry filter with include/exclude regexes compiled once per run.
#[derive(Debug, Clone)]
pub struct EntryFilter {
    show_hidden: bool,
    dirs_only: bool,
    include: Option<Regex>,
    exclude: Option<Regex>,
}

impl EntryFilter {
    /// Build a filter from walker config, compiling any patterns.
    pub fn new(config: &WalkerConfig) -> Result<Self> {
        Ok(Self {
            show_hidden: config.show_hidden,
            dirs_only: config.dirs_only,
            include: compile("-P", config.include_pattern.as_deref())?,
            exclude: compile("-I", config.exclude_pattern.as_deref())?,
        })
    }

    /// Apply the filters in order: hidden, directories-only, exclude, include.
    pub fn check(&self, entry: &DirEntry) -> std::result::Result<(), Rejection> {
        if !self.show_hidden && entry.is_hidden() {
            return Err(Rejection::Hidden);
        }
        if self.dirs_only && !entry.is_dir() {
            return Err(Rejection::NotDirectory);
        }
        if self.exclude.as_ref().is_some_and(|re| re.is_match(&entry.name)) {
            return Err(Rejection::Excluded);
        }
        if self.include.as_ref().is_some_and(|re| !re.is_match(&entry.name)) {
            return Err(Rejection::NotIncluded);
        }
        Ok(())
    }
}

fn compile(flag: &'static str, pattern: Option<&str>) -> Result<Option<Regex>> {
    // An empty pattern is the same as no pattern.
    match pattern.filter(|p| !p.is_empty()) {
        None => Ok(None),
        Some(p) => Regex::new(p)
            .map(Some)
            .map_err(|source| TreeError::InvalidPattern {
                flag,
                pattern: p.to_string(),
                source,
            }),
    }
}
