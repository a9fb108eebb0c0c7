//! Configuration types for tree walkers

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Include entries whose name starts with `.`
    pub show_hidden: bool,
    pub dirs_only: bool,
    /// Deepest level to descend into; `None` means unlimited.
    /// Entries at depth `max_depth` are listed but not expanded.
    pub max_depth: Option<usize>,
    /// Only show entries whose name matches this regex
    pub include_pattern: Option<String>,
    /// Hide entries whose name matches this regex
    pub exclude_pattern: Option<String>,
}

impl WalkerConfig {
    /// Map a `-L` style level onto `max_depth`; any negative value means unlimited.
    pub fn depth_from_level(level: i64) -> Option<usize> {
        usize::try_from(level).ok()
    }

    /// Whether a directory found at `depth` should be expanded.
    pub fn descends_at(&self, depth: usize) -> bool {
        self.max_depth.is_none_or(|max| depth < max)
    }
}
