//! Output configuration types

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Print the joined path of each entry instead of its bare name
    pub full_path: bool,
    /// Draw the tree connectors and continuation prefix
    pub indent: bool,
    pub use_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            full_path: false,
            indent: true,
            use_color: false,
        }
    }
}
