//! Tree formatting and display
//!
//! - `config` - Output configuration types
//! - `streaming` - Line-per-entry formatter over any `WriteColor` sink
//! - `utils` - Shared helpers (display path cleaning)

mod config;
mod streaming;
mod utils;

pub use config::OutputConfig;
pub use streaming::StreamingFormatter;
pub use utils::clean_path;
