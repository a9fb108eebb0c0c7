//! Directory tree walking logic
//!
//! `TreeWalker` reads each directory in sorted order, applies the entry
//! filters and streams every visible entry to a `TreeOutput`. Rendering the
//! lines is left to the output (see `crate::output`).

mod config;
mod entry;
mod filter;
mod traversal;
mod walker;

// Re-export public types
pub use config::WalkerConfig;
pub use entry::{DirEntry, EntryKind, read_sorted};
pub use filter::{EntryFilter, Rejection};
pub use traversal::{BLANK, BRANCH, LAST_BRANCH, PIPE, child_prefix, connector};
pub use walker::{Node, TreeOutput, TreeWalker, WalkSummary};
