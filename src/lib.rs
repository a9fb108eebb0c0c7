//! Twig - print a directory as an indented tree

pub mod error;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Result, TreeError};
pub use output::{OutputConfig, StreamingFormatter};
pub use tree::{Node, TreeOutput, TreeWalker, WalkSummary, WalkerConfig};
