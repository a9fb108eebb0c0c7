//! Prefix arithmetic for the tree-drawing connectors.
//!
//! With indentation on, an entry at depth `d` carries a prefix of `4 * d`
//! characters followed by a four-character connector.

/// Connector for a non-final sibling.
pub const BRANCH: &str = "├── ";
/// Connector for the final visible sibling.
pub const LAST_BRANCH: &str = "└── ";
/// Continuation under a non-final sibling.
pub const PIPE: &str = "│   ";
/// Continuation under the final visible sibling.
pub const BLANK: &str = "    ";

/// Connector drawn before an entry's name.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { LAST_BRANCH } else { BRANCH }
}

/// Calculate the prefix handed down to an entry's children.
pub fn child_prefix(current_prefix: &str, is_last: bool) -> String {
    let tail = if is_last { BLANK } else { PIPE };
    let mut prefix = String::with_capacity(current_prefix.len() + tail.len());
    prefix.push_str(current_prefix);
    prefix.push_str(tail);
    prefix
}
