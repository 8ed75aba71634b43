//! Heading anchors derived from relative paths

use crate::text::is_whitespace;

/// Map a relative path to a markdown-safe anchor.
///
/// Each run of whitespace or path separators becomes a single `-`, then
/// everything outside `[A-Za-z0-9_-]` is dropped and the result lowercased.
/// Distinct paths may collide (`a b` and `a/b` both give `a-b`).
#[must_use]
pub fn generate_anchor(path: &str) -> String {
    let mut anchor = String::with_capacity(path.len());
    let mut in_separator_run = false;

    for c in path.chars() {
        if is_whitespace(c) || c == '/' || c == '\\' {
            if !in_separator_run {
                anchor.push('-');
                in_separator_run = true;
            }
            continue;
        }
        in_separator_run = false;
        if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
            anchor.push(c.to_ascii_lowercase());
        }
    }

    anchor
}
