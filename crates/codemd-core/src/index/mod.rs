//! Index module: Anchors and the nested file index
//!
//! Builds the in-memory directory tree of surviving files and renders
//! it as nested markdown bullets linking to each file's section.

mod anchor;
mod render;
mod tree;

pub use anchor::generate_anchor;
pub use render::render_index;
pub use tree::{DirectoryTree, TreeNode};

#[cfg(test)]
mod tests;
