//! Directory tree of surviving files

use std::collections::BTreeMap;

/// A node in the directory tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    File,
    Dir(DirectoryTree),
}

/// Nested name mapping mirroring the paths of surviving files.
///
/// Only paths leading to a file are ever inserted, so every `Dir` node
/// holds at least one file somewhere below it. Children iterate in
/// lexicographic name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryTree {
    children: BTreeMap<String, TreeNode>,
}

impl DirectoryTree {
    /// Create an empty tree
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a file given its path components, creating parent directories
    pub fn insert<S: AsRef<str>>(&mut self, parts: &[S]) {
        let Some((file, dirs)) = parts.split_last() else {
            return;
        };

        let mut node = self;
        for dir in dirs {
            let child = node
                .children
                .entry(dir.as_ref().to_string())
                .or_insert_with(|| TreeNode::Dir(Self::new()));
            let TreeNode::Dir(sub) = child else {
                return;
            };
            node = sub;
        }

        node.children
            .entry(file.as_ref().to_string())
            .or_insert(TreeNode::File);
    }

    /// Look up a direct child by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TreeNode> {
        self.children.get(name)
    }

    /// Direct children in sorted order
    pub fn children(&self) -> impl Iterator<Item = (&str, &TreeNode)> {
        self.children.iter().map(|(name, node)| (name.as_str(), node))
    }

    /// Whether the tree has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of files anywhere in the tree
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.children
            .values()
            .map(|node| match node {
                TreeNode::File => 1,
                TreeNode::Dir(sub) => sub.file_count(),
            })
            .sum()
    }
}
