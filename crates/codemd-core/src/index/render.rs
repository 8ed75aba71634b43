//! Markdown rendering of the directory tree

use super::{DirectoryTree, TreeNode, generate_anchor};

/// Render the tree as nested markdown bullets.
///
/// Directories become bold folder entries with their children indented by
/// two spaces; files become links to the anchor of their full relative path.
#[must_use]
pub fn render_index(tree: &DirectoryTree) -> Vec<String> {
    render_level(tree, "")
}

fn render_level(tree: &DirectoryTree, parent: &str) -> Vec<String> {
    let mut lines = Vec::new();

    for (name, node) in tree.children() {
        let path = if parent.is_empty() {
            name.to_string()
        } else {
            format!("{parent}/{name}")
        };

        match node {
            TreeNode::Dir(sub) => {
                lines.push(format!("- 📁 **{name}**"));
                lines.extend(
                    render_level(sub, &path)
                        .into_iter()
                        .map(|line| format!("  {line}")),
                );
            }
            TreeNode::File => {
                lines.push(format!("- 📄 [{name}](#{})", generate_anchor(&path)));
            }
        }
    }

    lines
}
