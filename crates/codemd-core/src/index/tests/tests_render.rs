//! Tests for index rendering

use crate::index::{DirectoryTree, render_index};

#[test]
fn test_render_empty_tree() {
    assert!(render_index(&DirectoryTree::new()).is_empty());
}

#[test]
fn test_render_flat_files() {
    let mut tree = DirectoryTree::new();
    tree.insert(&["b.rs"]);
    tree.insert(&["a.py"]);

    assert_eq!(
        render_index(&tree),
        vec!["- 📄 [a.py](#apy)", "- 📄 [b.rs](#brs)"]
    );
}

#[test]
fn test_render_nested_dirs() {
    let mut tree = DirectoryTree::new();
    tree.insert(&["a.py"]);
    tree.insert(&["sub", "b.md"]);

    assert_eq!(
        render_index(&tree),
        vec![
            "- 📄 [a.py](#apy)",
            "- 📁 **sub**",
            "  - 📄 [b.md](#sub-bmd)",
        ]
    );
}

#[test]
fn test_render_indents_per_depth() {
    let mut tree = DirectoryTree::new();
    tree.insert(&["one", "two", "three", "deep.txt"]);

    assert_eq!(
        render_index(&tree),
        vec![
            "- 📁 **one**",
            "  - 📁 **two**",
            "    - 📁 **three**",
            "      - 📄 [deep.txt](#one-two-three-deeptxt)",
        ]
    );
}

#[test]
fn test_render_mixes_files_and_dirs_in_sorted_order() {
    let mut tree = DirectoryTree::new();
    tree.insert(&["c.txt"]);
    tree.insert(&["b", "inner.txt"]);
    tree.insert(&["a.txt"]);

    assert_eq!(
        render_index(&tree),
        vec![
            "- 📄 [a.txt](#atxt)",
            "- 📁 **b**",
            "  - 📄 [inner.txt](#b-innertxt)",
            "- 📄 [c.txt](#ctxt)",
        ]
    );
}

#[test]
fn test_render_one_link_per_file() {
    let mut tree = DirectoryTree::new();
    tree.insert(&["src", "lib.rs"]);
    tree.insert(&["src", "main.rs"]);
    tree.insert(&["src", "util", "mod.rs"]);
    tree.insert(&["Cargo.toml"]);

    let lines = render_index(&tree);
    let links = lines.iter().filter(|l| l.contains("📄")).count();
    let folders = lines.iter().filter(|l| l.contains("📁")).count();

    assert_eq!(links, tree.file_count());
    assert_eq!(folders, 2);
}
