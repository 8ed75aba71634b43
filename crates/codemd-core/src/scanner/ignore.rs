//! Fixed ignore sets applied during the walk

use std::collections::HashSet;

/// Directory names never descended into
pub const IGNORED_DIRS: &[&str] = &["node_modules", "fonts", ".git", "images"];

/// File names never processed
pub const IGNORED_FILES: &[&str] = &["package-lock.json", "database.db"];

/// Name-based filter for directories and files.
///
/// Matching is on the bare entry name, so an ignored name is skipped at any
/// depth below the root.
#[derive(Debug, Clone)]
pub struct IgnoreFilter {
    dirs: HashSet<String>,
    files: HashSet<String>,
}

impl IgnoreFilter {
    /// Create a filter holding the built-in sets
    #[must_use]
    pub fn new() -> Self {
        Self {
            dirs: IGNORED_DIRS.iter().map(|d| (*d).to_string()).collect(),
            files: IGNORED_FILES.iter().map(|f| (*f).to_string()).collect(),
        }
    }

    /// Also ignore files with this name
    #[must_use]
    pub fn with_file(mut self, name: impl Into<String>) -> Self {
        self.files.insert(name.into());
        self
    }

    /// Whether a directory (and everything beneath it) is excluded
    #[must_use]
    pub fn is_ignored_dir(&self, name: &str) -> bool {
        self.dirs.contains(name)
    }

    /// Whether a file is excluded
    #[must_use]
    pub fn is_ignored_file(&self, name: &str) -> bool {
        self.files.contains(name)
    }
}

impl Default for IgnoreFilter {
    fn default() -> Self {
        Self::new()
    }
}
