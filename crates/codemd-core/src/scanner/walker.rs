//! File walker: Discovers files in a directory tree

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use super::IgnoreFilter;
use crate::index::DirectoryTree;

/// A file discovered during scanning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    /// Path usable for opening the file
    pub path: PathBuf,
    /// Path relative to the scan root, components joined with `/`
    pub relative_path: String,
}

/// Everything collected by one walk of the root
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Surviving files in discovery order
    pub files: Vec<DiscoveredFile>,
    /// Relative paths of every visited non-root directory
    pub folders: BTreeSet<String>,
    /// Nested view of `files`, used for the index
    pub tree: DirectoryTree,
}

/// Scanner for discovering files below a root directory
#[derive(Debug)]
pub struct Scanner {
    root: PathBuf,
    filter: IgnoreFilter,
}

impl Scanner {
    /// Create a new scanner for the given root directory
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            filter: IgnoreFilter::new(),
        }
    }

    /// Replace the ignore filter
    #[must_use]
    pub fn with_filter(mut self, filter: IgnoreFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Walk the root depth-first, siblings in name order.
    ///
    /// Ignored directories are pruned before descending. Symlinked
    /// directories are never descended into or counted; a symlink to a
    /// regular file is treated as that file. Directories whose listing
    /// fails are logged and left out of the folder set.
    #[must_use]
    pub fn scan(&self) -> ScanResult {
        let mut result = ScanResult::default();

        let walker = WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !self.is_ignored_dir(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    self.forget_unlisted_folder(&e, &mut result.folders);
                    continue;
                }
            };
            if entry.depth() == 0 {
                continue;
            }

            let Some(parts) = self.relative_parts(entry.path()) else {
                continue;
            };
            let relative_path = parts.join("/");
            let file_type = entry.file_type();

            if file_type.is_dir() {
                result.folders.insert(relative_path);
            } else if file_type.is_file() || is_symlinked_file(&entry) {
                if self.filter.is_ignored_file(&entry.file_name().to_string_lossy()) {
                    debug!("Ignoring file {}", relative_path);
                    continue;
                }
                result.tree.insert(&parts);
                result.files.push(DiscoveredFile {
                    path: entry.into_path(),
                    relative_path,
                });
            } else {
                debug!("Skipping non-file entry {}", relative_path);
            }
        }

        result
    }

    /// Get the root directory being scanned
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn is_ignored_dir(&self, entry: &DirEntry) -> bool {
        entry.file_type().is_dir()
            && self
                .filter
                .is_ignored_dir(&entry.file_name().to_string_lossy())
    }

    /// A directory whose listing failed was already recorded when its own
    /// entry was yielded; it does not count as visited.
    fn forget_unlisted_folder(&self, err: &walkdir::Error, folders: &mut BTreeSet<String>) {
        let Some(path) = err.path() else {
            return;
        };
        if let Some(parts) = self.relative_parts(path) {
            folders.remove(&parts.join("/"));
        }
    }

    fn relative_parts(&self, path: &Path) -> Option<Vec<String>> {
        let relative = path.strip_prefix(&self.root).ok()?;
        Some(
            relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect(),
        )
    }
}

fn is_symlinked_file(entry: &DirEntry) -> bool {
    entry.path_is_symlink() && fs::metadata(entry.path()).is_ok_and(|m| m.is_file())
}
