//! Flatten entry point: walk, read, assemble, write

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::document::{Document, FileSection, FlattenError, Stats};
use crate::index::render_index;
use crate::scanner::{IgnoreFilter, Scanner};

/// Output file name used when none is given
pub const DEFAULT_OUTPUT: &str = "output.md";

/// Options for one flatten run
#[derive(Debug, Clone)]
pub struct FlattenOptions {
    root: PathBuf,
    output: PathBuf,
    ignored_files: Vec<String>,
}

impl FlattenOptions {
    /// Flatten `root` into `output.md`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            ignored_files: Vec::new(),
        }
    }

    /// Set the output file
    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Ignore an extra file name, e.g. the running executable
    #[must_use]
    pub fn with_ignored_file(mut self, name: impl Into<String>) -> Self {
        self.ignored_files.push(name.into());
        self
    }

    /// Get the traversal root
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the output file
    #[must_use]
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Built-in ignore sets plus the output name and extra file names
    #[must_use]
    pub fn filter(&self) -> IgnoreFilter {
        let mut filter = IgnoreFilter::new();
        if let Some(name) = self.output.file_name() {
            filter = filter.with_file(name.to_string_lossy());
        }
        for name in &self.ignored_files {
            filter = filter.with_file(name.clone());
        }
        filter
    }
}

/// Outcome of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenSummary {
    pub stats: Stats,
    pub skipped: usize,
    pub output: PathBuf,
}

/// Walk the root and build the document without writing it
///
/// # Errors
/// Returns `FlattenError::Root` if the root is missing or not a directory,
/// and `FlattenError::Read` for read failures other than undecodable or
/// permission-denied files.
pub fn build_document(options: &FlattenOptions) -> Result<Document, FlattenError> {
    let root = resolve_root(&options.root)?;
    info!("Flattening directory: {}", root.display());

    let scan = Scanner::new(&root).with_filter(options.filter()).scan();
    info!(
        "Found {} files in {} folders",
        scan.files.len(),
        scan.folders.len()
    );

    let mut stats = Stats::with_folders(scan.folders.len());
    let mut sections = Vec::with_capacity(scan.files.len());
    for file in &scan.files {
        let section = FileSection::load(file).map_err(|source| FlattenError::Read {
            path: file.path.clone(),
            source,
        })?;
        debug!("Read {}", section.relative_path);
        stats.record(&section);
        sections.push(section);
    }

    Ok(Document {
        title: root_title(&root),
        stats,
        index: render_index(&scan.tree),
        sections,
    })
}

/// Build the document and write it to the configured output file
///
/// # Errors
/// Returns any error from [`build_document`], or `FlattenError::Write` if
/// the output cannot be written. Nothing is written when building fails.
pub fn flatten(options: &FlattenOptions) -> Result<FlattenSummary, FlattenError> {
    let document = build_document(options)?;
    document.write_to(&options.output)?;

    let skipped = document.sections.iter().filter(|s| s.is_skipped()).count();
    info!(
        "✓ Wrote {}: {} files, {} folders, {} lines ({} skipped)",
        options.output.display(),
        document.stats.files,
        document.stats.folders,
        document.stats.lines,
        skipped
    );

    Ok(FlattenSummary {
        stats: document.stats,
        skipped,
        output: options.output.clone(),
    })
}

fn resolve_root(root: &Path) -> Result<PathBuf, FlattenError> {
    let resolved = root.canonicalize().map_err(|source| FlattenError::Root {
        path: root.to_path_buf(),
        source,
    })?;
    if !resolved.is_dir() {
        return Err(FlattenError::Root {
            path: root.to_path_buf(),
            source: io::Error::other("not a directory"),
        });
    }
    Ok(resolved)
}

fn root_title(root: &Path) -> String {
    root.file_name().map_or_else(
        || root.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_title_uses_last_component() {
        assert_eq!(root_title(Path::new("/home/user/project")), "project");
    }

    #[test]
    fn test_root_title_for_filesystem_root() {
        assert_eq!(root_title(Path::new("/")), "/");
    }

    #[test]
    fn test_options_defaults() {
        let options = FlattenOptions::new(".");
        assert_eq!(options.root(), Path::new("."));
        assert_eq!(options.output(), Path::new(DEFAULT_OUTPUT));
    }

    #[test]
    fn test_filter_ignores_output_name() {
        let options = FlattenOptions::new(".").with_output("/tmp/out/snapshot.md");
        let filter = options.filter();
        assert!(filter.is_ignored_file("snapshot.md"));
        assert!(!filter.is_ignored_file(DEFAULT_OUTPUT));
    }

    #[test]
    fn test_filter_ignores_extra_names() {
        let filter = FlattenOptions::new(".")
            .with_ignored_file("codemd")
            .filter();
        assert!(filter.is_ignored_file("codemd"));
        assert!(filter.is_ignored_file(DEFAULT_OUTPUT));
        assert!(filter.is_ignored_file("package-lock.json"));
    }
}
