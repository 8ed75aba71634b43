//! codemd-core: Flatten a directory tree into one markdown document
//!
//! Walks a root directory, skips a fixed set of ignored directories and
//! files, and writes a single markdown file holding:
//!
//! - a title (the root folder's name)
//! - project statistics (files, folders, lines, characters, words)
//! - a nested index linking to every file
//! - each file's contents in a fenced code block

pub mod document;
pub mod flatten;
pub mod index;
pub mod scanner;
pub mod text;

// Re-export commonly used types
pub use document::{Document, FileSection, FlattenError, ReadError, SectionBody, Stats};
pub use flatten::{DEFAULT_OUTPUT, FlattenOptions, FlattenSummary, build_document, flatten};
pub use index::{DirectoryTree, generate_anchor, render_index};
pub use scanner::{DiscoveredFile, IgnoreFilter, Language, ScanResult, Scanner};
