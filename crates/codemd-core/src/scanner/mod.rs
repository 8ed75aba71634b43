//! Scanner module: File discovery and ignore rules
//!
//! Responsible for walking the root directory, pruning ignored
//! directories and files, and mapping extensions to fence tags.

mod ignore;
mod language;
mod walker;

pub use ignore::{IGNORED_DIRS, IGNORED_FILES, IgnoreFilter};
pub use language::Language;
pub use walker::{DiscoveredFile, ScanResult, Scanner};
