//! Final document assembly and output

use std::fs;
use std::path::Path;

use tracing::debug;

use super::{FileSection, FlattenError, Stats};

/// The complete markdown document, held in memory until written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub stats: Stats,
    pub index: Vec<String>,
    pub sections: Vec<FileSection>,
}

impl Document {
    /// Render title, statistics, index, separator and file sections
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = format!("# {}\n\n", self.title);
        out.push_str(&self.stats.render());

        out.push_str("## Index\n\n");
        out.push_str(&self.index.join("\n"));
        out.push_str("\n\n---\n\n");

        for section in &self.sections {
            section.render_into(&mut out);
        }
        out
    }

    /// Write the rendered document to `path` in a single write
    ///
    /// # Errors
    /// Returns `FlattenError::Write` if the file cannot be created or written.
    pub fn write_to(&self, path: &Path) -> Result<(), FlattenError> {
        let rendered = self.render();
        debug!("Writing {} bytes to {}", rendered.len(), path.display());
        fs::write(path, rendered).map_err(|source| FlattenError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
