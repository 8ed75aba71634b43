//! Per-file sections of the document

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use tracing::warn;

use super::ReadError;
use crate::index::generate_anchor;
use crate::scanner::{DiscoveredFile, Language};

/// Read a whole file as UTF-8 text
///
/// # Errors
/// Returns `ReadError::InvalidText` for undecodable content,
/// `ReadError::AccessDenied` when permission is refused and
/// `ReadError::Io` for anything else.
pub fn read_text(path: &Path) -> Result<String, ReadError> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8(bytes)?)
}

/// What goes inside a section's code fence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    /// Raw file contents
    Content(String),
    /// The file could not be read; holds the reason
    Skipped(String),
}

/// One file's heading and fenced contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSection {
    pub relative_path: String,
    pub language: &'static str,
    pub body: SectionBody,
}

impl FileSection {
    /// Read a discovered file into a section.
    ///
    /// Undecodable or permission-denied files become a `Skipped` section and
    /// a warning is logged; the run carries on.
    ///
    /// # Errors
    /// Returns any other read failure, which is fatal for the run.
    pub fn load(file: &DiscoveredFile) -> Result<Self, ReadError> {
        let body = match read_text(&file.path) {
            Ok(content) => SectionBody::Content(content),
            Err(e) if e.is_recoverable() => {
                warn!("Skipping file {}: {}", file.path.display(), e);
                SectionBody::Skipped(e.to_string())
            }
            Err(e) => return Err(e),
        };

        Ok(Self {
            relative_path: file.relative_path.clone(),
            language: Language::fence_tag(&file.path),
            body,
        })
    }

    /// Anchor shared by the heading and its index link
    #[must_use]
    pub fn anchor(&self) -> String {
        generate_anchor(&self.relative_path)
    }

    /// Whether the contents were replaced by a skip comment
    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        matches!(self.body, SectionBody::Skipped(_))
    }

    /// Append the heading and fenced block to `out`
    pub fn render_into(&self, out: &mut String) {
        let _ = write!(
            out,
            "# {} <a id=\"{}\"></a>\n\n```{}\n",
            self.relative_path,
            self.anchor(),
            self.language
        );
        match &self.body {
            SectionBody::Content(content) => out.push_str(content),
            SectionBody::Skipped(reason) => {
                let _ = writeln!(
                    out,
                    "<!-- Skipping file {}: {} -->",
                    self.relative_path, reason
                );
            }
        }
        out.push_str("\n```\n\n");
    }
}
