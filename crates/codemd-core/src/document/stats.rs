//! Project statistics

use super::{FileSection, SectionBody};
use crate::text::count_words;

/// Line, character and word counts of one text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextCounts {
    pub lines: usize,
    pub characters: usize,
    pub words: usize,
}

impl TextCounts {
    /// Count a text.
    ///
    /// Lines are the number of `\n` characters, so a final line without a
    /// trailing newline is not counted. Characters are Unicode scalar values.
    /// Words are split on [`crate::text::is_whitespace`].
    #[must_use]
    pub fn of(text: &str) -> Self {
        Self {
            lines: text.matches('\n').count(),
            characters: text.chars().count(),
            words: count_words(text),
        }
    }
}

/// Running totals for the statistics block
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub files: usize,
    pub folders: usize,
    pub lines: usize,
    pub characters: usize,
    pub words: usize,
}

impl Stats {
    /// Create empty statistics for a walk that visited `folders` directories
    #[must_use]
    pub fn with_folders(folders: usize) -> Self {
        Self {
            folders,
            ..Self::default()
        }
    }

    /// Count one file. Skipped files add to the file count only.
    pub fn record(&mut self, section: &FileSection) {
        self.files += 1;
        if let SectionBody::Content(content) = &section.body {
            self.add(TextCounts::of(content));
        }
    }

    /// Add counts from successfully read text
    pub fn add(&mut self, counts: TextCounts) {
        self.lines += counts.lines;
        self.characters += counts.characters;
        self.words += counts.words;
    }

    /// Render the `## Project Statistics` block
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "## Project Statistics\n\n\
             - **Number of files:** {}\n\
             - **Number of folders:** {}\n\
             - **Total lines:** {}\n\
             - **Total characters:** {}\n\
             - **Total words:** {}\n\n",
            self.files, self.folders, self.lines, self.characters, self.words
        )
    }
}
