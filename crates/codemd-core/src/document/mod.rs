//! Document module: File sections, statistics and the final markdown
//!
//! Reads each discovered file as text, accumulates statistics, and
//! assembles the title, statistics, index and sections into one document.

mod assemble;
mod error;
mod section;
mod stats;

pub use assemble::Document;
pub use error::{FlattenError, ReadError};
pub use section::{FileSection, SectionBody, read_text};
pub use stats::{Stats, TextCounts};
