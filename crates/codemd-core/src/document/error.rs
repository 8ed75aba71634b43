//! Errors raised while reading files and producing the document

use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Why a single file could not be read as text
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("invalid UTF-8 text: {0}")]
    InvalidText(#[from] FromUtf8Error),

    #[error("{0}")]
    AccessDenied(io::Error),

    #[error("{0}")]
    Io(io::Error),
}

impl ReadError {
    /// Classify an I/O error from opening or reading a file
    #[must_use]
    pub fn from_io(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::PermissionDenied {
            Self::AccessDenied(err)
        } else {
            Self::Io(err)
        }
    }

    /// Whether the run can continue with a placeholder for this file
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidText(_) | Self::AccessDenied(_))
    }
}

impl From<io::Error> for ReadError {
    fn from(err: io::Error) -> Self {
        Self::from_io(err)
    }
}

/// Fatal errors that abort a run before the output is written
#[derive(Debug, Error)]
pub enum FlattenError {
    #[error("Cannot use {} as root directory: {source}", .path.display())]
    Root {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: ReadError,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
