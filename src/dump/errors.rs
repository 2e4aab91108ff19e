/// Errors from the hex-dump layer.
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while dumping a file as hex text.
#[derive(Debug, Error)]
pub enum DumpError {
    /// Requested line width is not a positive number of bytes.
    #[error("width must be a positive number of bytes, got {width}")]
    InvalidWidth {
        /// The rejected width value.
        width: usize,
    },

    /// The input file could not be opened or read.
    #[error("cannot read '{}': {source}", path.display())]
    Read {
        /// Path of the unreadable input file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Writing a dump line to stdout failed.
    #[error("cannot write output: {source}")]
    Write {
        /// Underlying I/O error.
        source: io::Error,
    },
}

/// Exit code mapping for `DumpError` variants.
impl DumpError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidWidth { .. } => 2,
            Self::Read { .. } | Self::Write { .. } => 1,
        }
    }
}
