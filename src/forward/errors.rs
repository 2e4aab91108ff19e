/// Errors from the format-forwarding layer.
use std::io;

use thiserror::Error;

/// Errors that can occur while launching the formatter.
#[derive(Debug, Error)]
pub enum ForwardError {
    /// The formatter executable could not be spawned.
    #[error("cannot launch '{program}': {source}")]
    Launch {
        /// The program that failed to start.
        program: String,
        /// Underlying I/O error from the spawn call.
        source: io::Error,
    },
}

/// Exit code mapping for `ForwardError` variants.
impl ForwardError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Launch { .. } => 1,
        }
    }
}
