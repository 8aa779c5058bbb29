//! Error types for frontcheck-cli

use thiserror::Error;

/// Result type alias for frontcheck-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that stop the tool itself.
///
/// Per-file problems are never errors here; they are results in a
/// [`Report`](frontcheck_content::Report).
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from frontcheck-content
    #[error("Content error: {0}")]
    Content(#[from] frontcheck_content::Error),

    /// Configuration file could not be loaded
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong, including the file path
        message: String,
    },

    /// Writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }
}
