//! Error types for frontcheck-content

use std::path::{Path, PathBuf};

/// Result type alias for frontcheck-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading or parsing frontmatter.
///
/// The validator never lets these escape a single file: they are folded
/// into a [`Status`](crate::validate::Status) instead. They surface
/// directly only to callers using the lower-level functions.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The file could not be opened or decoded as UTF-8.
    #[error("{path}: {source}")]
    Io {
        /// File that failed to read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The frontmatter block is not valid YAML.
    ///
    /// Holds the parser's own message, unmodified.
    #[error("{0}")]
    Yaml(String),
}

impl Error {
    /// Creates an I/O error tied to the path that produced it.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a YAML syntax error from the parser's message.
    pub fn yaml<S: Into<String>>(message: S) -> Self {
        Error::Yaml(message.into())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::Yaml(err.to_string())
    }
}
