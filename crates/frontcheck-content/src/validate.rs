//! Per-file frontmatter validation.
//!
//! Every check ends in a [`Validation`]: read failures, structural problems
//! and YAML errors are captured as a [`Status`] rather than returned as
//! errors, so one bad file never stops the others from being checked.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::document::read_document;
use crate::error::Error;
use crate::markdown::{extract_frontmatter, parse_frontmatter, Frontmatter};

/// Severity tag printed in front of each status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Informational, not a failure
    Info,
    /// Structural problem
    Warn,
    /// Passed
    Pass,
    /// YAML syntax failure
    Fail,
    /// File could not be read
    Error,
}

impl Tag {
    /// Upper-case label as printed between brackets.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Info => "INFO",
            Tag::Warn => "WARN",
            Tag::Pass => "PASS",
            Tag::Fail => "FAIL",
            Tag::Error => "ERROR",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of checking one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// The document does not start with `---`.
    NoFrontmatter,
    /// The block parsed as YAML.
    Valid,
    /// Opening delimiter present but no complete block.
    MalformedStructure,
    /// The block is not valid YAML; holds the parser message.
    InvalidSyntax(String),
    /// The file could not be read; holds the I/O message.
    ReadError(String),
}

impl Status {
    /// Whether this status counts as a pass.
    pub fn is_valid(&self) -> bool {
        matches!(self, Status::NoFrontmatter | Status::Valid)
    }

    /// Severity tag for this status.
    pub fn tag(&self) -> Tag {
        match self {
            Status::NoFrontmatter => Tag::Info,
            Status::Valid => Tag::Pass,
            Status::MalformedStructure => Tag::Warn,
            Status::InvalidSyntax(_) => Tag::Fail,
            Status::ReadError(_) => Tag::Error,
        }
    }
}

/// A checked file and its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    path: PathBuf,
    status: Status,
}

impl Validation {
    /// Create a validation record.
    pub fn new(path: impl Into<PathBuf>, status: Status) -> Self {
        Self {
            path: path.into(),
            status,
        }
    }

    /// The checked path, as given.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The outcome.
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Whether the file passed.
    pub fn is_valid(&self) -> bool {
        self.status.is_valid()
    }

    /// Severity tag for the status line.
    pub fn tag(&self) -> Tag {
        self.status.tag()
    }

    /// The status line text without the indented tag.
    pub fn message(&self) -> String {
        let path = self.path.display();
        match &self.status {
            Status::NoFrontmatter => format!("No frontmatter in {path}"),
            Status::Valid => format!("Valid YAML frontmatter in {path}"),
            Status::MalformedStructure => format!("Invalid frontmatter structure in {path}"),
            Status::InvalidSyntax(e) => format!("Invalid YAML in {path}: {e}"),
            Status::ReadError(e) => format!("Error reading {path}: {e}"),
        }
    }
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  [{}] {}", self.tag(), self.message())
    }
}

/// Validate already-loaded document text.
///
/// `path` is used only for reporting.
pub fn validate_content(path: impl Into<PathBuf>, content: &str) -> Validation {
    let path = path.into();
    let status = match extract_frontmatter(content) {
        Frontmatter::Absent => Status::NoFrontmatter,
        Frontmatter::Unterminated => Status::MalformedStructure,
        Frontmatter::Block { yaml, .. } => match parse_frontmatter(yaml) {
            Ok(_) => Status::Valid,
            Err(e) => {
                log::debug!("{}: frontmatter failed to parse: {e}", path.display());
                Status::InvalidSyntax(e.to_string())
            }
        },
    };
    Validation::new(path, status)
}

/// Read a file and validate its frontmatter.
///
/// Never fails: a read error becomes [`Status::ReadError`].
pub fn validate_file(path: impl AsRef<Path>) -> Validation {
    let path = path.as_ref();
    log::debug!("Checking {}", path.display());
    match read_document(path) {
        Ok(content) => validate_content(path, &content),
        Err(e) => {
            log::debug!("Read failed: {e}");
            let message = match e {
                Error::Io { source, .. } => source.to_string(),
                other => other.to_string(),
            };
            Validation::new(path, Status::ReadError(message))
        }
    }
}
