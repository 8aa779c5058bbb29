//! YAML frontmatter extraction from document files.
//!
//! Frontmatter is metadata at the very start of a document, delimited by
//! `---` lines:
//!
//! ```markdown
//! ---
//! title: My Document
//! format: html
//! tags:
//!   - rust
//!   - quarto
//! ---
//!
//! # Document Content
//! ```
//!
//! Extraction and parsing are separate steps so callers can tell a
//! structurally broken header apart from one whose YAML is bad.
//!
//! # Usage
//!
//! ```rust
//! use frontcheck_content::markdown::{extract_frontmatter, parse_frontmatter, Frontmatter};
//!
//! let content = "---\ntitle: Test\n---\n\nBody";
//! let Frontmatter::Block { yaml, body } = extract_frontmatter(content) else {
//!     panic!("expected a frontmatter block");
//! };
//! assert_eq!(body.trim(), "Body");
//!
//! let value = parse_frontmatter(yaml).unwrap();
//! assert_eq!(value.get("title").and_then(|v| v.as_str()), Some("Test"));
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde_yaml::Value;

use super::yaml::safe_load;
use crate::error::Result;

/// The delimiter that opens and closes a frontmatter block.
pub const DELIMITER: &str = "---";

/// Opening `---` line, lazily-matched body, first closing `---` line.
///
/// Delimiter lines are exactly `---`, with an optional `\r` before the newline.
#[allow(clippy::expect_used)]
static BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?sm)\A---\r?\n(.*?)^---\r?$").expect("Invalid frontmatter regex")
});

/// Outcome of looking for a frontmatter block in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frontmatter<'a> {
    /// The document does not start with `---`.
    Absent,
    /// The document starts with `---` but no delimited block was found.
    Unterminated,
    /// A complete block was found.
    Block {
        /// Text between the delimiter lines (may be empty).
        yaml: &'a str,
        /// Everything after the closing delimiter line.
        body: &'a str,
    },
}

impl<'a> Frontmatter<'a> {
    /// Get the raw YAML text, if a block was found.
    pub fn yaml(&self) -> Option<&'a str> {
        match *self {
            Frontmatter::Block { yaml, .. } => Some(yaml),
            _ => None,
        }
    }

    /// Get the body after the block, if a block was found.
    pub fn body(&self) -> Option<&'a str> {
        match *self {
            Frontmatter::Block { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// Locate the frontmatter block at the start of `content`.
///
/// # Behavior
///
/// - Content not starting with `---`: [`Frontmatter::Absent`]
/// - Starts with `---` but the first line is not exactly `---`, or no later
///   line is exactly `---`: [`Frontmatter::Unterminated`]
/// - Otherwise: [`Frontmatter::Block`], closed by the *first* `---` line.
///   A `---` line inside a YAML block scalar therefore ends the block
///   early unless it is indented.
///
/// # Example
///
/// ```rust
/// use frontcheck_content::markdown::{extract_frontmatter, Frontmatter};
///
/// assert_eq!(extract_frontmatter("# Heading"), Frontmatter::Absent);
/// assert_eq!(extract_frontmatter("---\ntitle: x\n"), Frontmatter::Unterminated);
/// assert_eq!(extract_frontmatter("---\n---\n").yaml(), Some(""));
/// ```
pub fn extract_frontmatter(content: &str) -> Frontmatter<'_> {
    if !content.starts_with(DELIMITER) {
        return Frontmatter::Absent;
    }

    let Some(caps) = BLOCK_RE.captures(content) else {
        log::debug!("Frontmatter opening delimiter found but no closing delimiter");
        return Frontmatter::Unterminated;
    };

    let yaml = caps.get(1).map_or("", |m| m.as_str());
    let rest = caps.get(0).map_or(content, |m| &content[m.end()..]);
    let body = rest.strip_prefix('\n').unwrap_or(rest);

    Frontmatter::Block { yaml, body }
}

/// Parse frontmatter text as YAML.
///
/// Builds only scalars, mappings and sequences (see [`safe_load`]). A block
/// holding nothing but blank lines and comments is `Value::Null`.
///
/// # Errors
///
/// Returns [`Error::Yaml`](crate::Error::Yaml) carrying the parser's message
/// when the text is not valid YAML or uses a non-core tag.
pub fn parse_frontmatter(yaml: &str) -> Result<Value> {
    let has_content = yaml.lines().any(|line| {
        let line = line.trim();
        !line.is_empty() && !line.starts_with('#')
    });
    if !has_content {
        return Ok(Value::Null);
    }
    safe_load(yaml)
}

/// Strip frontmatter from content, returning only the body.
///
/// Content without a complete block is returned unchanged.
///
/// # Example
///
/// ```rust
/// use frontcheck_content::markdown::strip_frontmatter;
///
/// let content = "---\ntitle: Test\n---\n\n# Heading";
/// assert_eq!(strip_frontmatter(content).trim(), "# Heading");
/// ```
pub fn strip_frontmatter(content: &str) -> &str {
    extract_frontmatter(content).body().unwrap_or(content)
}

// ============================================================================
// Tests
// ============================================================================
