//! Frontmatter extraction and validation.
//!
//! This crate holds everything `frontcheck` knows about documents; the CLI
//! crate only parses arguments and prints.
//!
//! # Modules
//!
//! - [`markdown`]: locating and parsing the `---` frontmatter block
//! - [`document`]: reading files as text
//! - [`validate`]: checking one file and rendering its status line
//! - [`report`]: aggregating the results of a run
//! - [`index`]: article metadata and the README documentation section
//! - [`error`]: error types and Result alias
//!
//! # Example
//!
//! ```rust
//! use frontcheck_content::{validate_content, Tag};
//!
//! let v = validate_content("post.qmd", "---\ntitle: Hello\n---\n\nBody");
//! assert!(v.is_valid());
//! assert_eq!(v.tag(), Tag::Pass);
//! assert_eq!(v.to_string(), "  [PASS] Valid YAML frontmatter in post.qmd");
//! ```

pub mod document;
pub mod error;
pub mod index;
pub mod markdown;
pub mod report;
pub mod validate;

mod proptests;

// Re-export key types at crate root for convenience
pub use document::read_document;
pub use error::{Error, Result};
pub use index::{ArticleMeta, Category};
pub use markdown::{extract_frontmatter, parse_frontmatter, strip_frontmatter, Frontmatter};
pub use report::{check_files, Report};
pub use validate::{validate_content, validate_file, Status, Tag, Validation};
