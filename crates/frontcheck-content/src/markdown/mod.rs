//! Frontmatter extraction utilities.
//!
//! - [`frontmatter`]: locating the `---` block and parsing it
//! - [`yaml`]: plain-data YAML loading

pub mod frontmatter;
pub mod yaml;

pub use frontmatter::{
    extract_frontmatter, parse_frontmatter, strip_frontmatter, Frontmatter, DELIMITER,
};
pub use yaml::safe_load;
