//! Article metadata and the README documentation index.
//!
//! Each article contributes a title, a one-line description and a category.
//! Frontmatter `title`, `subtitle` and `category` win. Otherwise the title
//! comes from the first `# ` heading or the file name, the description
//! from the first prose paragraph, and the category from keywords in the
//! file name, title and opening text.
//!
//! [`render_section`] turns a set of articles into a `## Documentation`
//! section; [`update_readme`] splices that section into README text.
//!
//! # Example
//!
//! ```rust
//! use frontcheck_content::index::{extract_metadata, render_section};
//! use std::path::Path;
//!
//! let meta = extract_metadata(
//!     Path::new("articles/api-guide.qmd"),
//!     "---\ntitle: Orders API\nsubtitle: Placing orders\n---\n\nText",
//! );
//! assert_eq!(meta.title, "Orders API");
//!
//! let section = render_section(&[meta]);
//! assert!(section.contains("- [Orders API](articles/api-guide.qmd) - Placing orders"));
//! ```

use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde_yaml::Value;

use crate::document::read_document;
use crate::markdown::{extract_frontmatter, parse_frontmatter, strip_frontmatter};

/// Longest generated description, in characters.
pub const DESCRIPTION_LIMIT: usize = 80;

/// How much of an article is scanned for category keywords, in characters.
const CATEGORY_SCAN_LIMIT: usize = 1000;

/// Heading that starts the generated section.
pub const SECTION_HEADING: &str = "## Documentation";

#[allow(clippy::expect_used)]
static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#[ \t]+(.+)$").expect("Invalid heading regex"));

#[allow(clippy::expect_used)]
static DOC_HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^## Documentation[ \t]*\r?$").expect("Invalid section regex")
});

#[allow(clippy::expect_used)]
static SECTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^## (.*)$").expect("Invalid section regex"));

#[allow(clippy::expect_used)]
static ADDING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^## Adding New Articles").expect("Invalid section regex")
});

// ============================================================================
// Categories
// ============================================================================

/// Documentation category an article is listed under.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    /// Processes, frameworks, lifecycles
    ProcessFramework,
    /// API integration guides
    ApiGuides,
    /// Tech stack, CI/CD, infrastructure
    Infrastructure,
    /// Nothing matched
    Other,
    /// Set explicitly in frontmatter to a label not listed above
    Named(String),
}

impl Category {
    /// Map a frontmatter label to a category.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Process & Framework Documentation" => Category::ProcessFramework,
            "API Integration Guides" => Category::ApiGuides,
            "Infrastructure & Development" => Category::Infrastructure,
            "Other" => Category::Other,
            other => Category::Named(other.to_string()),
        }
    }

    /// Section heading text.
    pub fn label(&self) -> &str {
        match self {
            Category::ProcessFramework => "Process & Framework Documentation",
            Category::ApiGuides => "API Integration Guides",
            Category::Infrastructure => "Infrastructure & Development",
            Category::Other => "Other",
            Category::Named(label) => label,
        }
    }

    /// Position in the rendered section. Named categories follow the fixed
    /// ones, alphabetically.
    fn rank(&self) -> (u8, &str) {
        match self {
            Category::ProcessFramework => (0, ""),
            Category::ApiGuides => (1, ""),
            Category::Infrastructure => (2, ""),
            Category::Other => (3, ""),
            Category::Named(label) => (4, label.as_str()),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Guess a category from the file name, title and opening text.
///
/// Infrastructure is checked first, then process docs, then API guides.
pub fn categorize(file_name: &str, title: &str, content: &str) -> Category {
    let name = file_name.to_lowercase();
    let title = title.to_lowercase();
    let opening: String = content
        .chars()
        .take(CATEGORY_SCAN_LIMIT)
        .collect::<String>()
        .to_lowercase();

    fn any(haystack: &str, needles: &[&str]) -> bool {
        needles.iter().any(|n| haystack.contains(n))
    }

    if any(
        &name,
        &["tech-stack", "technology", "ci-cd", "cicd", "infrastructure"],
    ) || any(
        &title,
        &["technology stack", "infrastructure", "ci/cd", "pipeline"],
    ) {
        Category::Infrastructure
    } else if (name.contains("guide") && !name.contains("api"))
        || any(
            &name,
            &["process", "framework", "control", "lifecycle", "tracking"],
        )
        || any(&title, &["framework", "process", "control"])
        || (opening.contains("process") && !opening.contains("api"))
    {
        Category::ProcessFramework
    } else if any(&name, &["api", "postman"])
        || title.contains("api")
        || opening.contains("api endpoint")
    {
        Category::ApiGuides
    } else {
        Category::Other
    }
}

// ============================================================================
// Metadata
// ============================================================================

/// What the index knows about one article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleMeta {
    /// File name without directories
    pub file_name: String,
    /// Link target, relative to the `articles/` directory when present
    pub link: String,
    /// Display title
    pub title: String,
    /// One-line description; may be empty
    pub description: String,
    /// Section the article is listed under
    pub category: Category,
}

/// Frontmatter fields the index reads.
#[derive(Debug, Default)]
struct IndexFields {
    title: Option<String>,
    subtitle: Option<String>,
    category: Option<String>,
}

fn scalar_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

fn index_fields(content: &str) -> IndexFields {
    let Some(yaml) = extract_frontmatter(content).yaml() else {
        return IndexFields::default();
    };
    match parse_frontmatter(yaml) {
        Ok(value) => {
            let field = |key: &str| value.get(key).and_then(scalar_text);
            IndexFields {
                title: field("title"),
                subtitle: field("subtitle"),
                category: field("category"),
            }
        }
        Err(e) => {
            log::warn!("Ignoring unparsable frontmatter: {e}");
            IndexFields::default()
        }
    }
}

/// First prose paragraph of `body`, flattened to one line and truncated.
fn first_paragraph(body: &str) -> Option<String> {
    let without_heading = HEADING_RE.replace(body, "");
    let paragraph = without_heading
        .split("\n\n")
        .map(str::trim)
        .find(|p| {
            !p.is_empty() && !p.starts_with('#') && !p.starts_with("```") && !p.starts_with('-')
        })?;

    let flat = paragraph.replace("\r\n", " ").replace('\n', " ");
    let mut description: String = flat.chars().take(DESCRIPTION_LIMIT).collect();
    if flat.chars().count() > DESCRIPTION_LIMIT {
        description.push_str("...");
    }
    Some(description)
}

/// Link target for `path`: forward slashes, trimmed to start at `articles/`.
fn link_for(path: &Path) -> String {
    let link = path.to_string_lossy().replace('\\', "/");
    match link.find("articles/") {
        Some(pos) => link[pos..].to_string(),
        None => link,
    }
}

/// Build the index entry for one article.
pub fn extract_metadata(path: &Path, content: &str) -> ArticleMeta {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let fields = index_fields(content);
    let body = strip_frontmatter(content);

    let title = fields
        .title
        .or_else(|| {
            HEADING_RE
                .captures(body)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().trim().to_string())
        })
        .unwrap_or_else(|| {
            path.file_stem()
                .map(|s| s.to_string_lossy().replace('-', " "))
                .unwrap_or_default()
        });

    let description = fields
        .subtitle
        .or_else(|| first_paragraph(body))
        .unwrap_or_default();

    let category = match fields.category {
        Some(label) => Category::from_label(&label),
        None => categorize(&file_name, &title, content),
    };

    ArticleMeta {
        file_name,
        link: link_for(path),
        title,
        description,
        category,
    }
}

/// Whether `path` names an article the index picks up (`.md` or `.qmd`).
pub fn is_article(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("md") | Some("qmd")
    )
}

/// Read and describe each article in `paths`, in order.
///
/// Non-article files are skipped; unreadable files are logged and skipped.
pub fn load_articles<I, P>(paths: I) -> Vec<ArticleMeta>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut articles = Vec::new();
    for path in paths {
        let path = path.as_ref();
        if !is_article(path) {
            log::debug!("Skipping {}: not a .md or .qmd file", path.display());
            continue;
        }
        match read_document(path) {
            Ok(content) => articles.push(extract_metadata(path, &content)),
            Err(e) => log::warn!("Error processing {e}"),
        }
    }
    articles
}

// ============================================================================
// Rendering
// ============================================================================

/// Number of articles per category, in order of first appearance.
pub fn category_counts(articles: &[ArticleMeta]) -> Vec<(Category, usize)> {
    let mut counts: Vec<(Category, usize)> = Vec::new();
    for article in articles {
        match counts.iter_mut().find(|(c, _)| *c == article.category) {
            Some((_, n)) => *n += 1,
            None => counts.push((article.category.clone(), 1)),
        }
    }
    counts
}

/// Render the `## Documentation` section, without a trailing newline.
///
/// Categories appear in a fixed order and empty ones are left out.
/// Articles within a category are sorted by title, ignoring case.
pub fn render_section(articles: &[ArticleMeta]) -> String {
    let mut sorted: Vec<&ArticleMeta> = articles.iter().collect();
    sorted.sort_by(|a, b| {
        a.category
            .rank()
            .cmp(&b.category.rank())
            .then_with(|| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
            .then_with(|| a.title.cmp(&b.title))
    });

    let mut markdown = format!("{SECTION_HEADING}\n\n");
    let mut current: Option<&Category> = None;
    for article in sorted {
        if current != Some(&article.category) {
            if current.is_some() {
                markdown.push('\n');
            }
            markdown.push_str(&format!("### {}\n\n", article.category));
            current = Some(&article.category);
        }
        markdown.push_str(&format!("- [{}]({})", article.title, article.link));
        if !article.description.is_empty() {
            markdown.push_str(&format!(" - {}", article.description));
        }
        markdown.push('\n');
    }

    markdown.trim_end().to_string()
}

/// Replace (or insert) the documentation section in README text.
///
/// - An existing `## Documentation` section is replaced up to the next
///   `## ` heading, or to the end of the file.
/// - Otherwise the section goes before `## Adding New Articles`.
/// - Otherwise it is appended.
pub fn update_readme(readme: &str, section: &str) -> String {
    if let Some(heading) = DOC_HEADING_RE.find(readme) {
        let start = heading.start();
        let search_from = start + 3;
        let end = SECTION_RE
            .captures_iter(&readme[search_from..])
            .filter(|c| {
                !c.get(1)
                    .is_some_and(|m| m.as_str().starts_with("Documentation"))
            })
            .find_map(|c| c.get(0))
            .map_or(readme.len(), |m| search_from + m.start());
        return format!("{}{section}\n\n{}", &readme[..start], &readme[end..]);
    }

    if let Some(adding) = ADDING_RE.find(readme) {
        let at = adding.start();
        return format!("{}{section}\n\n{}", &readme[..at], &readme[at..]);
    }

    format!("{readme}\n\n{section}\n")
}
