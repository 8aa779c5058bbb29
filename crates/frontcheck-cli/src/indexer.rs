//! Regenerate the documentation section of a README from article files.

use std::io::Write;
use std::path::{Path, PathBuf};

use frontcheck_content::index::{category_counts, load_articles, render_section, update_readme};
use frontcheck_content::read_document;

use crate::error::Result;

/// Printed on stdout when no articles are given.
pub const INDEX_USAGE: &str = "Usage: frontcheck-index [--readme README.md] <article.qmd> ...";

/// Index `files` and rewrite the section in `readme`, or print it with `print`.
///
/// Unreadable articles are logged and left out. A README that cannot be
/// read or written is an error. Returns the number of indexed articles.
pub fn run_index<W: Write>(
    files: &[PathBuf],
    readme: &Path,
    print: bool,
    out: &mut W,
) -> Result<usize> {
    let articles = load_articles(files);
    tracing::info!(found = articles.len(), "Scanned articles");

    let section = render_section(&articles);
    if print {
        writeln!(out, "{section}")?;
        out.flush()?;
        return Ok(articles.len());
    }

    let current = read_document(readme)?;
    let updated = update_readme(&current, &section);
    std::fs::write(readme, updated)
        .map_err(|e| frontcheck_content::Error::io_with_path(e, readme))?;

    writeln!(out, "{} updated with {} article(s)", readme.display(), articles.len())?;
    writeln!(out, "Categories found:")?;
    for (category, count) in category_counts(&articles) {
        writeln!(out, "  - {category}: {count} article(s)")?;
    }
    out.flush()?;
    Ok(articles.len())
}
