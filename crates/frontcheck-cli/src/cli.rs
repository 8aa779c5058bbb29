//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// frontcheck - check that YAML frontmatter blocks parse
#[derive(Parser, Debug, Default)]
#[command(name = "frontcheck")]
#[command(author, version, about = "Check that YAML frontmatter blocks in documents parse", long_about = None)]
pub struct Args {
    /// Files to check
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Only print failing files
    #[arg(short, long)]
    pub quiet: bool,

    /// Print a count summary at the end
    #[arg(short, long)]
    pub summary: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// frontcheck-index - rebuild the README documentation section
#[derive(Parser, Debug)]
#[command(name = "frontcheck-index")]
#[command(author, version, about = "Rebuild the documentation index in a README from article frontmatter", long_about = None)]
pub struct IndexArgs {
    /// Articles to index (`.md` and `.qmd`; other files are skipped)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// README to update
    #[arg(short, long, value_name = "PATH", default_value = "README.md")]
    pub readme: PathBuf,

    /// Print the generated section instead of writing the README
    #[arg(short, long)]
    pub print: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
