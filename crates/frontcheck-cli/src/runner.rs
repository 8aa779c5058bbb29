//! Check a list of files and print one status line per file.

use std::io::Write;
use std::path::PathBuf;

use frontcheck_content::{validate_file, Report};

use crate::cli::Args;
use crate::config::CheckConfig;
use crate::error::Result;

/// Printed on stdout when no files are given.
pub const USAGE: &str = "Usage: frontcheck <file1.qmd> <file2.qmd> ...";

/// Every file passed.
pub const EXIT_SUCCESS: u8 = 0;
/// At least one file failed, or no files were given.
pub const EXIT_FAILURE: u8 = 1;
/// The tool itself failed (bad config, unwritable output).
pub const EXIT_TOOL_ERROR: u8 = 2;

/// Effective settings after merging flags over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Suppress passing status lines
    pub quiet: bool,
    /// Print the summary line
    pub summary: bool,
    /// Default log filter
    pub log_level: String,
}

impl Options {
    /// Merge command-line flags over `config`. Flags only ever switch on.
    pub fn resolve(args: &Args, config: &CheckConfig) -> Self {
        let log_level = if args.verbose {
            "debug".to_string()
        } else {
            config.log_level.clone()
        };
        Self {
            quiet: args.quiet || config.quiet,
            summary: args.summary || config.summary,
            log_level,
        }
    }
}

/// Validate `files` in order, writing status lines to `out` as they finish.
///
/// Every file is checked regardless of earlier failures. Only a failure
/// to write output is returned as an error.
pub fn run<W: Write>(files: &[PathBuf], options: &Options, out: &mut W) -> Result<Report> {
    let mut report = Report::new();

    for path in files {
        let validation = validate_file(path);
        if !validation.is_valid() {
            tracing::debug!(path = %path.display(), tag = %validation.tag(), "File failed");
        }
        if !(options.quiet && validation.is_valid()) {
            writeln!(out, "{validation}")?;
        }
        report.push(validation);
    }

    if options.summary {
        writeln!(out, "{}", report.summary())?;
    }
    out.flush()?;

    tracing::info!(
        checked = report.len(),
        failed = report.failed(),
        "Frontmatter check complete"
    );
    Ok(report)
}

/// Process exit code for a finished run.
pub fn exit_code(report: &Report) -> u8 {
    if report.all_valid() {
        EXIT_SUCCESS
    } else {
        EXIT_FAILURE
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn plain() -> Options {
        Options::resolve(&Args::default(), &CheckConfig::default())
    }

    fn fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn run_to_string(files: &[PathBuf], options: &Options) -> (Report, String) {
        let mut out = Vec::new();
        let report = run(files, options, &mut out).unwrap();
        (report, String::from_utf8(out).unwrap())
    }

    // ------------------------------------------------------------------------
    // Options
    // ------------------------------------------------------------------------

    #[test]
    fn test_resolve_defaults() {
        let options = plain();
        assert!(!options.quiet);
        assert!(!options.summary);
        assert_eq!(options.log_level, "warn");
    }

    #[test]
    fn test_resolve_flags_override_config() {
        let args = Args {
            quiet: true,
            verbose: true,
            ..Args::default()
        };
        let config = CheckConfig {
            summary: true,
            log_level: "error".to_string(),
            ..CheckConfig::default()
        };
        let options = Options::resolve(&args, &config);
        assert!(options.quiet);
        assert!(options.summary);
        assert_eq!(options.log_level, "debug");
    }

    // ------------------------------------------------------------------------
    // run
    // ------------------------------------------------------------------------

    #[test]
    fn test_run_prints_one_line_per_file() {
        let dir = TempDir::new().unwrap();
        let good = fixture(&dir, "good.qmd", "---\na: 1\n---\n");
        let open = fixture(&dir, "open.qmd", "---\na: 1\n");

        let (report, out) = run_to_string(&[good.clone(), open.clone()], &plain());

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            format!("  [PASS] Valid YAML frontmatter in {}", good.display())
        );
        assert_eq!(
            lines[1],
            format!("  [WARN] Invalid frontmatter structure in {}", open.display())
        );
        assert_eq!(exit_code(&report), EXIT_FAILURE);
    }

    #[test]
    fn test_run_all_valid_exits_zero() {
        let dir = TempDir::new().unwrap();
        let files = vec![
            fixture(&dir, "a.qmd", "---\ntitle: A\n---\nBody\n"),
            fixture(&dir, "b.md", "# No frontmatter\n"),
        ];
        let (report, out) = run_to_string(&files, &plain());
        assert_eq!(out.lines().count(), 2);
        assert_eq!(exit_code(&report), EXIT_SUCCESS);
    }

    #[test]
    fn test_run_quiet_hides_passing_lines() {
        let dir = TempDir::new().unwrap();
        let files = vec![
            fixture(&dir, "a.qmd", "---\na: 1\n---\n"),
            fixture(&dir, "b.qmd", "---\nkey: [unclosed\n---\n"),
            fixture(&dir, "c.md", "text"),
        ];
        let options = Options {
            quiet: true,
            ..plain()
        };
        let (report, out) = run_to_string(&files, &options);

        assert_eq!(out.lines().count(), 1);
        assert!(out.starts_with("  [FAIL] "));
        assert_eq!(report.len(), 3);
    }

    #[test]
    fn test_run_summary_line() {
        let dir = TempDir::new().unwrap();
        let files = vec![
            fixture(&dir, "a.qmd", "---\na: 1\n---\n"),
            dir.path().join("missing.qmd"),
        ];
        let options = Options {
            summary: true,
            ..plain()
        };
        let (_, out) = run_to_string(&files, &options);

        let last = out.lines().last().unwrap();
        assert_eq!(last, "Checked 2 file(s): 1 passed, 1 failed");
    }

    #[test]
    fn test_run_mixed_statuses_keeps_going() {
        let dir = TempDir::new().unwrap();
        let files = vec![
            fixture(&dir, "open.qmd", "---\na: 1\n"),
            fixture(&dir, "tagged.qmd", "---\na: !custom x\n---\n"),
            dir.path().join("missing.qmd"),
            fixture(&dir, "good.qmd", "---\na: 1\na: 2\n---\n"),
        ];
        let (report, out) = run_to_string(&files, &plain());

        let tags: Vec<&str> = out.lines().map(|l| &l[..9]).collect();
        assert_eq!(tags, ["  [WARN] ", "  [FAIL] ", "  [ERROR]", "  [PASS] "]);
        assert_eq!(report.passed(), 1);
        assert_eq!(exit_code(&report), EXIT_FAILURE);
    }

    #[test]
    fn test_exit_code_empty_report() {
        assert_eq!(exit_code(&Report::new()), EXIT_SUCCESS);
    }
}
