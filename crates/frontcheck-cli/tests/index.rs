//! End-to-end tests for the `frontcheck-index` binary.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn frontcheck_index() -> Command {
    let mut cmd = Command::cargo_bin("frontcheck-index").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn no_arguments_prints_usage_and_fails() {
    frontcheck_index()
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Usage: frontcheck-index"));
}

#[test]
fn print_renders_section() {
    let dir = TempDir::new().unwrap();
    let article = fixture(
        &dir,
        "tech-stack.qmd",
        "---\ntitle: Our Stack\nsubtitle: What we run\n---\n",
    );

    frontcheck_index()
        .arg("--print")
        .arg(&article)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "### Infrastructure & Development\n\n- [Our Stack](",
        ))
        .stdout(predicate::str::contains(") - What we run\n"));
}

#[test]
fn readme_section_is_inserted_before_adding_articles() {
    let dir = TempDir::new().unwrap();
    let readme = fixture(
        &dir,
        "README.md",
        "# Docs\n\n## Adding New Articles\n\nCopy a template.\n",
    );
    let article = fixture(&dir, "faq.md", "# FAQ\n\nCommon questions.\n");

    frontcheck_index()
        .arg("--readme")
        .arg(&readme)
        .arg(&article)
        .assert()
        .success()
        .stdout(predicate::str::contains("  - Other: 1 article(s)"));

    let text = fs::read_to_string(&readme).unwrap();
    let docs = text.find("## Documentation").unwrap();
    let adding = text.find("## Adding New Articles").unwrap();
    assert!(docs < adding);
    assert!(text.contains(" - Common questions.\n"));
}

#[test]
fn missing_readme_is_a_tool_error() {
    let dir = TempDir::new().unwrap();
    let article = fixture(&dir, "a.md", "# A\n");

    frontcheck_index()
        .arg("--readme")
        .arg(dir.path().join("README.md"))
        .arg(&article)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("README.md"));
}
