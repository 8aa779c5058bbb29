//! Aggregate results of a run.

use std::path::Path;

use crate::validate::{validate_file, Tag, Validation};

/// Ordered collection of per-file validations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    validations: Vec<Validation>,
}

impl Report {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a result.
    pub fn push(&mut self, validation: Validation) {
        self.validations.push(validation);
    }

    /// True when no file failed. An empty report is valid.
    pub fn all_valid(&self) -> bool {
        self.validations.iter().all(Validation::is_valid)
    }

    /// Number of files checked.
    pub fn len(&self) -> usize {
        self.validations.len()
    }

    /// Whether no files were checked.
    pub fn is_empty(&self) -> bool {
        self.validations.is_empty()
    }

    /// Number of results carrying `tag`.
    pub fn count(&self, tag: Tag) -> usize {
        self.validations.iter().filter(|v| v.tag() == tag).count()
    }

    /// Number of passing files.
    pub fn passed(&self) -> usize {
        self.validations.iter().filter(|v| v.is_valid()).count()
    }

    /// Number of failing files.
    pub fn failed(&self) -> usize {
        self.len() - self.passed()
    }

    /// Iterate results in the order they were added.
    pub fn iter(&self) -> std::slice::Iter<'_, Validation> {
        self.validations.iter()
    }

    /// One-line count summary.
    pub fn summary(&self) -> String {
        format!(
            "Checked {} file(s): {} passed, {} failed",
            self.len(),
            self.passed(),
            self.failed()
        )
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = &'a Validation;
    type IntoIter = std::slice::Iter<'a, Validation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Validation> for Report {
    fn from_iter<I: IntoIterator<Item = Validation>>(iter: I) -> Self {
        Self {
            validations: iter.into_iter().collect(),
        }
    }
}

/// Validate every path in order.
///
/// All paths are checked even after a failure.
pub fn check_files<I, P>(paths: I) -> Report
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    paths.into_iter().map(validate_file).collect()
}
