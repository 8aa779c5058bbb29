//! Reading document files.

use std::path::Path;

use crate::error::{Error, Result};

/// Read a whole document as UTF-8 text.
///
/// # Errors
///
/// Returns [`Error::Io`] naming `path` when the file cannot be opened or is
/// not valid UTF-8.
pub fn read_document(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.qmd");
        fs::write(&path, "---\na: 1\n---\n").unwrap();
        assert_eq!(read_document(&path).unwrap(), "---\na: 1\n---\n");
    }

    #[test]
    fn test_read_missing_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gone.qmd");
        let err = read_document(&path).unwrap_err();

        let Error::Io { path: failed, source } = err else {
            unreachable!("Expected Io error variant");
        };
        assert_eq!(failed, path);
        assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn test_read_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bin.qmd");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        let err = read_document(&path).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
