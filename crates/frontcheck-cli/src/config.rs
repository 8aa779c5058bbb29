//! Optional TOML configuration.
//!
//! Every field has a default, so running without a config file is the
//! same as loading an empty one:
//!
//! ```toml
//! quiet = false
//! summary = false
//! log_level = "warn"
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing_subscriber::filter::LevelFilter;

use crate::error::{Error, Result};

/// Log level used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Settings read from a `--config` file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckConfig {
    /// Print only failing status lines.
    pub quiet: bool,
    /// Print a count summary after the status lines.
    pub summary: bool,
    /// Default log filter level (`error`, `warn`, `info`, `debug`, `trace`, `off`).
    pub log_level: String,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            summary: false,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl CheckConfig {
    /// Load configuration from `path`, or return defaults when `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read {}: {e}", path.display())))?;
        Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, String> {
        let config: Self = toml::from_str(content).map_err(|e| e.to_string())?;
        config
            .log_level
            .parse::<LevelFilter>()
            .map_err(|_| format!("invalid log_level '{}'", config.log_level))?;
        Ok(config)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_without_path_is_default() {
        let config = CheckConfig::load(None).unwrap();
        assert_eq!(config, CheckConfig::default());
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(
            CheckConfig::from_toml_str("").unwrap(),
            CheckConfig::default()
        );
    }

    #[test]
    fn test_partial_toml() {
        let config = CheckConfig::from_toml_str("summary = true\n").unwrap();
        assert!(config.summary);
        assert!(!config.quiet);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = CheckConfig::from_toml_str("colour = true\n").unwrap_err();
        assert!(err.contains("colour"));
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let err = CheckConfig::from_toml_str("log_level = \"loud\"\n").unwrap_err();
        assert!(err.contains("loud"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("frontcheck.toml");
        fs::write(&path, "quiet = true\nlog_level = \"debug\"\n").unwrap();

        let config = CheckConfig::load(Some(&path)).unwrap();
        assert!(config.quiet);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.toml");
        let err = CheckConfig::load(Some(&path)).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn test_load_bad_toml_names_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "quiet = = true\n").unwrap();

        let err = CheckConfig::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
        assert!(err.to_string().contains("broken.toml"));
    }
}
