//! TOML configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "pharmacy-dwh.toml";

/// Runtime configuration. Every field has a default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Operational database
    pub source_path: PathBuf,
    /// Warehouse database
    pub warehouse_path: PathBuf,
    pub log_level: String,
    /// Fixed year for age computation; current year when unset
    pub reference_year: Option<i32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from("pharmacy_oltp.db"),
            warehouse_path: PathBuf::from("pharmacy_dwh.db"),
            log_level: "info".to_string(),
            reference_year: None,
        }
    }
}

impl Config {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid configuration")
    }

    /// Load from a file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Resolve the configuration for this invocation.
    ///
    /// An explicit path must exist. Without one, the default file is used when
    /// present and built-in defaults otherwise.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_PATH);
                if default.exists() {
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.source_path, PathBuf::from("pharmacy_oltp.db"));
        assert_eq!(config.warehouse_path, PathBuf::from("pharmacy_dwh.db"));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.reference_year, None);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            warehouse_path = "/data/dwh.db"
            reference_year = 2025
            "#,
        )
        .unwrap();
        assert_eq!(config.source_path, PathBuf::from("pharmacy_oltp.db"));
        assert_eq!(config.warehouse_path, PathBuf::from("/data/dwh.db"));
        assert_eq!(config.reference_year, Some(2025));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(Config::from_toml_str("sourec_path = \"typo.db\"").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_level = \"debug\"").unwrap();

        let config = Config::resolve(Some(file.path())).unwrap();
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(Config::resolve(Some(&missing)).is_err());
    }
}
