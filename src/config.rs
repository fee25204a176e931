//! Configuration for the zcalc shell.
//!
//! Read from `<config_dir>/zcalc/config.toml` unless a path is given. Every
//! field has a default, so a missing file or a partial one is fine.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

const APP_DIR: &str = "zcalc";
const CONFIG_FILE: &str = "config.toml";
const LOG_FILE: &str = "zcalc.log";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Copy every result to the clipboard
    pub copy_result: bool,
    /// Log sink settings
    pub logging: LoggingConfig,
}

/// Log sink settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write a log file at all
    pub enabled: bool,
    /// Filter directive, e.g. `info` or `zcalc=debug`. `RUST_LOG` wins.
    pub level: String,
    /// Log file path; defaults to `<data_dir>/zcalc/zcalc.log`
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "info".to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// The log file to write, if one can be determined.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.file
            .clone()
            .or_else(|| dirs::data_dir().map(|dir| dir.join(APP_DIR).join(LOG_FILE)))
    }
}

impl Config {
    /// Default location of the config file.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Serialize configuration to TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load configuration from `path`.
    ///
    /// A missing file yields the defaults; an unreadable or malformed one is
    /// an error.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Load from `path` if given, otherwise from the default location.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => match Self::default_path() {
                Some(path) => Self::load_from(&path),
                None => Ok(Self::default()),
            },
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
        assert!(config.logging.enabled);
        assert_eq!(config.logging.level, "info");
        assert!(!config.copy_result);
    }

    #[test]
    fn test_partial_toml() {
        let config = Config::from_toml("copy_result = true\n[logging]\nlevel = \"debug\"\n").unwrap();
        assert!(config.copy_result);
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.enabled);
        assert_eq!(config.logging.file, None);
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = Config::default();
        config.logging.file = Some(PathBuf::from("/tmp/zcalc.log"));
        let parsed = Config::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_explicit_log_path() {
        let logging = LoggingConfig {
            file: Some(PathBuf::from("/var/log/zcalc.log")),
            ..LoggingConfig::default()
        };
        assert_eq!(logging.log_path(), Some(PathBuf::from("/var/log/zcalc.log")));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nenabled = false").unwrap();
        let config = Config::load(Some(file.path())).unwrap();
        assert!(!config.logging.enabled);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "copy_result = \"maybe\"").unwrap();
        assert!(Config::load_from(file.path()).is_err());
    }
}
