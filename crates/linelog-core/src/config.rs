//! Logger configuration files (YAML)
//!
//! Supports a user-level config at `<config dir>/linelog/config.yaml` or any
//! explicit path. A missing file yields the defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LogError, LogResult};
use crate::format::FormatOptions;
use crate::logger::Logger;

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoggerConfig {
    /// Destination log file; absent means standard-stream routing
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Rendering stage flags
    #[serde(default)]
    pub format: FormatOptions,
}

impl LoggerConfig {
    /// Path of the user-level config file
    pub fn user_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config")
        });
        config_dir.join("linelog").join("config.yaml")
    }

    /// Load from an explicit path; a missing file is the default config
    pub fn load(path: impl AsRef<Path>) -> LogResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| LogError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        serde_yaml::from_str(&content)
            .map_err(|e| LogError::Config(format!("failed to parse YAML: {}", e)))
    }

    /// Load the user-level config
    pub fn load_user() -> LogResult<Self> {
        Self::load(Self::user_path())
    }

    /// Save to an explicit path, creating parent directories as needed
    pub fn save(&self, path: impl AsRef<Path>) -> LogResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| LogError::Config(format!("cannot create {}: {}", parent.display(), e)))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| LogError::Config(format!("failed to serialize YAML: {}", e)))?;
        fs::write(path, content)
            .map_err(|e| LogError::Config(format!("cannot write {}: {}", path.display(), e)))
    }

    /// Construct a logger per this config
    pub fn build(&self) -> LogResult<Logger> {
        let logger = match &self.file {
            Some(path) => Logger::with_file(path)?,
            None => Logger::new(),
        };
        logger.set_output_format(self.format);
        Ok(logger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_defaults() {
        let dir = tempdir().unwrap();
        let config = LoggerConfig::load(dir.path().join("absent.yaml")).unwrap();
        assert!(config.file.is_none());
        assert_eq!(config.format, FormatOptions::default());
    }

    #[test]
    fn test_load_and_build() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("out.log");
        let config_path = dir.path().join("config.yaml");

        let yaml = format!(
            "file: {}\nformat:\n  timestamp: false\n  severity_symbol: false\n",
            log_path.display()
        );
        fs::write(&config_path, yaml).unwrap();

        let config = LoggerConfig::load(&config_path).unwrap();
        assert_eq!(config.file.as_deref(), Some(log_path.as_path()));
        assert!(!config.format.timestamp);
        assert!(config.format.message);

        let logger = config.build().unwrap();
        logger.info("configured").unwrap();
        assert_eq!(fs::read_to_string(&log_path).unwrap(), "configured\n");
    }

    #[test]
    fn test_save_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let config = LoggerConfig {
            file: Some(PathBuf::from("/tmp/app.log")),
            format: FormatOptions::default().with_severity_text(true),
        };
        config.save(&path).unwrap();

        let loaded = LoggerConfig::load(&path).unwrap();
        assert_eq!(loaded.file, config.file);
        assert_eq!(loaded.format, config.format);
    }

    #[test]
    fn test_malformed_yaml_is_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "file: [not, a, path").unwrap();

        let result = LoggerConfig::load(&path);
        assert!(matches!(result, Err(LogError::Config(_))));
    }
}
