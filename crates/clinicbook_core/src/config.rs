//! Core runtime configuration.
//!
//! # Responsibility
//! - Describe logging and storage settings for an embedding binary.
//! - Load them from an optional JSON file with documented defaults.
//!
//! # Invariants
//! - A missing config file yields `CoreConfig::default()`.
//! - Loaded configs are validated before being returned.

use crate::logging::default_log_level;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const DEFAULT_DATA_PATH: &str = "data/clinicbook.sqlite3";

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(serde_json::Error),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config json: {err}"),
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Settings consumed by `init_logging` and the storage adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoreConfig {
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
    /// Absolute directory for rolling log files. Logging stays off when unset.
    pub log_dir: Option<PathBuf>,
    /// Registry database file.
    pub data_path: PathBuf,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
        }
    }
}

impl CoreConfig {
    /// Loads config from `path`, falling back to defaults when it is absent.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(raw) => Self::from_json_str(&raw),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn from_json_str(raw: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::Invalid("log_level cannot be blank".to_string()));
        }
        if self.data_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("data_path cannot be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, CoreConfig};

    #[test]
    fn partial_json_keeps_defaults_for_missing_fields() {
        let config = CoreConfig::from_json_str(r#"{ "log_level": "warn" }"#).unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.data_path, CoreConfig::default().data_path);
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn blank_level_is_rejected() {
        let err = CoreConfig::from_json_str(r#"{ "log_level": "  " }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = CoreConfig::from_json_str(r#"{ "colour": "blue" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
