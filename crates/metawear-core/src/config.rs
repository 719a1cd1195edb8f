//! Encoder configuration.
//!
//! ```toml
//! # What to do when a field value does not fit its declared width:
//! # "reject" (default) fails the call, "truncate" keeps the low bytes.
//! overflow = "reject"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// What the encoder does with a value wider than its field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Fail with [`Error::EncodingOverflow`](crate::Error::EncodingOverflow).
    #[default]
    Reject,
    /// Keep the low bytes and log a warning.
    Truncate,
}

/// Encoder configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Overflow handling.
    pub overflow: OverflowPolicy,
}

impl EncoderConfig {
    /// Read a configuration file. Missing keys fall back to their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        debug!("Loaded encoder config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Write the configuration as TOML. The parent directory must exist.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        std::fs::write(path, toml::to_string(self)?).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Failure to read, parse or write an [`EncoderConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read or written.
    #[error("Cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The TOML is malformed or names an unknown overflow policy.
    #[error("Malformed encoder config: {0}")]
    Malformed(#[from] toml::de::Error),
    #[error("Cannot serialize encoder config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rejects() {
        assert_eq!(EncoderConfig::default().overflow, OverflowPolicy::Reject);
    }

    #[test]
    fn test_from_toml_str() {
        let config = EncoderConfig::from_toml_str("overflow = \"truncate\"").unwrap();
        assert_eq!(config.overflow, OverflowPolicy::Truncate);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = EncoderConfig::from_toml_str("").unwrap();
        assert_eq!(config, EncoderConfig::default());
    }

    #[test]
    fn test_unknown_policy_rejected() {
        let err = EncoderConfig::from_toml_str("overflow = \"wrap\"").unwrap_err();
        assert!(matches!(err, ConfigError::Malformed(_)));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("encoder.toml");

        let config = EncoderConfig {
            overflow: OverflowPolicy::Truncate,
        };
        config.save(&path).unwrap();

        let loaded = EncoderConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("missing.toml");

        let err = EncoderConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("missing.toml"));
    }

    #[test]
    fn test_load_invalid_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("bad.toml");
        std::fs::write(&path, "overflow = 3").unwrap();

        let err = EncoderConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Malformed(_)));
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("absent").join("encoder.toml");

        let err = EncoderConfig::default().save(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
