//! Configuration types for objc-lint.

use crate::origin::{OriginFilter, DEFAULT_SYSTEM_PREFIX};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration for objc-lint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Origin filter configuration.
    #[serde(default)]
    pub origin: OriginConfig,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Serializes the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize {
            message: e.to_string(),
        })
    }

    /// Builds the origin filter described by this configuration.
    #[must_use]
    pub fn origin_filter(&self) -> OriginFilter {
        OriginFilter::new(self.origin.system_prefix.clone())
    }
}

/// Origin filter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginConfig {
    /// Path prefix of toolchain-owned sources (SDK headers, compiler resources).
    #[serde(default = "default_system_prefix")]
    pub system_prefix: PathBuf,
}

impl Default for OriginConfig {
    fn default() -> Self {
        Self {
            system_prefix: default_system_prefix(),
        }
    }
}

fn default_system_prefix() -> PathBuf {
    PathBuf::from(DEFAULT_SYSTEM_PREFIX)
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// The configuration could not be written as TOML.
    #[error("Failed to serialize config: {message}")]
    Serialize {
        /// Serialization error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(
            config.origin.system_prefix,
            PathBuf::from("/Applications/Xcode.app/")
        );
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[origin]
system_prefix = "/Library/Developer/CommandLineTools/"
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        let filter = config.origin_filter();
        assert!(!filter.is_user_code(Path::new(
            "/Library/Developer/CommandLineTools/usr/include/stdio.h"
        )));
        assert!(filter.is_user_code(Path::new("/Applications/Xcode.app/Foo.h")));
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = Config::parse("").expect("Failed to parse");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let err = Config::parse("[origin\nsystem_prefix = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_serialize_error_is_distinct_from_parse() {
        let err = ConfigError::Serialize {
            message: "unsupported value".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to serialize config: unsupported value");
        assert!(!matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = Config::default();
        let text = config.to_toml().expect("serializes");
        assert!(text.contains("system_prefix"));
        assert_eq!(Config::parse(&text).expect("parses"), config);
    }
}
