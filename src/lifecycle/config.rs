//! # Configuration
//!
//! [`CatalogConfig`] is read from TOML. Every section and key is optional; anything left out
//! takes the value from the embedded default below.
//!
//! ```toml
//! [actors]
//! buffer_size = 32
//!
//! [references]
//! strategy = "timestamp"   # or "uuid"
//! prefix = "REF"
//!
//! [logging]
//! filter = "info"          # RUST_LOG wins when set
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming a config file to load instead of the embedded default.
pub const CONFIG_ENV: &str = "CATALOG_CONFIG";

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[actors]
buffer_size = 32

[references]
strategy = "timestamp"
prefix = "REF"

[logging]
filter = "info"
"#;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub actors: ActorConfig,
    pub references: ReferenceConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ActorConfig {
    /// Capacity of each actor's request channel.
    pub buffer_size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceStrategy {
    #[default]
    Timestamp,
    Uuid,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReferenceConfig {
    pub strategy: ReferenceStrategy,
    pub prefix: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for ActorConfig {
    fn default() -> Self {
        Self { buffer_size: 32 }
    }
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            strategy: ReferenceStrategy::Timestamp,
            prefix: "REF".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl CatalogConfig {
    /// The configuration compiled into the binary.
    pub fn embedded() -> Self {
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.check()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Loads the file named by `CATALOG_CONFIG`, or the embedded default when it is unset.
    ///
    /// Runs before tracing is installed, so it does not log.
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(path),
            None => Ok(Self::embedded()),
        }
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.actors.buffer_size == 0 {
            return Err(ConfigError::Invalid(
                "actors.buffer_size must be greater than zero".to_string(),
            ));
        }
        if self.references.prefix.is_empty() {
            return Err(ConfigError::Invalid(
                "references.prefix cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<CatalogConfig, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.actors.buffer_size, 32);
        assert_eq!(config.references.strategy, ReferenceStrategy::Timestamp);
        assert_eq!(config.references.prefix, "REF");
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_embedded_matches_section_defaults() {
        assert_eq!(CatalogConfig::embedded(), CatalogConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = CatalogConfig::from_toml(
            r#"
            [references]
            strategy = "uuid"
            "#,
        )
        .unwrap();

        assert_eq!(config.references.strategy, ReferenceStrategy::Uuid);
        assert_eq!(config.references.prefix, "REF");
        assert_eq!(config.actors, ActorConfig::default());
    }

    #[test]
    fn test_rejects_zero_buffer() {
        let result = CatalogConfig::from_toml("[actors]\nbuffer_size = 0\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_unknown_strategy() {
        let result = CatalogConfig::from_toml("[references]\nstrategy = \"sequence\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = CatalogConfig::from_file("/nonexistent/catalog.toml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/catalog.toml"));
    }
}
