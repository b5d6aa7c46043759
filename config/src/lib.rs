//! # Configuration Management for QueryHaus
//!
//! This crate provides the configuration structures shared by the driver
//! registry and the query drivers.
//!
//! ## Quick Start
//!
//! ### Programmatic Configuration
//! ```rust
//! use config::{BuilderConfig, EmptyClausePolicy};
//!
//! let builder_config = BuilderConfig::new("sql".to_string(), EmptyClausePolicy::KeywordOnlyIsUnset);
//! assert_eq!(builder_config.default_driver, "sql");
//! ```
//!
//! ### TOML File Configuration
//! ```toml
//! [builder]
//! default_driver = "sql"
//! empty_clause_policy = "keyword_only_is_set"
//! ```
//!
//! Load configuration:
//! ```rust,no_run
//! use config::AppConfig;
//!
//! // Load from queryhaus.toml (or the path in QUERYHAUS_CONFIG)
//! let config = AppConfig::load()?;
//!
//! // Or load from custom path
//! let config = AppConfig::from_file("config/production.toml")?;
//! # Ok::<(), config::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::{env, path::Path};
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "./queryhaus.toml";
const CONFIG_PATH_VAR: &str = "QUERYHAUS_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Environment variable error: {0}")]
    Env(#[from] env::VarError),
    #[error("Dotenvy error: {0}")]
    Dotenvy(#[from] dotenvy::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub builder: BuilderConfig,
}

/// How a clause set from an empty sequence (keyword with no operand) is treated.
///
/// `select(Vec::<&str>::new())` stores the bare fragment `SELECT`. Under
/// [`EmptyClausePolicy::KeywordOnlyIsSet`] that fragment counts as present
/// during validation and is emitted verbatim. Under
/// [`EmptyClausePolicy::KeywordOnlyIsUnset`] it counts as absent and is left
/// out of the generated statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyClausePolicy {
    #[default]
    KeywordOnlyIsSet,
    KeywordOnlyIsUnset,
}

/// Query builder configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuilderConfig {
    /// Driver key resolved by `QueryHaus::default_driver`
    #[serde(default = "default_driver_name")]
    pub default_driver: String,
    #[serde(default)]
    pub empty_clause_policy: EmptyClausePolicy,
}

fn default_driver_name() -> String {
    "sql".to_string()
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            default_driver: default_driver_name(),
            empty_clause_policy: EmptyClausePolicy::default(),
        }
    }
}

impl BuilderConfig {
    /// Create a new builder configuration
    pub fn new(default_driver: String, empty_clause_policy: EmptyClausePolicy) -> Self {
        Self {
            default_driver,
            empty_clause_policy,
        }
    }

    pub fn with_empty_clause_policy(mut self, policy: EmptyClausePolicy) -> Self {
        self.empty_clause_policy = policy;
        self
    }
}

impl AppConfig {
    /// Load configuration from the TOML file named in .env or the default path
    pub fn load() -> Result<Self, ConfigError> {
        if let Err(err) = dotenvy::dotenv() {
            // A missing .env file is fine, a malformed one is not
            if !err.not_found() {
                return Err(err.into());
            }
        }

        let config = match env::var(CONFIG_PATH_VAR) {
            Ok(config_path) => Self::from_file(&config_path),
            Err(env::VarError::NotPresent) if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(DEFAULT_CONFIG_PATH)
            }
            Err(env::VarError::NotPresent) => Err(ConfigError::Invalid(format!(
                "Config path must be specified in .env file as {} or in {} file",
                CONFIG_PATH_VAR, DEFAULT_CONFIG_PATH
            ))),
            Err(err) => Err(err.into()),
        }?;

        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML document
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if self.builder.default_driver.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "Builder default_driver cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
