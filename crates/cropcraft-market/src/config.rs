//! Configuration loading and typed config structures for the market engine.
//!
//! The configuration lives in a YAML file (conventionally
//! `cropcraft-config.yaml`). Every field is optional and defaults to the
//! values the shop has always used: a stock ceiling of 20, bulk quantities of
//! 1 and 10, and the `SFL` currency label.

use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::stock::DEFAULT_STOCK_CEILING;

/// Environment variable that overrides `logging.level`.
pub const LOG_LEVEL_ENV: &str = "CROPCRAFT_LOG_LEVEL";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// The file parsed but holds an unusable value.
    #[error("invalid config value for {field}: {reason}")]
    Invalid {
        /// Dotted path of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CropcraftConfig {
    /// Shop behavior.
    #[serde(default)]
    pub market: MarketConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CropcraftConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `CROPCRAFT_LOG_LEVEL` overrides `logging.level`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.market.validate()?;
        config.logging.apply_env_overrides();
        Ok(config)
    }
}

/// Shop behavior.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MarketConfig {
    /// Stock assumed for items missing from the stock table.
    #[serde(default = "default_stock_ceiling")]
    pub default_stock_ceiling: Decimal,

    /// Quantities offered by a picker in bulk display mode.
    #[serde(default = "default_bulk_quantities")]
    pub bulk_quantities: Vec<u32>,

    /// Currency prefix used in balance debit notifications.
    #[serde(default = "default_currency_label")]
    pub currency_label: String,
}

impl MarketConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.default_stock_ceiling < Decimal::ZERO {
            return Err(ConfigError::Invalid {
                field: "market.default_stock_ceiling",
                reason: format!("must not be negative, got {}", self.default_stock_ceiling),
            });
        }
        if self.bulk_quantities.is_empty() {
            return Err(ConfigError::Invalid {
                field: "market.bulk_quantities",
                reason: String::from("must list at least one quantity"),
            });
        }
        if self.bulk_quantities.contains(&0) {
            return Err(ConfigError::Invalid {
                field: "market.bulk_quantities",
                reason: String::from("quantities must be at least 1"),
            });
        }
        Ok(())
    }
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            default_stock_ceiling: default_stock_ceiling(),
            bulk_quantities: default_bulk_quantities(),
            currency_label: default_currency_label(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl LoggingConfig {
    /// Apply the `CROPCRAFT_LOG_LEVEL` override, if set.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var(LOG_LEVEL_ENV) {
            self.level = val;
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

const fn default_stock_ceiling() -> Decimal {
    DEFAULT_STOCK_CEILING
}

fn default_bulk_quantities() -> Vec<u32> {
    vec![1, 10]
}

fn default_currency_label() -> String {
    String::from("SFL")
}

fn default_log_level() -> String {
    String::from("info")
}
