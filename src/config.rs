//! Runtime configuration.
//!
//! Settings come from an optional TOML file, then environment overrides,
//! then validation. Every key has a default, so an empty file (or no file)
//! is a valid configuration.
//!
//! ```toml
//! mailbox_size = 32
//! step_code_increment = 100
//! default_destination_code = 0
//! label_retry_limit = 10
//! default_page_size = 25
//! max_page_size = 100
//! allow_reset = false
//! log_format = "compact"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Names the TOML file to load.
pub const CONFIG_PATH_ENV: &str = "SHOPFLOOR_CONFIG";
pub const ALLOW_RESET_ENV: &str = "SHOPFLOOR_ALLOW_RESET";
pub const LOG_FORMAT_ENV: &str = "SHOPFLOOR_LOG_FORMAT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {name}: '{value}'")]
    InvalidEnv { name: &'static str, value: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Compact => write!(f, "compact"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err(ConfigError::InvalidEnv {
                name: LOG_FORMAT_ENV,
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShopConfig {
    /// Request channel capacity of every actor.
    pub mailbox_size: usize,
    /// First step code, and the gap between appended codes.
    pub step_code_increment: u32,
    /// Destination code for packing-slip lines whose item has no router.
    pub default_destination_code: u32,
    /// Label conflicts absorbed before a generated-label create fails.
    pub label_retry_limit: u32,
    pub default_page_size: usize,
    pub max_page_size: usize,
    /// Enables [`ShopSystem::reset`](crate::lifecycle::ShopSystem::reset).
    pub allow_reset: bool,
    pub log_format: LogFormat,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            mailbox_size: 32,
            step_code_increment: 100,
            default_destination_code: 0,
            label_retry_limit: 10,
            default_page_size: 25,
            max_page_size: 100,
            allow_reset: false,
            log_format: LogFormat::Compact,
        }
    }
}

impl ShopConfig {
    /// Loads the file named by `SHOPFLOOR_CONFIG` (defaults when unset),
    /// applies environment overrides and validates the result.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };
        config.apply_overrides(|name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Applies `SHOPFLOOR_*` overrides looked up through `lookup`.
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(value) = lookup(ALLOW_RESET_ENV) {
            self.allow_reset = match value.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(ConfigError::InvalidEnv {
                        name: ALLOW_RESET_ENV,
                        value,
                    })
                }
            };
        }
        if let Some(value) = lookup(LOG_FORMAT_ENV) {
            self.log_format = value.parse()?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // Midpoint insertion needs room between two appended codes.
        if self.step_code_increment < 2 {
            return Err(ConfigError::Invalid(
                "step_code_increment must be at least 2".into(),
            ));
        }
        if self.mailbox_size == 0 {
            return Err(ConfigError::Invalid("mailbox_size must be positive".into()));
        }
        if self.default_page_size == 0 || self.max_page_size == 0 {
            return Err(ConfigError::Invalid("page sizes must be positive".into()));
        }
        if self.default_page_size > self.max_page_size {
            return Err(ConfigError::Invalid(format!(
                "default_page_size {} exceeds max_page_size {}",
                self.default_page_size, self.max_page_size
            )));
        }
        Ok(())
    }
}
