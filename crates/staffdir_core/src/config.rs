//! Core configuration.
//!
//! # Responsibility
//! - Collect logging, seeding and validation settings from JSON or env.
//! - Reject unusable settings before any component is built.
//!
//! # Invariants
//! - Every field has a default, so partial sources are valid.

use crate::logging::{default_log_level, normalize_level};
use crate::validation::employee_rules::{EmployeeValidator, DEFAULT_POSTAL_CODE_PATTERN};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const ENV_LOG_LEVEL: &str = "STAFFDIR_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "STAFFDIR_LOG_DIR";
pub const ENV_SEED: &str = "STAFFDIR_SEED";
pub const ENV_POSTAL_CODE_PATTERN: &str = "STAFFDIR_POSTAL_CODE_PATTERN";

/// Configuration error.
#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(serde_json::Error),
    InvalidLogLevel(String),
    InvalidFlag { name: &'static str, value: String },
    InvalidPostalCodePattern { pattern: String, message: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config JSON: {err}"),
            Self::InvalidLogLevel(level) => write!(f, "unsupported log level `{level}`"),
            Self::InvalidFlag { name, value } => {
                write!(f, "{name} must be a boolean flag, got `{value}`")
            }
            Self::InvalidPostalCodePattern { pattern, message } => {
                write!(f, "invalid postal code pattern `{pattern}`: {message}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Settings for one directory instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// trace|debug|info|warn|error.
    pub log_level: String,
    /// File logging is only started when this is set.
    pub log_dir: Option<PathBuf>,
    /// Preload the demo employee set.
    pub seed_demo_data: bool,
    /// Postal code rule, matched against the whole code.
    pub postal_code_pattern: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
            seed_demo_data: false,
            postal_code_pattern: DEFAULT_POSTAL_CODE_PATTERN.to_string(),
        }
    }
}

impl CoreConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Defaults overridden by `STAFFDIR_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            config.log_level = level;
        }
        if let Some(dir) = lookup(ENV_LOG_DIR).filter(|dir| !dir.trim().is_empty()) {
            config.log_dir = Some(PathBuf::from(dir.trim()));
        }
        if let Some(flag) = lookup(ENV_SEED) {
            config.seed_demo_data = parse_flag(ENV_SEED, &flag)?;
        }
        if let Some(pattern) = lookup(ENV_POSTAL_CODE_PATTERN) {
            config.postal_code_pattern = pattern;
        }
        Ok(config)
    }

    /// Checks the log level and compiles the postal code rule.
    pub fn validate(&self) -> Result<(), ConfigError> {
        normalize_level(&self.log_level)
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))?;
        self.employee_validator().map(|_| ())
    }

    /// Builds the structural validator described by this config.
    pub fn employee_validator(&self) -> Result<EmployeeValidator, ConfigError> {
        EmployeeValidator::with_postal_code_pattern(&self.postal_code_pattern).map_err(|err| {
            ConfigError::InvalidPostalCodePattern {
                pattern: self.postal_code_pattern.clone(),
                message: err.to_string(),
            }
        })
    }
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: value.to_string(),
        }),
    }
}
