//! Sampling configuration.
//!
//! Configuration is loaded from YAML:
//!
//! ```yaml
//! version: 1
//! seed: 42
//! filter:
//!   max_attempts: 1000
//! ```
//!
//! Every field is optional. Without a seed, sources are seeded from
//! entropy; without `max_attempts`, filters retry forever.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading config file
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Semantically invalid configuration
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// How many samples a filter may draw before giving up.
///
/// The default is unbounded: a filter whose predicate is never satisfied
/// keeps sampling forever.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Maximum number of samples, `None` for no limit
    #[serde(default)]
    pub max_attempts: Option<u64>,
}

impl RetryPolicy {
    /// Retry until the predicate accepts.
    pub fn unbounded() -> Self {
        Self { max_attempts: None }
    }

    /// Give up after `max_attempts` rejected samples.
    pub fn at_most(max_attempts: u64) -> Self {
        Self {
            max_attempts: Some(max_attempts),
        }
    }

    /// Whether `attempts` samples have used up the budget.
    pub fn is_exhausted(&self, attempts: u64) -> bool {
        self.max_attempts.is_some_and(|max| attempts >= max)
    }
}

fn default_version() -> u32 {
    1
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuzzConfig {
    /// Config format version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Seed for the random source
    #[serde(default)]
    pub seed: Option<u64>,

    /// Retry policy applied by filters built from this config
    #[serde(default)]
    pub filter: RetryPolicy,
}

impl Default for FuzzConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            seed: None,
            filter: RetryPolicy::default(),
        }
    }
}

impl FuzzConfig {
    /// Load config from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        tracing::debug!("Loaded config from {}", path.as_ref().display());
        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: FuzzConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.version != 1 {
            return Err(ConfigError::Invalid(format!(
                "unsupported version {}",
                self.version
            )));
        }
        if self.filter.max_attempts == Some(0) {
            return Err(ConfigError::Invalid(
                "filter.max_attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Override the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Override the filter retry policy.
    pub fn with_filter(mut self, filter: RetryPolicy) -> Self {
        self.filter = filter;
        self
    }
}
