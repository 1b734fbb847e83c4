//! YAML configuration file support.
//!
//! The whole matching policy (scoring weights, thresholds, time tiers and
//! the keyword tables) can live in one YAML file and be loaded at startup.
//! Every section and field is optional; anything left out takes the
//! built-in default.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "main campus"
//!
//! matcher:
//!   min_score: 0.45
//!   max_results: 20
//!   use_parallel: true
//!   weights:
//!     category: 0.20
//!     item_name: 0.35
//!     location: 0.20
//!     description: 0.15
//!     time: 0.10
//!   time_tiers:
//!     - { max_days: 1, score: 1.0 }
//!     - { max_days: 3, score: 0.8 }
//!     - { max_days: 7, score: 0.5 }
//!     - { max_days: 14, score: 0.2 }
//!
//! lexicon:
//!   same_area_score: 0.9
//!   brands: ["apple", "samsung", "xiaomi"]
//! ```

use std::fs;
use std::path::Path;

use lexicon::LexiconConfig;
use matcher::{MatchConfig, MatchEngine};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Errors that can occur when loading YAML configuration files.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration for the matching engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct LostFoundConfig {
    /// Configuration format version
    #[serde(default = "default_format_version")]
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    /// Scoring, filtering and ranking policy
    #[serde(default)]
    pub matcher: MatchConfig,

    /// Keyword tables for categories, areas, brands and colors
    #[serde(default)]
    pub lexicon: LexiconConfig,
}

impl LostFoundConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_yaml(&content)?;
        info!(
            path = %path.display(),
            name = ?config.name,
            "config_loaded"
        );
        Ok(config)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: LostFoundConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to YAML, e.g. to dump the effective defaults.
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.matcher
            .validate()
            .map_err(|err| ConfigLoadError::Validation(format!("matcher: {err}")))?;
        self.lexicon
            .validate()
            .map_err(|err| ConfigLoadError::Validation(format!("lexicon: {err}")))?;

        Ok(())
    }

    /// Build a ready-to-use engine from this configuration.
    pub fn build_engine(&self) -> Result<MatchEngine, ConfigLoadError> {
        MatchEngine::from_configs(self.matcher.clone(), &self.lexicon)
            .map_err(|err| ConfigLoadError::Validation(err.to_string()))
    }
}

impl Default for LostFoundConfig {
    fn default() -> Self {
        Self {
            version: default_format_version(),
            name: None,
            matcher: MatchConfig::default(),
            lexicon: LexiconConfig::default(),
        }
    }
}

fn default_format_version() -> String {
    "1.0".to_string()
}
