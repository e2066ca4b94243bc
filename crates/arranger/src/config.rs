//! Tournament settings loaded from a TOML file.

use serde::{Deserialize, Serialize};
use std::path::Path;

use bracket_core::MatchKind;
use thiserror::Error;

/// Failures while loading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("config is not valid TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Settings for a draw. Every field is optional in the file; missing
/// ones fall back to the defaults.
///
/// ```toml
/// title = "Spring Open 2026"
/// kind = "team"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrangeConfig {
    /// Title printed on sheets and reports.
    #[serde(default = "default_title")]
    pub title: String,
    /// Match format (individual or team).
    #[serde(default)]
    pub kind: MatchKind,
}

fn default_title() -> String {
    "Archery Tournament Bracket".to_string()
}

impl Default for ArrangeConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            kind: MatchKind::default(),
        }
    }
}

impl ArrangeConfig {
    /// Load settings from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }
}
