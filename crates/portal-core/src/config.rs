//! Portal configuration
//!
//! Parsed from TOML. Every field has a default, so an empty document is a
//! valid config.

use serde::Deserialize;

use crate::catalog::ACCREDITATIONS_AUTONOMY_KEY;
use crate::errors::ConfigError;

/// Top-level portal configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PortalConfig {
    /// Catalog category rendered by the section
    pub category: String,
    /// Minimum log level for the browser console
    pub log_level: LogLevel,
    /// Viewport observer settings
    pub visibility: VisibilityConfig,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            category: ACCREDITATIONS_AUTONOMY_KEY.to_string(),
            log_level: LogLevel::default(),
            visibility: VisibilityConfig::default(),
        }
    }
}

impl PortalConfig {
    /// Parse a config from TOML source.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config = toml::from_str(source)?;
        Ok(config)
    }
}

/// Options passed to the viewport observer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VisibilityConfig {
    /// Fraction of the section that must be visible to fire
    pub threshold: f64,
    /// CSS margin applied to the viewport when intersecting
    pub root_margin: String,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
        }
    }
}

/// Log verbosity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Everything, including per-toggle traces
    Trace,
    /// Toggles and latch firing
    Debug,
    /// Startup and mount
    #[default]
    Info,
    /// Fallbacks
    Warn,
    /// Invariant violations only
    Error,
}
