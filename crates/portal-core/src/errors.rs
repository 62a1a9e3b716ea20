//! Error types for the portal
//!
//! UI operations (toggling, observing) are total and never fail. Errors only
//! arise at the edges: looking up a category, checking catalog invariants and
//! parsing configuration.

use thiserror::Error;

/// Errors raised when reading or checking the static catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No category is registered under the requested key.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// Two entries share an identifier.
    #[error("duplicate entry id: {0}")]
    DuplicateId(String),

    /// An entry has an empty identifier.
    #[error("entry with empty id")]
    EmptyId,
}

/// Errors raised while loading [`PortalConfig`](crate::config::PortalConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML source could not be parsed into a config.
    #[error("failed to parse portal config: {0}")]
    Parse(#[from] toml::de::Error),
}
