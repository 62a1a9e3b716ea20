//! # Portal Core
//!
//! Portable state and data for the accreditation portal section.
//!
//! Everything here is free of browser types so it can be tested natively:
//! - [`catalog`]: the static accreditation and autonomy-certificate store
//! - [`expansion`]: which entries currently show their document panel
//! - [`visibility`]: the one-shot latch gating entrance animations
//! - [`input`]: pointer and keyboard activation contract
//! - [`view`]: flattened render models and class helpers
//! - [`config`]: TOML configuration
//!
//! The browser frontend (`portal-web`) wires these into Leptos components.

pub mod catalog;
pub mod config;
pub mod errors;
pub mod expansion;
pub mod input;
pub mod view;
pub mod visibility;

pub use catalog::{AccreditationItem, AutonomyItem, CategoryData, DocumentFile};
pub use config::{LogLevel, PortalConfig, VisibilityConfig};
pub use errors::{CatalogError, ConfigError};
pub use expansion::ExpansionState;
pub use input::Activation;
pub use view::{EntryKind, EntryModel, SectionModel};
pub use visibility::VisibilityLatch;
