//! Expansion State Controller
//!
//! Tracks which entries currently show their document panel. The state is a
//! plain value owned by whoever renders the section, so two mounted sections
//! never see each other's toggles.

use std::collections::HashSet;

use crate::input::Activation;

/// Set of entry ids whose document panel is expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: HashSet<String>,
}

impl ExpansionState {
    /// Empty state: every entry collapsed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the expansion of `id` and return its new state.
    ///
    /// Ids outside the catalog are accepted; nothing renders for them.
    pub fn toggle(&mut self, id: &str) -> bool {
        let expanded = if self.expanded.remove(id) {
            false
        } else {
            self.expanded.insert(id.to_string())
        };
        tracing::debug!(id, expanded, "toggled entry");
        expanded
    }

    /// Apply a click or key activation to `id`. Both have the same effect.
    pub fn activate(&mut self, id: &str, activation: Activation) -> bool {
        tracing::trace!(id, ?activation, "entry activated");
        self.toggle(id)
    }

    /// Whether `id` currently shows its document panel.
    #[must_use]
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }
}
