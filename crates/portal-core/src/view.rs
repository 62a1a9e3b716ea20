//! Render models for the document-list section
//!
//! Flattens a [`CategoryData`] into the per-entry values the frontend needs
//! (ids, labels, panel anchors, stagger delays) and holds the class choices
//! that depend on expansion or visibility state.

use crate::catalog::{CategoryData, DocumentFile};

/// Stagger between consecutive entry entrance animations.
pub const ENTRANCE_STAGGER_MS: u32 = 100;

/// DOM id of the document panel controlled by entry `id`.
#[must_use]
pub fn panel_id(id: &str) -> String {
    format!("content-{id}")
}

/// Classes for the toggle affordance icon. Rotated while expanded.
#[must_use]
pub fn affordance_class(expanded: bool) -> &'static str {
    if expanded {
        "w-5 h-5 transition-transform duration-300 rotate-45"
    } else {
        "w-5 h-5 transition-transform duration-300"
    }
}

/// Classes for a document panel.
#[must_use]
pub fn panel_class(expanded: bool) -> &'static str {
    if expanded {
        "bg-white dark:bg-dark-800 transition-all duration-300 overflow-hidden max-h-96 opacity-100"
    } else {
        "bg-white dark:bg-dark-800 transition-all duration-300 overflow-hidden max-h-0 opacity-0"
    }
}

/// Pick the revealed or hidden animation classes for a section block.
#[must_use]
pub fn reveal_class(visible: bool, shown: &'static str, hidden: &'static str) -> &'static str {
    if visible {
        shown
    } else {
        hidden
    }
}

// ============================================================================
// Section Model
// ============================================================================

/// Which list an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Dated NBA accreditation
    Accreditation,
    /// University autonomy letter
    Autonomy,
}

/// One renderable entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryModel {
    /// Catalog id, also the expansion-set key
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Issue date, accreditations only
    pub date: Option<&'static str>,
    /// Download links for the panel
    pub documents: &'static [DocumentFile],
    /// Source list
    pub kind: EntryKind,
    /// Entrance animation delay
    pub delay_ms: u32,
}

impl EntryModel {
    /// DOM id of this entry's document panel.
    #[must_use]
    pub fn panel_id(&self) -> String {
        panel_id(self.id)
    }
}

/// A category flattened for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionModel {
    /// Panel heading
    pub title: &'static str,
    /// Panel subheading
    pub description: &'static str,
    /// Accreditation entries in catalog order
    pub accreditations: Vec<EntryModel>,
    /// Autonomy entries in catalog order, staggered after accreditations
    pub autonomy_certificates: Vec<EntryModel>,
}

impl SectionModel {
    /// Build the render model for a category.
    #[must_use]
    pub fn from_category(category: &CategoryData) -> Self {
        let accreditations: Vec<EntryModel> = category
            .accreditations()
            .iter()
            .zip(0u32..)
            .map(|(item, index)| EntryModel {
                id: item.id,
                name: item.name,
                date: Some(item.date),
                documents: item.documents,
                kind: EntryKind::Accreditation,
                delay_ms: index * ENTRANCE_STAGGER_MS,
            })
            .collect();

        let offset = accreditations.len() as u32;
        let autonomy_certificates = category
            .autonomy_certificates()
            .iter()
            .zip(offset..)
            .map(|(item, index)| EntryModel {
                id: item.id,
                name: item.name,
                date: None,
                documents: item.documents,
                kind: EntryKind::Autonomy,
                delay_ms: index * ENTRANCE_STAGGER_MS,
            })
            .collect();

        Self {
            title: category.title,
            description: category.description,
            accreditations,
            autonomy_certificates,
        }
    }

    /// All entries in render order.
    pub fn entries(&self) -> impl Iterator<Item = &EntryModel> {
        self.accreditations
            .iter()
            .chain(self.autonomy_certificates.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ACCREDITATIONS_AUTONOMY;

    #[test]
    fn test_section_counts() {
        let model = SectionModel::from_category(&ACCREDITATIONS_AUTONOMY);
        assert_eq!(model.accreditations.len(), 5);
        assert_eq!(model.autonomy_certificates.len(), 2);
        assert!(model.entries().all(|entry| entry.documents.len() == 1));
    }

    #[test]
    fn test_delays_continue_across_lists() {
        let model = SectionModel::from_category(&ACCREDITATIONS_AUTONOMY);
        let delays: Vec<u32> = model.entries().map(|entry| entry.delay_ms).collect();
        assert_eq!(delays, vec![0, 100, 200, 300, 400, 500, 600]);
    }

    #[test]
    fn test_dates_only_on_accreditations() {
        let model = SectionModel::from_category(&ACCREDITATIONS_AUTONOMY);
        assert_eq!(model.accreditations[0].date, Some("4/2/2025"));
        assert!(model.autonomy_certificates.iter().all(|e| e.date.is_none()));
        assert!(model
            .autonomy_certificates
            .iter()
            .all(|e| e.kind == EntryKind::Autonomy));
    }

    #[test]
    fn test_panel_ids() {
        assert_eq!(panel_id("accreditation-1"), "content-accreditation-1");
        let model = SectionModel::from_category(&ACCREDITATIONS_AUTONOMY);
        assert_eq!(
            model.autonomy_certificates[1].panel_id(),
            "content-autonomy-2"
        );
    }

    #[test]
    fn test_state_classes() {
        assert!(affordance_class(true).contains("rotate-45"));
        assert!(!affordance_class(false).contains("rotate-45"));
        assert!(panel_class(true).contains("max-h-96"));
        assert!(panel_class(false).contains("max-h-0"));
        assert_eq!(reveal_class(false, "animate-fade-in", "opacity-0"), "opacity-0");
    }
}
