//! Static accreditation catalog
//!
//! Read-only reference data compiled into the binary. Entries are created
//! once as `'static` literals and never mutated.

use std::collections::HashSet;

use crate::errors::CatalogError;

/// Key of the accreditation and autonomy-certificate category.
pub const ACCREDITATIONS_AUTONOMY_KEY: &str = "accreditations-autonomy";

// ============================================================================
// Data Model
// ============================================================================

/// A downloadable static asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentFile {
    /// Label shown on the download link
    pub name: &'static str,
    /// Asset URL, rendered as-is
    pub url: &'static str,
}

/// An accreditation certificate with its issue date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccreditationItem {
    /// Identifier, unique across the whole category
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Issue date as printed on the certificate
    pub date: &'static str,
    /// Downloadable files
    pub documents: &'static [DocumentFile],
}

/// An autonomy letter. Same shape as an accreditation minus the date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutonomyItem {
    /// Identifier, unique across the whole category
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Downloadable files
    pub documents: &'static [DocumentFile],
}

/// A titled group of accreditations and autonomy certificates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryData {
    /// Panel heading
    pub title: &'static str,
    /// Panel subheading
    pub description: &'static str,
    /// Dated accreditation certificates
    pub accreditations: Option<&'static [AccreditationItem]>,
    /// Undated autonomy letters
    pub autonomy_certificates: Option<&'static [AutonomyItem]>,
}

impl CategoryData {
    /// Accreditations, or an empty slice when the category has none.
    #[must_use]
    pub fn accreditations(&self) -> &'static [AccreditationItem] {
        self.accreditations.unwrap_or(&[])
    }

    /// Autonomy certificates, or an empty slice when the category has none.
    #[must_use]
    pub fn autonomy_certificates(&self) -> &'static [AutonomyItem] {
        self.autonomy_certificates.unwrap_or(&[])
    }

    /// Every entry id in render order: accreditations first.
    #[must_use]
    pub fn entry_ids(&self) -> Vec<&'static str> {
        self.accreditations()
            .iter()
            .map(|item| item.id)
            .chain(self.autonomy_certificates().iter().map(|item| item.id))
            .collect()
    }

    /// Whether `id` names an entry of this category.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entry_ids().contains(&id)
    }

    /// Check that ids are non-empty and unique across both lists.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for id in self.entry_ids() {
            if id.is_empty() {
                return Err(CatalogError::EmptyId);
            }
            if !seen.insert(id) {
                return Err(CatalogError::DuplicateId(id.to_string()));
            }
        }
        Ok(())
    }
}

// ============================================================================
// Data
// ============================================================================

const fn doc(name: &'static str, url: &'static str) -> DocumentFile {
    DocumentFile { name, url }
}

static NBA_ACCREDITATIONS: [AccreditationItem; 5] = [
    AccreditationItem {
        id: "accreditation-1",
        name: "NBA Accreditation Certificate",
        date: "4/2/2025",
        documents: &[doc("NBA Certificate 2025.pdf", "/assets/NBA_25.pdf")],
    },
    AccreditationItem {
        id: "accreditation-2",
        name: "NBA Accreditation Certificate",
        date: "2/12/2021",
        documents: &[doc("NBA Certificate 2021.pdf", "/assets/NBA_21.pdf")],
    },
    AccreditationItem {
        id: "accreditation-3",
        name: "NBA Accreditation Certificate",
        date: "21/7/2020",
        documents: &[doc("NBA Certificate 2020.pdf", "/assets/NBA_20.pdf")],
    },
    AccreditationItem {
        id: "accreditation-4",
        name: "NBA Accreditation Certificate",
        date: "09/06/2017",
        documents: &[doc("NBA Certificate 2017.pdf", "/assets/NBA_17.pdf")],
    },
    AccreditationItem {
        id: "accreditation-5",
        name: "NBA Accreditation Certificate",
        date: "08/11/2013",
        documents: &[doc("NBA Certificate 2013.pdf", "/assets/NBA_13.pdf")],
    },
];

static AUTONOMY_LETTERS: [AutonomyItem; 2] = [
    AutonomyItem {
        id: "autonomy-1",
        name: "University of Mumbai Autonomy Letter",
        documents: &[doc(
            "Mumbai University Autonomy Letter.pdf",
            "/assets/UOM_Autonomy_Letter.pdf",
        )],
    },
    AutonomyItem {
        id: "autonomy-2",
        name: "University Grants Commission Autonomy Letter",
        documents: &[doc(
            "UGC Autonomy Letter.pdf",
            "/assets/UGC_Autonomy_Letter.pdf",
        )],
    },
];

/// NBA accreditations and university autonomy letters.
pub static ACCREDITATIONS_AUTONOMY: CategoryData = CategoryData {
    title: "Accreditations and Autonomy Certificates",
    description: "NBA Accreditations and University Autonomy Certificates ensuring quality education standards",
    accreditations: Some(&NBA_ACCREDITATIONS),
    autonomy_certificates: Some(&AUTONOMY_LETTERS),
};

/// Subheading shown under the section title, above the panel.
pub const SECTION_TAGLINE: &str = "NBA Accreditations and University Autonomy Certificates ensuring quality education standards and institutional excellence";

/// Archive bundles offered below the document panel.
pub static QUICK_DOWNLOADS: [DocumentFile; 2] = [
    doc("Download Complete NBA Documentation", "/assets/NBA_Docs.rar"),
    doc("Download Autonomy Certificates", "/assets/AutonomyLetters.rar"),
];

static CATEGORIES: [(&str, &CategoryData); 1] =
    [(ACCREDITATIONS_AUTONOMY_KEY, &ACCREDITATIONS_AUTONOMY)];

/// Look up a category by key.
pub fn category(key: &str) -> Result<&'static CategoryData, CatalogError> {
    CATEGORIES
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, data)| *data)
        .ok_or_else(|| CatalogError::UnknownCategory(key.to_string()))
}

/// Registered category keys.
pub fn category_keys() -> impl Iterator<Item = &'static str> {
    CATEGORIES.iter().map(|(key, _)| *key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_shape() {
        let data = category(ACCREDITATIONS_AUTONOMY_KEY).unwrap();
        assert_eq!(data.accreditations().len(), 5);
        assert_eq!(data.autonomy_certificates().len(), 2);
        assert!(data.accreditations().iter().all(|a| a.documents.len() == 1));
        assert!(data
            .autonomy_certificates()
            .iter()
            .all(|a| a.documents.len() == 1));
    }

    #[test]
    fn test_ids_are_unique() {
        for key in category_keys() {
            assert_eq!(category(key).unwrap().validate(), Ok(()));
        }
    }

    #[test]
    fn test_entry_ids_render_order() {
        let ids = ACCREDITATIONS_AUTONOMY.entry_ids();
        assert_eq!(ids.first(), Some(&"accreditation-1"));
        assert_eq!(ids.last(), Some(&"autonomy-2"));
        assert_eq!(ids.len(), 7);
    }

    #[test]
    fn test_tagline_extends_description() {
        assert!(SECTION_TAGLINE.starts_with(ACCREDITATIONS_AUTONOMY.description));
        assert!(SECTION_TAGLINE.ends_with("and institutional excellence"));
    }

    #[test]
    fn test_unknown_category() {
        assert_eq!(
            category("programs"),
            Err(CatalogError::UnknownCategory("programs".to_string()))
        );
    }

    #[test]
    fn test_validate_duplicate() {
        static DUPES: [AutonomyItem; 1] = [AutonomyItem {
            id: "accreditation-1",
            name: "Copy",
            documents: &[],
        }];
        let data = CategoryData {
            autonomy_certificates: Some(&DUPES),
            ..ACCREDITATIONS_AUTONOMY
        };
        assert_eq!(
            data.validate(),
            Err(CatalogError::DuplicateId("accreditation-1".to_string()))
        );
    }

    #[test]
    fn test_validate_empty_id() {
        static EMPTY: [AutonomyItem; 1] = [AutonomyItem {
            id: "",
            name: "Unnamed",
            documents: &[],
        }];
        let data = CategoryData {
            title: "t",
            description: "d",
            accreditations: None,
            autonomy_certificates: Some(&EMPTY),
        };
        assert_eq!(data.validate(), Err(CatalogError::EmptyId));
    }

    #[test]
    fn test_missing_lists_are_empty() {
        let data = CategoryData {
            title: "t",
            description: "d",
            accreditations: None,
            autonomy_certificates: None,
        };
        assert!(data.entry_ids().is_empty());
        assert!(!data.contains("accreditation-1"));
        assert_eq!(data.validate(), Ok(()));
    }

    #[test]
    fn test_urls_point_at_assets() {
        let all = ACCREDITATIONS_AUTONOMY
            .accreditations()
            .iter()
            .flat_map(|a| a.documents)
            .chain(
                ACCREDITATIONS_AUTONOMY
                    .autonomy_certificates()
                    .iter()
                    .flat_map(|a| a.documents),
            )
            .chain(QUICK_DOWNLOADS.iter());
        for document in all {
            assert!(document.url.starts_with("/assets/"), "{}", document.url);
        }
    }
}
