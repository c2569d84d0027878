//! The fixed list of documentation sections shown in the sidebar.
//!
//! Order here is display order. Identifiers are stable and used as the
//! lookup key for content resolution, so they never change between releases.

use egui_phosphor::regular as icons;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    /// Stable identifier, unique across the registry.
    pub id: &'static str,
    pub title: &'static str,
    /// Phosphor glyph shown next to the title.
    pub icon: &'static str,
}

/// Section shown on startup.
pub const DEFAULT_SECTION: &str = "overview";

pub const SECTIONS: &[Section] = &[
    Section {
        id: "overview",
        title: "Project Overview",
        icon: icons::CLIPBOARD_TEXT,
    },
    Section {
        id: "getting-started",
        title: "Getting Started",
        icon: icons::ROCKET_LAUNCH,
    },
    Section {
        id: "response",
        title: "API Response Model",
        icon: icons::PACKAGE,
    },
    Section {
        id: "database",
        title: "Database Configuration",
        icon: icons::DATABASE,
    },
    Section {
        id: "jwt",
        title: "JWT Authentication",
        icon: icons::LOCK_KEY,
    },
    Section {
        id: "swagger",
        title: "Swagger Configuration",
        icon: icons::BOOKS,
    },
    Section {
        id: "authorization",
        title: "Role-Based Authorization",
        icon: icons::USERS_THREE,
    },
    Section {
        id: "crud",
        title: "CRUD Operations",
        icon: icons::GEAR,
    },
    Section {
        id: "endpoints",
        title: "API Endpoints",
        icon: icons::LINK,
    },
    Section {
        id: "error-handling",
        title: "Error Handling",
        icon: icons::WARNING,
    },
    Section {
        id: "summary",
        title: "Architecture Summary",
        icon: icons::BUILDINGS,
    },
];

/// Look up a section by identifier.
pub fn find(id: &str) -> Option<&'static Section> {
    SECTIONS.iter().find(|s| s.id == id)
}

/// Index of a section within display order, if known.
pub fn position(id: &str) -> Option<usize> {
    SECTIONS.iter().position(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        for (i, a) in SECTIONS.iter().enumerate() {
            for b in &SECTIONS[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate section id");
            }
        }
    }

    #[test]
    fn test_default_section_exists() {
        assert!(find(DEFAULT_SECTION).is_some());
        assert_eq!(position(DEFAULT_SECTION), Some(0));
    }

    #[test]
    fn test_find_unknown_is_none() {
        assert!(find("nonexistent").is_none());
        assert!(position("nonexistent").is_none());
    }

    #[test]
    fn test_registry_order() {
        let ids: Vec<&str> = SECTIONS.iter().map(|s| s.id).collect();
        assert_eq!(
            ids,
            [
                "overview",
                "getting-started",
                "response",
                "database",
                "jwt",
                "swagger",
                "authorization",
                "crud",
                "endpoints",
                "error-handling",
                "summary",
            ]
        );
    }

    #[test]
    fn test_titles_nonempty() {
        for section in SECTIONS {
            assert!(!section.title.is_empty());
            assert!(!section.icon.is_empty());
        }
    }
}
