//! Static documentation content and the identifier -> document resolver.
//!
//! Every section's document is a `static Doc` built from `&'static` data, so
//! the whole corpus lives in the binary and rendering never allocates content.
//! Resolution is an exact match over the known identifiers; anything else
//! yields `None` and the content pane simply renders empty.

mod authorization;
mod crud;
mod database;
mod endpoints;
mod error_handling;
mod getting_started;
mod jwt;
mod overview;
mod response;
mod summary;
mod swagger;

/// One complete documentation section.
pub struct Doc {
    pub id: &'static str,
    pub title: &'static str,
    /// Lead paragraph shown directly under the title.
    pub intro: &'static str,
    pub blocks: &'static [Block],
}

/// A single renderable fragment of a document, in display order.
pub enum Block {
    Heading(&'static str),
    SubHeading(&'static str),
    Paragraph(&'static str),
    /// Numbered setup step, rendered as a badge plus title.
    Step { number: u8, title: &'static str },
    Code {
        lang: &'static str,
        source: &'static str,
    },
    Bullets(&'static [ListItem]),
    Table {
        headers: &'static [&'static str],
        rows: &'static [&'static [&'static str]],
    },
    Callout {
        kind: CalloutKind,
        text: &'static str,
    },
    FeatureGrid(&'static [Feature]),
    Endpoint(Endpoint),
}

pub struct ListItem {
    /// Optional bold lead-in ("Issuer Validation:" etc).
    pub lead: Option<&'static str>,
    pub text: &'static str,
}

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalloutKind {
    Highlight,
    Info,
    Success,
    Warning,
}

pub struct Endpoint {
    pub method: HttpMethod,
    pub path: &'static str,
    pub admin_only: bool,
    pub summary: &'static str,
    pub example: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn label(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// Resolve a section identifier to its document.
///
/// Unknown identifiers return `None`; there is no fallback document.
pub fn resolve(id: &str) -> Option<&'static Doc> {
    match id {
        "overview" => Some(&overview::DOC),
        "getting-started" => Some(&getting_started::DOC),
        "response" => Some(&response::DOC),
        "database" => Some(&database::DOC),
        "jwt" => Some(&jwt::DOC),
        "swagger" => Some(&swagger::DOC),
        "authorization" => Some(&authorization::DOC),
        "crud" => Some(&crud::DOC),
        "endpoints" => Some(&endpoints::DOC),
        "error-handling" => Some(&error_handling::DOC),
        "summary" => Some(&summary::DOC),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry;

    #[test]
    fn test_every_section_resolves_nonempty() {
        for section in registry::SECTIONS {
            let doc = resolve(section.id)
                .unwrap_or_else(|| panic!("no document for section '{}'", section.id));
            assert_eq!(doc.id, section.id);
            assert!(!doc.title.is_empty());
            assert!(!doc.intro.is_empty());
            assert!(!doc.blocks.is_empty(), "'{}' has no blocks", section.id);
        }
    }

    #[test]
    fn test_unknown_id_resolves_empty() {
        assert!(resolve("nonexistent").is_none());
        assert!(resolve("").is_none());
        // Close-but-wrong identifiers must not fuzzy-match
        assert!(resolve("Overview").is_none());
        assert!(resolve("jwt ").is_none());
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let a = resolve("jwt").unwrap();
        let b = resolve("jwt").unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_overview_contains_feature_grid() {
        let doc = resolve("overview").unwrap();
        assert!(
            doc.blocks
                .iter()
                .any(|b| matches!(b, Block::FeatureGrid(_))),
            "overview should show the feature grid"
        );
    }

    #[test]
    fn test_jwt_doc_is_jwt_only() {
        let doc = resolve("jwt").unwrap();
        assert_eq!(doc.title, "JWT Authentication");
        assert_ne!(doc.id, resolve("overview").unwrap().id);
    }

    #[test]
    fn test_error_handling_has_status_table() {
        let doc = resolve("error-handling").unwrap();
        let table = doc.blocks.iter().find_map(|b| match b {
            Block::Table { headers, rows } => Some((headers, rows)),
            _ => None,
        });
        let (headers, rows) = table.expect("error-handling should have the status code table");
        assert_eq!(headers.len(), 3);
        assert_eq!(rows.len(), 7);
        for row in rows.iter() {
            assert_eq!(row.len(), headers.len());
        }
    }

    #[test]
    fn test_endpoints_doc_lists_all_routes() {
        let doc = resolve("endpoints").unwrap();
        let endpoints: Vec<&Endpoint> = doc
            .blocks
            .iter()
            .filter_map(|b| match b {
                Block::Endpoint(e) => Some(e),
                _ => None,
            })
            .collect();
        assert_eq!(endpoints.len(), 7);
        assert_eq!(
            endpoints.iter().filter(|e| e.admin_only).count(),
            3,
            "create/update/delete are admin only"
        );
        for e in endpoints {
            assert!(e.path.starts_with("/api/"));
            assert!(!e.example.is_empty());
        }
    }

    #[test]
    fn test_code_blocks_have_language_tags() {
        for section in registry::SECTIONS {
            let doc = resolve(section.id).unwrap();
            for block in doc.blocks {
                if let Block::Code { lang, source } = block {
                    assert!(!lang.is_empty(), "untagged code block in '{}'", section.id);
                    assert!(!source.trim().is_empty());
                }
            }
        }
    }
}
