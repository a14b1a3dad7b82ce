//! # TCR Core
//!
//! Core resolution logic for the treatment content system.
//!
//! This crate contains pure data operations over static catalogue data:
//! - Catalogue lookup over the treatment and procedure navigation lists
//! - Legacy-alias canonicalisation
//! - Keyed dispatch to hand-authored detail records
//! - Templated fallback synthesis for slugs without authored content
//!
//! **No API concerns**: HTTP servers, OpenAPI documentation or CLI surfaces
//! belong in `api-rest`, `api-shared` and `tcr-cli`.

pub mod alias;
pub mod catalogue;
pub mod constants;
pub mod data;
pub mod detail;
pub mod error;
pub mod fallback;
mod records;
pub mod registry;
pub mod resolver;

pub use catalogue::{all_slugs, find_entry, NavCategory, NavItem};
pub use detail::{
    CustomCta, Faq, Overview, ProcedureStep, Reviewer, TreatmentDetail, TreatmentMeta,
};
pub use error::{ContentError, ContentResult};
pub use registry::verify;
pub use resolver::resolve;

use tcr_types::Slug;

/// Pure content resolution operations - no API concerns
#[derive(Default, Clone)]
pub struct ContentService;

impl ContentService {
    /// Creates a new instance of ContentService.
    pub fn new() -> Self {
        Self
    }

    /// Lists every routing slug in the catalogue, deduplicated.
    pub fn list_slugs(&self) -> Vec<&'static str> {
        catalogue::all_slugs()
    }

    /// Resolves a normalised slug to its detail page content.
    ///
    /// Returns `None` when no catalogue entry routes the slug; the caller is
    /// expected to present that as a not-found response.
    pub fn resolve(&self, slug: &Slug) -> Option<TreatmentDetail> {
        resolver::resolve(slug.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_delegates_to_the_resolver() {
        let service = ContentService::new();
        let slug = Slug::new("Appendectomy").expect("valid slug");
        let detail = service.resolve(&slug).expect("resolves");
        assert_eq!(detail.slug, "appendicitis");
        assert!(service.list_slugs().contains(&"appendectomy"));
    }
}
