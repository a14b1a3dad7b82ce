//! Slug-to-content resolution.
//!
//! Resolution is a pure function over static data and has exactly one
//! absence path: a raw slug that no catalogue entry routes. Catalogued slugs
//! always produce a full record, authored or generic.

use crate::constants::NO_DEPARTMENT_HREF;
use crate::detail::TreatmentDetail;
use crate::{alias, catalogue, fallback, registry};

/// Resolves a raw URL slug to its detail page content.
///
/// The catalogue is searched with the raw slug exactly as supplied; only
/// after a catalogue hit is the slug canonicalised through the alias table
/// and dispatched against the authored-record registry. A catalogue miss
/// returns `None` and maps to a 404 at the page layer. A registry miss
/// synthesises generic content from the catalogue entry, so every catalogued
/// slug renders.
pub fn resolve(raw_slug: &str) -> Option<TreatmentDetail> {
    let (entry, category) = catalogue::find_entry(raw_slug)?;
    let canonical = alias::canonical_slug(raw_slug);

    if let Some(factory) = registry::lookup(canonical) {
        return Some(factory());
    }

    tracing::debug!(slug = canonical, "no authored record, synthesising generic page");
    Some(fallback::generic_detail(
        canonical,
        entry.title,
        category.title,
        category.href.unwrap_or(NO_DEPARTMENT_HREF),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::all_slugs;

    #[test]
    fn every_catalogued_slug_resolves() {
        for slug in all_slugs() {
            assert!(resolve(slug).is_some(), "{slug} must resolve");
        }
    }

    #[test]
    fn unknown_slugs_resolve_to_none() {
        assert!(resolve("nonexistent-slug-xyz").is_none());
        assert!(resolve("").is_none());
        assert!(resolve("treatments").is_none());
    }

    #[test]
    fn aliased_slug_selects_the_canonical_record() {
        let detail = resolve("appendectomy").expect("catalogued slug");
        assert_eq!(detail.slug, "appendicitis");
        assert!(detail
            .title
            .starts_with("Appendectomy – Appendix Removal Surgery"));
    }

    #[test]
    fn canonical_slug_is_not_itself_routed() {
        // The catalogue routes the legacy spelling only; the canonical form
        // is reachable exclusively through the alias.
        assert!(resolve("appendicitis").is_none());
    }

    #[test]
    fn category_override_survives_resolution() {
        let detail = resolve("adenoidectomy").expect("catalogued slug");
        assert_eq!(detail.category, "ENT");
    }

    #[test]
    fn aliased_slug_without_authored_record_gets_fallback() {
        // gallstone-surgery canonicalises to gallstones, which has no
        // authored record yet.
        let detail = resolve("gallstone-surgery").expect("catalogued slug");
        assert_eq!(detail.slug, "gallstones");
        assert_eq!(detail.title, "Gallstone Surgery");
        assert_eq!(detail.category, "General & Laparoscopic Surgery");
        assert_eq!(detail.department_href, "/departments/general-surgery");
    }

    #[test]
    fn fallback_uses_placeholder_href_for_categories_without_landing_page() {
        let detail = resolve("varicose-veins-treatment").expect("catalogued slug");
        assert_eq!(detail.slug, "varicose-veins");
        assert_eq!(detail.category, "Vascular Surgery");
        assert_eq!(detail.department_href, NO_DEPARTMENT_HREF);
    }

    #[test]
    fn authored_record_wins_over_fallback() {
        let detail = resolve("rirs").expect("catalogued slug");
        assert_eq!(detail.title, "RIRS – Retrograde Intrarenal Surgery");
        // Authored copy, not the generic template.
        assert!(!detail.full_description.contains("Discussed at consultation"));
    }
}
