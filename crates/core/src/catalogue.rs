//! Catalogue lookup over the static navigation lists.
//!
//! The two category lists in [`crate::data`] are the source of truth for
//! which detail pages exist. An entry is addressed by the trailing path
//! segment of its `href` (its routing slug). Lookup always uses the raw slug
//! as supplied by the caller; alias canonicalisation happens later, in
//! [`crate::resolver`].

use std::collections::BTreeSet;

use crate::data::{PROCEDURE_CATEGORIES, TREATMENT_CATEGORIES};

/// One treatment or procedure listing in a navigation menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    /// Human-readable display name.
    pub title: &'static str,
    /// Page path; the final segment is the entry's routing slug.
    pub href: &'static str,
}

/// A department grouping of navigation items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavCategory {
    /// Department display name.
    pub title: &'static str,
    /// Department landing page, when one exists.
    pub href: Option<&'static str>,
    /// Entries listed under this department.
    pub items: &'static [NavItem],
}

/// Returns the trailing path segment of an href.
pub(crate) fn trailing_slug(href: &str) -> &str {
    href.rsplit('/').next().unwrap_or(href)
}

/// Searches one category list for the first entry whose routing slug equals
/// `raw_slug`, returning the entry together with its owning category.
fn search<'a>(
    categories: &'a [NavCategory],
    raw_slug: &str,
) -> Option<(&'a NavItem, &'a NavCategory)> {
    categories.iter().find_map(|category| {
        category
            .items
            .iter()
            .find(|item| trailing_slug(item.href) == raw_slug)
            .map(|item| (item, category))
    })
}

/// Finds the catalogue entry for a raw slug.
///
/// The treatments list is searched before the procedures list, and the first
/// match wins. This ordering is part of the contract: if both lists carry an
/// entry with the same trailing slug, the treatments entry is returned.
pub fn find_entry(raw_slug: &str) -> Option<(&'static NavItem, &'static NavCategory)> {
    search(TREATMENT_CATEGORIES, raw_slug).or_else(|| search(PROCEDURE_CATEGORIES, raw_slug))
}

/// Returns every routing slug in both category lists, deduplicated.
///
/// Used by the page layer to enumerate which detail pages to pre-render.
/// Output order is sorted but not contractually meaningful.
pub fn all_slugs() -> Vec<&'static str> {
    let mut slugs = BTreeSet::new();
    for category in TREATMENT_CATEGORIES.iter().chain(PROCEDURE_CATEGORIES) {
        for item in category.items {
            slugs.insert(trailing_slug(item.href));
        }
    }
    slugs.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slug_takes_the_final_segment() {
        assert_eq!(trailing_slug("/treatments/knee-replacement"), "knee-replacement");
        assert_eq!(trailing_slug("knee-replacement"), "knee-replacement");
    }

    #[test]
    fn matches_exact_trailing_segment_only() {
        // "replacement" is a suffix of the href but not its trailing segment.
        assert!(find_entry("replacement").is_none());
        assert!(find_entry("knee-replacement").is_some());
    }

    #[test]
    fn finds_entries_in_both_lists() {
        let (item, category) = find_entry("appendectomy").expect("treatments entry");
        assert_eq!(item.title, "Appendectomy");
        assert_eq!(category.title, "General & Laparoscopic Surgery");

        let (item, category) = find_entry("colonoscopy").expect("procedures entry");
        assert_eq!(item.title, "Colonoscopy");
        assert_eq!(category.title, "Gastroenterology");
    }

    #[test]
    fn treatments_list_wins_ties() {
        const FIRST: &[NavCategory] = &[NavCategory {
            title: "First",
            href: Some("/departments/first"),
            items: &[NavItem {
                title: "Shared entry",
                href: "/treatments/shared",
            }],
        }];
        const SECOND: &[NavCategory] = &[NavCategory {
            title: "Second",
            href: Some("/departments/second"),
            items: &[NavItem {
                title: "Shared entry",
                href: "/procedures/shared",
            }],
        }];

        let (_, category) = search(FIRST, "shared")
            .or_else(|| search(SECOND, "shared"))
            .expect("tie resolves to a match");
        assert_eq!(category.title, "First");
    }

    #[test]
    fn all_slugs_has_no_duplicates() {
        let slugs = all_slugs();
        let deduped: BTreeSet<_> = slugs.iter().collect();
        assert_eq!(slugs.len(), deduped.len());
        assert!(slugs.contains(&"appendectomy"));
        assert!(slugs.contains(&"angioplasty"));
    }
}
