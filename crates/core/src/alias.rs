//! Legacy slug aliases.
//!
//! Several catalogue hrefs still route under older slugs, and more than one
//! legacy name can point at a single canonical detail page. The alias table
//! is purely lexical: catalogue lookup always uses the raw slug from the URL,
//! and only record dispatch and the `slug` field of the output use the
//! canonical form.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Legacy slug spellings mapped to canonical detail-page slugs.
static SLUG_ALIASES: &[(&str, &str)] = &[
    ("appendectomy", "appendicitis"),
    ("gallstone-surgery", "gallstones"),
    ("hernia-surgery", "hernia"),
    ("kidney-stone-treatment", "kidney-stones"),
    ("varicose-veins-treatment", "varicose-veins"),
];

static ALIAS_TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| SLUG_ALIASES.iter().copied().collect());

/// Resolves a raw slug to its canonical form.
///
/// Unknown slugs pass through unchanged.
pub fn canonical_slug<'a>(raw_slug: &'a str) -> &'a str {
    ALIAS_TABLE.get(raw_slug).copied().unwrap_or(raw_slug)
}

/// Iterates the legacy slugs the table knows about.
pub(crate) fn alias_keys() -> impl Iterator<Item = &'static str> {
    SLUG_ALIASES.iter().map(|(legacy, _)| *legacy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_legacy_slugs() {
        assert_eq!(canonical_slug("appendectomy"), "appendicitis");
        assert_eq!(canonical_slug("hernia-surgery"), "hernia");
    }

    #[test]
    fn passes_unknown_slugs_through() {
        assert_eq!(canonical_slug("tonsillectomy"), "tonsillectomy");
        assert_eq!(canonical_slug("not-a-page"), "not-a-page");
    }

    #[test]
    fn table_has_no_duplicate_keys() {
        assert_eq!(ALIAS_TABLE.len(), SLUG_ALIASES.len());
    }
}
