//! Keyed dispatch from canonical slug to authored detail records.
//!
//! The registry is a read-only map built once at first use. Values are
//! zero-argument factories rather than pre-built records, so the full set of
//! page literals is never constructed eagerly. Canonical slugs are unique
//! keys; dispatch is a single map lookup.

use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

use crate::detail::TreatmentDetail;
use crate::error::{ContentError, ContentResult};
use crate::{alias, catalogue, records};

/// Factory producing one authored detail record.
pub type DetailFactory = fn() -> TreatmentDetail;

static REGISTRY: LazyLock<HashMap<&'static str, DetailFactory>> = LazyLock::new(|| {
    let mut table: HashMap<&'static str, DetailFactory> = HashMap::new();
    table.insert("appendicitis", records::general_surgery::appendicitis);
    table.insert("hernia", records::general_surgery::hernia);
    table.insert("piles", records::general_surgery::piles);
    table.insert("adenoidectomy", records::ent::adenoidectomy);
    table.insert("tonsillectomy", records::ent::tonsillectomy);
    table.insert("knee-replacement", records::orthopaedics::knee_replacement);
    table.insert(
        "shoulder-replacement",
        records::orthopaedics::shoulder_replacement,
    );
    table.insert(
        "rotator-cuff-repair",
        records::orthopaedics::rotator_cuff_repair,
    );
    table.insert("rirs", records::urology::rirs);
    table.insert("kidney-stones", records::urology::kidney_stones);
    table.insert("cataract-surgery", records::ophthalmology::cataract_surgery);
    table.insert("hysterectomy", records::gynaecology::hysterectomy);
    table
});

/// Looks up the factory for a canonical slug.
pub(crate) fn lookup(canonical_slug: &str) -> Option<DetailFactory> {
    REGISTRY.get(canonical_slug).copied()
}

/// Iterates every canonical slug with an authored record.
pub fn authored_slugs() -> Vec<&'static str> {
    let mut slugs: Vec<_> = REGISTRY.keys().copied().collect();
    slugs.sort_unstable();
    slugs
}

/// Checks the static data for internal consistency.
///
/// Two things can go stale when the catalogue, alias table and registry are
/// edited independently: an alias whose legacy slug no longer routes
/// anywhere, and an authored record that no catalogued slug canonicalises to.
/// Either would silently hide a page, so binaries run this at startup.
pub fn verify() -> ContentResult<()> {
    let routed: BTreeSet<&str> = catalogue::all_slugs().into_iter().collect();

    for legacy in alias::alias_keys() {
        if !routed.contains(legacy) {
            return Err(ContentError::DanglingAlias {
                alias: legacy.to_string(),
            });
        }
    }

    let reachable: BTreeSet<&str> = routed
        .iter()
        .map(|slug| alias::canonical_slug(slug))
        .collect();
    for canonical in REGISTRY.keys() {
        if !reachable.contains(canonical) {
            return Err(ContentError::OrphanRecord {
                slug: (*canonical).to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_data_is_consistent() {
        verify().expect("catalogue, aliases and registry agree");
    }

    #[test]
    fn every_factory_builds_a_record_with_its_own_slug() {
        for slug in authored_slugs() {
            let detail = lookup(slug).expect("registered factory")();
            assert_eq!(detail.slug, slug);
            assert!(!detail.short_description.is_empty(), "{slug} lacks copy");
            assert!(!detail.full_description.is_empty(), "{slug} lacks copy");
        }
    }

    #[test]
    fn rotator_cuff_repair_is_registered() {
        assert!(lookup("rotator-cuff-repair").is_some());
    }

    #[test]
    fn unknown_canonical_slug_misses() {
        assert!(lookup("colonoscopy").is_none());
    }
}
