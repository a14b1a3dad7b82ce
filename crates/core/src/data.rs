//! Static site catalogue: the treatment and procedure navigation lists.
//!
//! These lists are owned by the marketing site and consumed read-only here.
//! Several hrefs still use legacy slugs (for example `appendectomy`); the
//! alias table in [`crate::alias`] maps those onto canonical detail pages
//! without breaking existing routes.

use crate::catalogue::{NavCategory, NavItem};

/// Department menus under "Treatments". Searched first during lookup.
pub static TREATMENT_CATEGORIES: &[NavCategory] = &[
    NavCategory {
        title: "General & Laparoscopic Surgery",
        href: Some("/departments/general-surgery"),
        items: &[
            NavItem {
                title: "Appendectomy",
                href: "/treatments/appendectomy",
            },
            NavItem {
                title: "Hernia Surgery",
                href: "/treatments/hernia-surgery",
            },
            NavItem {
                title: "Gallstone Surgery",
                href: "/treatments/gallstone-surgery",
            },
            NavItem {
                title: "Piles Treatment",
                href: "/treatments/piles",
            },
            NavItem {
                title: "Anal Fissure Treatment",
                href: "/treatments/fissure",
            },
            NavItem {
                title: "Fistula Treatment",
                href: "/treatments/fistula",
            },
        ],
    },
    NavCategory {
        title: "Orthopaedics & Joint Replacement",
        href: Some("/departments/orthopaedics"),
        items: &[
            NavItem {
                title: "Knee Replacement",
                href: "/treatments/knee-replacement",
            },
            NavItem {
                title: "Hip Replacement",
                href: "/treatments/hip-replacement",
            },
            NavItem {
                title: "Shoulder Replacement",
                href: "/treatments/shoulder-replacement",
            },
            NavItem {
                title: "Rotator Cuff Repair",
                href: "/treatments/rotator-cuff-repair",
            },
            NavItem {
                title: "ACL Reconstruction",
                href: "/treatments/acl-reconstruction",
            },
        ],
    },
    NavCategory {
        title: "Ear, Nose & Throat",
        href: Some("/departments/ent"),
        items: &[
            NavItem {
                title: "Adenoidectomy",
                href: "/treatments/adenoidectomy",
            },
            NavItem {
                title: "Tonsillectomy",
                href: "/treatments/tonsillectomy",
            },
            NavItem {
                title: "Septoplasty",
                href: "/treatments/septoplasty",
            },
            NavItem {
                title: "Sinus Surgery (FESS)",
                href: "/treatments/fess",
            },
        ],
    },
    NavCategory {
        title: "Urology",
        href: Some("/departments/urology"),
        items: &[
            NavItem {
                title: "Kidney Stone Treatment",
                href: "/treatments/kidney-stone-treatment",
            },
            NavItem {
                title: "RIRS",
                href: "/treatments/rirs",
            },
            NavItem {
                title: "PCNL",
                href: "/treatments/pcnl",
            },
            NavItem {
                title: "TURP",
                href: "/treatments/turp",
            },
        ],
    },
    NavCategory {
        title: "Ophthalmology",
        href: Some("/departments/ophthalmology"),
        items: &[
            NavItem {
                title: "Cataract Surgery",
                href: "/treatments/cataract-surgery",
            },
            NavItem {
                title: "LASIK",
                href: "/treatments/lasik",
            },
        ],
    },
];

/// Department menus under "Procedures". Searched after the treatments list.
pub static PROCEDURE_CATEGORIES: &[NavCategory] = &[
    NavCategory {
        title: "Gynaecology",
        href: Some("/departments/gynaecology"),
        items: &[
            NavItem {
                title: "Hysterectomy",
                href: "/procedures/hysterectomy",
            },
            NavItem {
                title: "Myomectomy",
                href: "/procedures/myomectomy",
            },
            NavItem {
                title: "Ovarian Cystectomy",
                href: "/procedures/ovarian-cystectomy",
            },
        ],
    },
    NavCategory {
        title: "Gastroenterology",
        href: Some("/departments/gastroenterology"),
        items: &[
            NavItem {
                title: "Endoscopy",
                href: "/procedures/endoscopy",
            },
            NavItem {
                title: "Colonoscopy",
                href: "/procedures/colonoscopy",
            },
            NavItem {
                title: "ERCP",
                href: "/procedures/ercp",
            },
        ],
    },
    NavCategory {
        title: "Cardiology",
        href: Some("/departments/cardiology"),
        items: &[
            NavItem {
                title: "Coronary Angiography",
                href: "/procedures/angiography",
            },
            NavItem {
                title: "Coronary Angioplasty",
                href: "/procedures/angioplasty",
            },
        ],
    },
    // Vascular surgery has no landing page yet; items link straight to
    // detail pages.
    NavCategory {
        title: "Vascular Surgery",
        href: None,
        items: &[NavItem {
            title: "Varicose Veins Treatment",
            href: "/procedures/varicose-veins-treatment",
        }],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::trailing_slug;
    use crate::constants::{DEPARTMENTS_PATH_PREFIX, PROCEDURES_PATH_PREFIX, TREATMENTS_PATH_PREFIX};

    #[test]
    fn hrefs_use_the_expected_prefixes() {
        for category in TREATMENT_CATEGORIES {
            for item in category.items {
                assert!(
                    item.href.starts_with(TREATMENTS_PATH_PREFIX),
                    "{} is not under {}",
                    item.href,
                    TREATMENTS_PATH_PREFIX
                );
            }
        }
        for category in PROCEDURE_CATEGORIES {
            for item in category.items {
                assert!(
                    item.href.starts_with(PROCEDURES_PATH_PREFIX),
                    "{} is not under {}",
                    item.href,
                    PROCEDURES_PATH_PREFIX
                );
            }
        }
        for category in TREATMENT_CATEGORIES.iter().chain(PROCEDURE_CATEGORIES) {
            if let Some(href) = category.href {
                assert!(href.starts_with(DEPARTMENTS_PATH_PREFIX));
            }
        }
    }

    #[test]
    fn every_item_has_a_non_empty_slug() {
        for category in TREATMENT_CATEGORIES.iter().chain(PROCEDURE_CATEGORIES) {
            for item in category.items {
                assert!(!trailing_slug(item.href).is_empty(), "bad href {}", item.href);
            }
        }
    }
}
