//! Constants used throughout the TCR core crate.
//!
//! This module contains path and copy constants shared between the catalogue
//! data and the fallback templates, to keep them consistent in one place.

/// URL prefix for treatment detail pages.
pub const TREATMENTS_PATH_PREFIX: &str = "/treatments";

/// URL prefix for procedure detail pages.
pub const PROCEDURES_PATH_PREFIX: &str = "/procedures";

/// URL prefix for department landing pages.
pub const DEPARTMENTS_PATH_PREFIX: &str = "/departments";

/// Department href used when a catalogue category has no landing page.
pub const NO_DEPARTMENT_HREF: &str = "#";

/// Button label for the site-wide appointment call to action.
pub const DEFAULT_CTA_LABEL: &str = "Book an Appointment";

/// Attribution shown on pages without a named clinical reviewer.
pub const EDITORIAL_REVIEWER_NAME: &str = "Hospital Medical Editorial Board";

/// Role line for the editorial reviewer attribution.
pub const EDITORIAL_REVIEWER_ROLE: &str = "Clinical content review panel";
