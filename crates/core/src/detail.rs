//! Treatment detail page content model.
//!
//! This module defines the full content record rendered on a treatment detail
//! page. Records are either authored by hand (see [`crate::registry`]) or
//! synthesised from templates (see [`crate::fallback`]).
//!
//! Notes:
//! - Field casing on the wire is camelCase, matching the site's JSON shape.
//! - `risks` and `recovery_timeline` are frequently empty; empty sections are
//!   simply not rendered by the page layer.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Introductory overview block shown at the top of a detail page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub heading: String,
    pub intro: String,
    pub items: Vec<String>,
}

/// One step of the "how the procedure works" walkthrough.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProcedureStep {
    pub title: String,
    pub description: String,
}

/// A question/answer pair for the FAQ section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// Call-to-action block overriding the site-wide default.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomCta {
    pub heading: String,
    pub description: String,
    pub button_label: String,
}

/// At-a-glance facts shown in the sidebar of a detail page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TreatmentMeta {
    pub duration: String,
    pub anesthesia: String,
    pub hospital_stay: String,
    pub recovery_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_rate: Option<String>,
}

/// Clinical reviewer attribution shown in the page footer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Reviewer {
    pub name: String,
    pub role: String,
    pub experience: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Complete content record for one treatment detail page.
///
/// `slug` is the canonical identity of the page, after alias resolution.
/// `category` and `department_href` usually come from the catalogue entry the
/// slug matched, but authored records may override them (content corrections
/// such as the adenoidectomy page, which is filed under ENT regardless of the
/// menu it is listed in).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TreatmentDetail {
    pub slug: String,
    pub title: String,
    pub category: String,
    pub department_href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subheading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breadcrumb_title: Option<String>,
    pub short_description: String,
    pub full_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<Overview>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions_heading: Option<String>,
    pub conditions_treated: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub procedure_heading: Option<String>,
    pub procedure_steps: Vec<ProcedureStep>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benefits_heading: Option<String>,
    pub benefits: Vec<String>,
    pub risks: Vec<String>,
    pub recovery_timeline: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faq_heading: Option<String>,
    pub faqs: Vec<Faq>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_cta: Option<CustomCta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<TreatmentMeta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewed_by: Option<Reviewer>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialises_with_camel_case_keys() {
        let detail = TreatmentDetail {
            slug: "example".into(),
            title: "Example".into(),
            category: "General Surgery".into(),
            department_href: "/departments/general-surgery".into(),
            subheading: None,
            tagline: None,
            breadcrumb_title: Some("Example".into()),
            short_description: "Short.".into(),
            full_description: "Full.".into(),
            overview: None,
            conditions_heading: None,
            conditions_treated: vec![],
            procedure_heading: None,
            procedure_steps: vec![],
            benefits_heading: None,
            benefits: vec![],
            risks: vec![],
            recovery_timeline: vec![],
            faq_heading: None,
            faqs: vec![],
            custom_cta: None,
            meta: None,
            reviewed_by: None,
        };

        let json = serde_json::to_value(&detail).expect("serialize detail");
        assert_eq!(json["departmentHref"], "/departments/general-surgery");
        assert_eq!(json["breadcrumbTitle"], "Example");
        // None sections are omitted entirely, not rendered as null.
        assert!(json.get("subheading").is_none());
    }
}
