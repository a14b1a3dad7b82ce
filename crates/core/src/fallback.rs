//! Templated fallback content for catalogued slugs without authored pages.
//!
//! Every slug listed in the catalogue must render a complete page, so when
//! the registry has no authored record the resolver synthesises one from
//! fixed narrative templates. The generator is deterministic: the same
//! inputs always produce the same record.

use crate::constants::{DEFAULT_CTA_LABEL, EDITORIAL_REVIEWER_NAME, EDITORIAL_REVIEWER_ROLE};
use crate::detail::{CustomCta, Overview, ProcedureStep, Reviewer, TreatmentDetail, TreatmentMeta};

/// Builds a generic detail record for a catalogue entry.
///
/// `title` and `category` come from the matched catalogue entry and its
/// owning category; `department_href` is the category landing page (or the
/// placeholder href when the category has none).
pub fn generic_detail(
    slug: &str,
    title: &str,
    category: &str,
    department_href: &str,
) -> TreatmentDetail {
    TreatmentDetail {
        slug: slug.into(),
        title: title.into(),
        category: category.into(),
        department_href: department_href.into(),
        subheading: Some(format!("{title} at our {category} department")),
        tagline: None,
        breadcrumb_title: Some(title.into()),
        short_description: format!(
            "{title} performed by our experienced {category} team using modern, \
             minimally invasive techniques wherever possible."
        ),
        full_description: format!(
            "Our {category} department offers {title} with a focus on safety, \
             comfort and a smooth recovery. Every case begins with a detailed \
             consultation and investigations, after which your specialist explains \
             the recommended plan, the alternatives and what to expect at each \
             stage. Treatment is carried out in fully equipped modern theatres with \
             dedicated post-procedure care."
        ),
        overview: Some(Overview {
            heading: format!("About {title}"),
            intro: format!(
                "Here is what you can expect when you come to us for {title}:"
            ),
            items: vec![
                "Consultation with a senior specialist, not a trainee".into(),
                "Transparent package pricing before admission".into(),
                "Modern operating theatres and recovery facilities".into(),
                "Structured follow-up until you are fully recovered".into(),
            ],
        }),
        conditions_heading: None,
        conditions_treated: vec![],
        procedure_heading: Some("What to expect".into()),
        procedure_steps: vec![
            ProcedureStep {
                title: "Consultation and evaluation".into(),
                description: format!(
                    "A {category} specialist reviews your history, examines you and \
                     arranges any tests needed to confirm that {title} is right for \
                     you."
                ),
            },
            ProcedureStep {
                title: "The procedure".into(),
                description: format!(
                    "{title} is performed by a senior consultant with a dedicated \
                     theatre team, using the least invasive approach suitable for \
                     your case."
                ),
            },
            ProcedureStep {
                title: "Recovery and follow-up".into(),
                description: "You are monitored in our recovery unit and discharged \
                     with clear written instructions and a scheduled review \
                     appointment."
                    .into(),
            },
        ],
        benefits_heading: Some("Why choose us".into()),
        benefits: vec![
            format!("Experienced {category} consultants performing {title}"),
            "Minimally invasive options wherever clinically suitable".into(),
            "Transparent, all-inclusive pricing".into(),
            "24x7 in-house emergency and critical care backup".into(),
        ],
        risks: vec![],
        recovery_timeline: vec![],
        faq_heading: Some("Frequently asked questions".into()),
        faqs: vec![
            crate::detail::Faq {
                question: format!("How do I prepare for {title}?"),
                answer: "Your care team gives you personalised instructions at the \
                         pre-admission visit, covering fasting, regular medication \
                         and what to bring to hospital."
                    .into(),
            },
            crate::detail::Faq {
                question: "Is the cost covered by insurance?".into(),
                answer: "Most major insurers and cashless schemes are accepted. Our \
                         insurance desk confirms your coverage before admission so \
                         there are no surprises."
                    .into(),
            },
            crate::detail::Faq {
                question: "How soon can I get an appointment?".into(),
                answer: "Outpatient consultations are usually available within 48 \
                         hours. Urgent cases are seen the same day."
                    .into(),
            },
        ],
        custom_cta: Some(CustomCta {
            heading: format!("Talk to us about {title}"),
            description: format!(
                "Book a consultation with our {category} team to discuss whether \
                 {title} is right for you."
            ),
            button_label: DEFAULT_CTA_LABEL.into(),
        }),
        meta: Some(TreatmentMeta {
            duration: "Discussed at consultation".into(),
            anesthesia: "As advised by your anaesthetist".into(),
            hospital_stay: "Depends on the procedure".into(),
            recovery_time: "Discussed at consultation".into(),
            success_rate: None,
        }),
        reviewed_by: Some(Reviewer {
            name: EDITORIAL_REVIEWER_NAME.into(),
            role: EDITORIAL_REVIEWER_ROLE.into(),
            experience: "Content reviewed against current clinical guidelines".into(),
            image: None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_title_and_category_into_templates() {
        let detail = generic_detail(
            "example-procedure",
            "Example Procedure",
            "Cardiology",
            "/cardiology",
        );

        assert_eq!(detail.slug, "example-procedure");
        assert_eq!(detail.title, "Example Procedure");
        assert_eq!(detail.category, "Cardiology");
        assert_eq!(detail.department_href, "/cardiology");
        assert!(
            detail.benefits.iter().any(|b| b.contains("Example Procedure")),
            "benefits must mention the title"
        );
        assert!(detail.full_description.contains("Cardiology"));
        assert!(detail.overview.as_ref().is_some_and(|o| o
            .heading
            .contains("Example Procedure")));
    }

    #[test]
    fn is_deterministic() {
        let a = generic_detail("x", "X", "Y", "/y");
        let b = generic_detail("x", "X", "Y", "/y");
        assert_eq!(a, b);
    }

    #[test]
    fn always_renders_a_complete_page() {
        let detail = generic_detail("turp", "TURP", "Urology", "/departments/urology");
        assert!(!detail.procedure_steps.is_empty());
        assert!(!detail.faqs.is_empty());
        assert!(detail.custom_cta.is_some());
        assert!(detail.reviewed_by.is_some());
    }
}
