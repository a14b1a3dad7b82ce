//! Urology detail pages.

use super::{faq, lines, step};
use crate::detail::{CustomCta, Overview, Reviewer, TreatmentDetail, TreatmentMeta};

pub(crate) fn rirs() -> TreatmentDetail {
    TreatmentDetail {
        slug: "rirs".into(),
        title: "RIRS – Retrograde Intrarenal Surgery".into(),
        category: "Urology".into(),
        department_href: "/departments/urology".into(),
        subheading: Some("Scarless laser removal of kidney stones".into()),
        tagline: None,
        breadcrumb_title: Some("RIRS".into()),
        short_description: "Flexible ureteroscopy with laser fragmentation removes \
            kidney stones through the natural urinary passage, with no incision at all."
            .into(),
        full_description: "Retrograde intrarenal surgery reaches stones inside the \
            kidney by passing a flexible scope up the urinary tract, so there is no \
            cut anywhere on the body. A holmium laser dusts the stone into fragments \
            fine enough to pass naturally. RIRS is the preferred option for stones up \
            to about 15 mm and for patients on blood thinners or with bleeding \
            tendencies."
            .into(),
        overview: Some(Overview {
            heading: "Why RIRS?".into(),
            intro: "Compared with telescopic keyhole surgery through the back, RIRS \
                offers:"
                .into(),
            items: lines(&[
                "No incision and no kidney puncture",
                "Minimal bleeding, safe even on anticoagulants",
                "Discharge within 24 hours for most patients",
            ]),
        }),
        conditions_heading: Some("Stones suitable for RIRS".into()),
        conditions_treated: lines(&[
            "Kidney stones up to 15 mm",
            "Stones in patients with bleeding disorders",
            "Stones missed or residual after shock-wave lithotripsy",
            "Upper ureteric stones",
        ]),
        procedure_heading: Some("The procedure step by step".into()),
        procedure_steps: vec![
            step(
                "Anaesthesia and access",
                "Under general anaesthesia a flexible ureteroscope is guided through \
                 the bladder and ureter into the kidney.",
            ),
            step(
                "Laser dusting",
                "A holmium laser fibre fragments the stone into dust and tiny pieces; \
                 larger fragments are retrieved with a basket.",
            ),
            step(
                "Stent placement",
                "A soft internal stent is usually left for a week to keep the ureter \
                 draining while swelling settles.",
            ),
        ],
        benefits_heading: Some("Benefits of RIRS".into()),
        benefits: lines(&[
            "Completely scarless, through the natural passage",
            "Same-day or next-day discharge",
            "High single-session clearance for stones under 15 mm",
            "Safe option for patients unfit for open or percutaneous surgery",
        ]),
        risks: lines(&[
            "Stent discomfort until removal",
            "Urinary infection (treated with antibiotics)",
            "A second sitting for very large or hard stones",
        ]),
        recovery_timeline: lines(&[
            "Day 1: discharge with oral medication",
            "Week 1: stent removal in clinic",
            "Week 2: back to unrestricted activity",
        ]),
        faq_heading: Some("RIRS FAQs".into()),
        faqs: vec![
            faq(
                "Is the stent painful?",
                "Most patients feel mild urinary frequency or a dragging sensation. \
                 It settles quickly and the stent is removed painlessly in clinic.",
            ),
            faq(
                "Will the stone come back?",
                "Stone disease can recur, so we provide a metabolic evaluation and \
                 fluid/diet plan after clearance to cut the risk of new stones.",
            ),
        ],
        custom_cta: None,
        meta: Some(TreatmentMeta {
            duration: "45–90 minutes".into(),
            anesthesia: "General".into(),
            hospital_stay: "1 day".into(),
            recovery_time: "1–2 weeks".into(),
            success_rate: Some("90–95% clearance for stones under 15 mm".into()),
        }),
        reviewed_by: Some(Reviewer {
            name: "Dr. Sanjay Rao".into(),
            role: "Consultant Urologist & Endourology Lead".into(),
            experience: "15+ years in laser endourology".into(),
            image: None,
        }),
    }
}

/// Canonical page for the legacy `kidney-stone-treatment` route.
pub(crate) fn kidney_stones() -> TreatmentDetail {
    TreatmentDetail {
        slug: "kidney-stones".into(),
        title: "Kidney Stone Treatment".into(),
        category: "Urology".into(),
        department_href: "/departments/urology".into(),
        subheading: Some("Every modality under one roof: ESWL, RIRS, PCNL".into()),
        tagline: Some("From watchful waiting to laser surgery".into()),
        breadcrumb_title: Some("Kidney Stones".into()),
        short_description: "Complete kidney stone care, from medical expulsion therapy \
            and shock-wave lithotripsy to laser RIRS and mini-PCNL."
            .into(),
        full_description: "Treatment for kidney stones depends on their size, \
            position, hardness and the anatomy of your urinary tract. Our stone \
            clinic offers every established modality so that the treatment is matched \
            to the stone rather than the other way round: medical therapy for small \
            stones, non-invasive shock-wave lithotripsy, scarless laser RIRS, and \
            mini-PCNL for large or complex stones."
            .into(),
        overview: Some(Overview {
            heading: "Which treatment fits which stone?".into(),
            intro: "As a rule of thumb:".into(),
            items: lines(&[
                "Under 5 mm: most pass naturally with medication and fluids",
                "5–15 mm: ESWL or RIRS depending on position and hardness",
                "Over 15 mm or staghorn: mini-PCNL",
                "Ureteric stones with infection: emergency drainage first",
            ]),
        }),
        conditions_heading: Some("Conditions we treat".into()),
        conditions_treated: lines(&[
            "Kidney and ureteric stones of all sizes",
            "Recurrent stone formers needing metabolic work-up",
            "Stones in solitary or transplanted kidneys",
            "Staghorn calculi",
        ]),
        procedure_heading: Some("Our stone pathway".into()),
        procedure_steps: vec![
            step(
                "CT-based diagnosis",
                "A low-dose CT scan sizes and locates every stone and measures its \
                 density, which predicts how it will respond to each treatment.",
            ),
            step(
                "Treatment selection",
                "The urologist discusses the options that fit your stone, with the \
                 trade-offs of each explained clearly.",
            ),
            step(
                "Definitive clearance",
                "Treatment is scheduled promptly; most procedures are day care or a \
                 single night in hospital.",
            ),
            step(
                "Prevention",
                "Stone analysis and a metabolic screen guide a personal prevention \
                 plan, because half of untreated stone formers recur within 5 years.",
            ),
        ],
        benefits_heading: Some("Why choose our stone clinic".into()),
        benefits: lines(&[
            "All modalities available, so no one-size-fits-all surgery",
            "24x7 emergency care for stone pain and infection",
            "Dedicated recurrence-prevention clinic",
        ]),
        risks: vec![],
        recovery_timeline: vec![],
        faq_heading: Some("Kidney stone FAQs".into()),
        faqs: vec![
            faq(
                "Can I just drink more water and wait?",
                "Small stones under 5 mm often pass with fluids and medication, but \
                 stones causing infection, uncontrolled pain or kidney blockage need \
                 urgent treatment regardless of size.",
            ),
            faq(
                "Which treatment has the quickest recovery?",
                "ESWL needs no anaesthesia and no admission, but may need repeat \
                 sessions. RIRS clears suitable stones in a single sitting with a \
                 one-day stay.",
            ),
        ],
        custom_cta: Some(CustomCta {
            heading: "Severe flank pain?".into(),
            description: "Kidney stone pain with fever needs same-day attention. Our \
                urology team is available round the clock."
                .into(),
            button_label: "Call the Emergency Line".into(),
        }),
        meta: Some(TreatmentMeta {
            duration: "Varies by modality".into(),
            anesthesia: "None (ESWL) to general (RIRS, PCNL)".into(),
            hospital_stay: "Outpatient to 2 days".into(),
            recovery_time: "Days to 2 weeks".into(),
            success_rate: None,
        }),
        reviewed_by: Some(Reviewer {
            name: "Dr. Sanjay Rao".into(),
            role: "Consultant Urologist & Endourology Lead".into(),
            experience: "15+ years in laser endourology".into(),
            image: None,
        }),
    }
}
