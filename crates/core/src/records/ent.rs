//! Ear, nose and throat detail pages.

use super::{faq, lines, step};
use crate::detail::{Overview, Reviewer, TreatmentDetail, TreatmentMeta};

/// Adenoidectomy page.
///
/// The category is pinned to "ENT" as a content correction; the menu this
/// entry is listed under uses the longer department name.
pub(crate) fn adenoidectomy() -> TreatmentDetail {
    TreatmentDetail {
        slug: "adenoidectomy".into(),
        title: "Adenoidectomy – Adenoid Removal for Children".into(),
        category: "ENT".into(),
        department_href: "/departments/ent".into(),
        subheading: Some("Relief from blocked noses, snoring and glue ear".into()),
        tagline: None,
        breadcrumb_title: Some("Adenoidectomy".into()),
        short_description: "Day-care removal of enlarged adenoids in children with \
            persistent nasal blockage, snoring or recurrent ear infections."
            .into(),
        full_description: "Adenoids are a pad of tissue at the back of the nose that \
            can enlarge in childhood and block breathing, cause snoring and contribute \
            to recurring middle-ear infections. When medical treatment fails, removing \
            the adenoids is a short, safe operation performed through the mouth with no \
            external cuts. It is often combined with grommet insertion or \
            tonsillectomy when indicated."
            .into(),
        overview: Some(Overview {
            heading: "When do adenoids need removal?".into(),
            intro: "An ENT surgeon may recommend adenoidectomy for a child with:".into(),
            items: lines(&[
                "Mouth breathing and persistent nasal blockage",
                "Loud snoring or pauses in breathing during sleep",
                "Recurrent middle-ear infections or glue ear",
                "Recurrent sinus infections despite medication",
            ]),
        }),
        conditions_heading: Some("Conditions helped by adenoidectomy".into()),
        conditions_treated: lines(&[
            "Adenoid hypertrophy",
            "Obstructive sleep-disordered breathing",
            "Otitis media with effusion (glue ear)",
            "Chronic adenoiditis",
        ]),
        procedure_heading: Some("What the operation involves".into()),
        procedure_steps: vec![
            step(
                "General anaesthesia",
                "Your child is asleep for the whole procedure, which usually takes \
                 under 30 minutes.",
            ),
            step(
                "Removal through the mouth",
                "The adenoid pad is removed with coblation or curettage through the \
                 open mouth, leaving no visible scars.",
            ),
            step(
                "Same-day discharge",
                "Children eat and drink within hours and nearly all go home the same \
                 day.",
            ),
        ],
        benefits_heading: Some("Benefits".into()),
        benefits: lines(&[
            "No external incisions or visible scarring",
            "Noticeably easier nasal breathing within days",
            "Fewer ear and sinus infections",
            "Better sleep quality and daytime concentration",
        ]),
        risks: lines(&[
            "Minor bleeding in the first 24 hours",
            "Temporary nasal-sounding voice",
            "Regrowth of adenoid tissue (rare)",
        ]),
        recovery_timeline: lines(&[
            "Day 0: home the same evening",
            "Days 1–3: soft diet and rest",
            "Week 1: back to school",
        ]),
        faq_heading: Some("Adenoidectomy FAQs".into()),
        faqs: vec![
            faq(
                "At what age can adenoids be removed?",
                "Adenoidectomy is commonly performed from around age 2 onwards. The \
                 decision depends on symptoms, not age alone.",
            ),
            faq(
                "Will removing adenoids weaken my child's immunity?",
                "No measurable effect on immunity has been shown. Other tissues take \
                 over the adenoids' minor immune role.",
            ),
        ],
        custom_cta: None,
        meta: Some(TreatmentMeta {
            duration: "20–30 minutes".into(),
            anesthesia: "General".into(),
            hospital_stay: "Day care".into(),
            recovery_time: "About 1 week".into(),
            success_rate: None,
        }),
        reviewed_by: Some(Reviewer {
            name: "Dr. Arjun Nair".into(),
            role: "Consultant ENT & Paediatric Airway Surgeon".into(),
            experience: "12+ years in paediatric ENT surgery".into(),
            image: None,
        }),
    }
}

pub(crate) fn tonsillectomy() -> TreatmentDetail {
    TreatmentDetail {
        slug: "tonsillectomy".into(),
        title: "Tonsillectomy – Tonsil Removal Surgery".into(),
        category: "ENT".into(),
        department_href: "/departments/ent".into(),
        subheading: None,
        tagline: None,
        breadcrumb_title: Some("Tonsillectomy".into()),
        short_description: "Coblation tonsillectomy for recurrent tonsillitis and \
            obstructive sleep symptoms, in children and adults."
            .into(),
        full_description: "Tonsillectomy removes the palatine tonsils, usually for \
            repeated attacks of tonsillitis or because enlarged tonsils obstruct \
            breathing during sleep. We use coblation technology, which works at lower \
            temperatures than traditional diathermy and is associated with less \
            post-operative pain."
            .into(),
        overview: None,
        conditions_heading: Some("When tonsillectomy is recommended".into()),
        conditions_treated: lines(&[
            "Recurrent acute tonsillitis (7 or more episodes in a year)",
            "Obstructive sleep apnoea from enlarged tonsils",
            "Peritonsillar abscess (quinsy) after a second episode",
            "Suspected tonsil pathology needing biopsy",
        ]),
        procedure_heading: Some("The procedure".into()),
        procedure_steps: vec![
            step(
                "General anaesthesia",
                "The operation takes 30 to 45 minutes with the patient fully asleep.",
            ),
            step(
                "Coblation removal",
                "Both tonsils are removed through the mouth using a low-temperature \
                 plasma wand, minimising damage to surrounding tissue.",
            ),
            step(
                "Observation and discharge",
                "Patients are observed overnight and discharged after a normal \
                 breakfast.",
            ),
        ],
        benefits_heading: Some("Benefits".into()),
        benefits: lines(&[
            "Definitive end to recurrent tonsillitis",
            "Less pain with coblation than conventional techniques",
            "Improved sleep and breathing where tonsils were obstructive",
        ]),
        risks: lines(&[
            "Throat pain for up to two weeks",
            "Bleeding, occasionally requiring a return to theatre",
        ]),
        recovery_timeline: lines(&[
            "Days 1–3: soft cool diet, regular painkillers",
            "Week 1: ear-ache is common and normal",
            "Week 2: back to school or work",
        ]),
        faq_heading: None,
        faqs: vec![faq(
            "Is tonsillectomy worth it for adults?",
            "Yes, adults with genuinely recurrent tonsillitis benefit just as much as \
             children, although the recovery is typically a few days longer.",
        )],
        custom_cta: None,
        meta: Some(TreatmentMeta {
            duration: "30–45 minutes".into(),
            anesthesia: "General".into(),
            hospital_stay: "1 night".into(),
            recovery_time: "10–14 days".into(),
            success_rate: None,
        }),
        reviewed_by: Some(Reviewer {
            name: "Dr. Arjun Nair".into(),
            role: "Consultant ENT & Paediatric Airway Surgeon".into(),
            experience: "12+ years in paediatric ENT surgery".into(),
            image: None,
        }),
    }
}
