//! Ophthalmology detail pages.

use super::{faq, lines, step};
use crate::detail::{Overview, Reviewer, TreatmentDetail, TreatmentMeta};

pub(crate) fn cataract_surgery() -> TreatmentDetail {
    TreatmentDetail {
        slug: "cataract-surgery".into(),
        title: "Cataract Surgery – Phacoemulsification with Premium Lenses".into(),
        category: "Ophthalmology".into(),
        department_href: "/departments/ophthalmology".into(),
        subheading: Some("Stitchless micro-incision cataract removal".into()),
        tagline: Some("See clearly again, often within a day".into()),
        breadcrumb_title: Some("Cataract Surgery".into()),
        short_description: "Stitchless phacoemulsification through a 2.2 mm incision \
            with a full range of monofocal, toric and multifocal lens implants."
            .into(),
        full_description: "A cataract clouds the natural lens of the eye, blurring \
            vision and dulling colours. Surgery is the only effective treatment: the \
            cloudy lens is emulsified through a micro-incision and replaced with a \
            clear artificial lens chosen to suit your eyes and lifestyle. The \
            procedure takes about 15 minutes per eye, needs no injections or stitches \
            in routine cases, and most patients notice sharper vision by the next \
            morning."
            .into(),
        overview: Some(Overview {
            heading: "Signs a cataract is ready for surgery".into(),
            intro: "There is no need to wait for a cataract to 'ripen'. Consider \
                surgery when you notice:"
                .into(),
            items: lines(&[
                "Blurred or misty vision despite new glasses",
                "Glare and haloes when driving at night",
                "Colours appearing faded or yellowed",
                "Frequent changes in spectacle prescription",
            ]),
        }),
        conditions_heading: None,
        conditions_treated: lines(&[
            "Age-related cataract",
            "Posterior subcapsular cataract",
            "Cataract after steroid use or diabetes",
            "Traumatic cataract",
        ]),
        procedure_heading: Some("What happens on surgery day".into()),
        procedure_steps: vec![
            step(
                "Biometry and lens selection",
                "Optical biometry measures the eye precisely so the implant power and \
                 type can be tailored to your visual goals.",
            ),
            step(
                "Phacoemulsification",
                "Under topical anaesthetic drops, the cataract is broken up by \
                 ultrasound and removed through a 2.2 mm self-sealing incision.",
            ),
            step(
                "Lens implantation",
                "The folded artificial lens unfurls into the natural lens capsule. No \
                 stitches are needed.",
            ),
        ],
        benefits_heading: Some("Benefits".into()),
        benefits: lines(&[
            "15-minute walk-in, walk-out procedure",
            "No injections, stitches or eye patches in routine cases",
            "Premium lens options can reduce dependence on glasses",
            "Next-day return to most normal activities",
        ]),
        risks: lines(&[
            "Posterior capsule haze months later, treatable with a laser",
            "Infection or swelling (rare, below 1 in 1,000)",
        ]),
        recovery_timeline: lines(&[
            "Day 1: vision already clearer for most patients",
            "Week 1: drops four times daily, avoid rubbing the eye",
            "Week 4: final spectacle check if needed",
        ]),
        faq_heading: Some("Cataract surgery FAQs".into()),
        faqs: vec![
            faq(
                "Is cataract surgery painful?",
                "No. Anaesthetic drops numb the eye completely; you may feel light \
                 touch and see colours moving, but no pain.",
            ),
            faq(
                "Which lens implant should I choose?",
                "Monofocal lenses give excellent distance vision with reading \
                 glasses; toric lenses correct astigmatism; multifocal and extended \
                 depth-of-focus lenses reduce dependence on glasses altogether. Your \
                 surgeon will match the options to your eyes and habits.",
            ),
            faq(
                "When can the second eye be done?",
                "Usually within one to two weeks of the first eye, once early healing \
                 is confirmed.",
            ),
        ],
        custom_cta: None,
        meta: Some(TreatmentMeta {
            duration: "10–15 minutes per eye".into(),
            anesthesia: "Topical drops".into(),
            hospital_stay: "Outpatient".into(),
            recovery_time: "1–7 days".into(),
            success_rate: Some("Better than 99% without complication".into()),
        }),
        reviewed_by: Some(Reviewer {
            name: "Dr. Kavitha Menon".into(),
            role: "Head of Ophthalmology & Cataract Services".into(),
            experience: "20,000+ cataract surgeries".into(),
            image: Some("/images/doctors/kavitha-menon.jpg".into()),
        }),
    }
}
