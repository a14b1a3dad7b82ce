//! Orthopaedic and joint replacement detail pages.

use super::{faq, lines, step};
use crate::detail::{CustomCta, Overview, Reviewer, TreatmentDetail, TreatmentMeta};

pub(crate) fn knee_replacement() -> TreatmentDetail {
    TreatmentDetail {
        slug: "knee-replacement".into(),
        title: "Total Knee Replacement Surgery".into(),
        category: "Orthopaedics & Joint Replacement".into(),
        department_href: "/departments/orthopaedics".into(),
        subheading: Some("Computer-assisted knee replacement with rapid recovery".into()),
        tagline: Some("Walk within 24 hours of surgery".into()),
        breadcrumb_title: Some("Knee Replacement".into()),
        short_description: "Total and partial knee replacement using computer-assisted \
            alignment, high-flex implants and an enhanced recovery programme."
            .into(),
        full_description: "Knee replacement resurfaces the worn ends of the thigh and \
            shin bones with metal and polyethylene components, relieving the pain of \
            advanced arthritis and restoring mobility. Our joint replacement unit \
            performs both total and partial (unicondylar) replacement, using \
            computer-assisted alignment for precise implant positioning. An enhanced \
            recovery protocol has most patients standing on the day of surgery and \
            climbing stairs before discharge."
            .into(),
        overview: Some(Overview {
            heading: "Is a knee replacement right for you?".into(),
            intro: "Replacement is considered when arthritis limits daily life despite \
                medication and physiotherapy. Common signs include:"
                .into(),
            items: lines(&[
                "Knee pain that disturbs sleep or limits walking distance",
                "Stiffness and swelling that no longer respond to medication",
                "Visible bowing of the leg",
                "Dependence on a stick or support for daily activities",
            ]),
        }),
        conditions_heading: Some("Conditions treated".into()),
        conditions_treated: lines(&[
            "Osteoarthritis of the knee",
            "Rheumatoid arthritis",
            "Post-traumatic arthritis",
            "Avascular necrosis of the femoral condyle",
        ]),
        procedure_heading: Some("Your surgical journey".into()),
        procedure_steps: vec![
            step(
                "Pre-habilitation",
                "Strengthening exercises, dental and medical checks in the weeks \
                 before surgery shorten your recovery afterwards.",
            ),
            step(
                "Implantation",
                "Through a midline incision the worn surfaces are removed and the \
                 implants are fixed with bone cement, guided by computer navigation.",
            ),
            step(
                "Enhanced recovery",
                "You stand and take your first steps within hours, supported by the \
                 physiotherapy team twice daily until discharge.",
            ),
            step(
                "Follow-up",
                "Review at 2 and 6 weeks, with a structured physiotherapy plan to \
                 reach a 120-degree bend or better.",
            ),
        ],
        benefits_heading: Some("Benefits of our knee replacement programme".into()),
        benefits: lines(&[
            "Lasting pain relief: over 90% of implants survive 15 years",
            "Computer-assisted alignment for a natural-feeling knee",
            "Walking with support within 24 hours",
            "3 to 4 day hospital stay under the enhanced recovery protocol",
        ]),
        risks: lines(&[
            "Infection (below 1% with laminar-flow theatres)",
            "Blood clots, minimised with early walking and blood thinners",
            "Stiffness needing additional physiotherapy",
            "Implant wear or loosening in the long term",
        ]),
        recovery_timeline: lines(&[
            "Day 0–1: standing and walking with a frame",
            "Week 2: staples out, walking indoors with a stick",
            "Week 6: driving and most daily activities",
            "Month 3: low-impact sport such as swimming and cycling",
        ]),
        faq_heading: Some("Knee replacement FAQs".into()),
        faqs: vec![
            faq(
                "How long will the new knee last?",
                "Modern implants last 15 to 20 years or more in most patients. \
                 Partial replacements in younger patients may need revision earlier.",
            ),
            faq(
                "How painful is the recovery?",
                "Multimodal pain relief, including local anaesthetic infiltration \
                 around the knee, keeps most patients comfortable enough to walk on \
                 the first day.",
            ),
            faq(
                "Can both knees be replaced together?",
                "Simultaneous bilateral replacement is offered to fit patients after \
                 anaesthetic assessment, saving a second admission and recovery \
                 period.",
            ),
        ],
        custom_cta: Some(CustomCta {
            heading: "Get a second opinion on your knee".into(),
            description: "Bring your X-rays for a free review by our joint \
                replacement team."
                .into(),
            button_label: "Book a Joint Clinic Visit".into(),
        }),
        meta: Some(TreatmentMeta {
            duration: "60–90 minutes per knee".into(),
            anesthesia: "Spinal with sedation, or general".into(),
            hospital_stay: "3–4 days".into(),
            recovery_time: "6 weeks to daily activities".into(),
            success_rate: Some("90%+ implant survival at 15 years".into()),
        }),
        reviewed_by: Some(Reviewer {
            name: "Dr. Vikram Shetty".into(),
            role: "Director, Orthopaedics & Joint Replacement".into(),
            experience: "Over 4,000 joint replacements performed".into(),
            image: Some("/images/doctors/vikram-shetty.jpg".into()),
        }),
    }
}

pub(crate) fn shoulder_replacement() -> TreatmentDetail {
    TreatmentDetail {
        slug: "shoulder-replacement".into(),
        title: "Shoulder Replacement Surgery".into(),
        category: "Orthopaedics & Joint Replacement".into(),
        department_href: "/departments/orthopaedics".into(),
        subheading: Some("Anatomic and reverse shoulder replacement".into()),
        tagline: None,
        breadcrumb_title: Some("Shoulder Replacement".into()),
        short_description: "Anatomic and reverse total shoulder replacement for \
            advanced arthritis and irreparable rotator cuff damage."
            .into(),
        full_description: "Shoulder replacement substitutes the damaged ball and \
            socket of the shoulder with smooth artificial surfaces. An anatomic \
            replacement reproduces normal anatomy when the rotator cuff tendons are \
            intact, while a reverse replacement changes the joint's geometry so the \
            deltoid muscle can power the arm when the cuff is beyond repair."
            .into(),
        overview: None,
        conditions_heading: Some("Conditions treated".into()),
        conditions_treated: lines(&[
            "Osteoarthritis of the shoulder",
            "Cuff-tear arthropathy",
            "Complex proximal humerus fractures",
            "Failed previous shoulder surgery",
        ]),
        procedure_heading: Some("How shoulder replacement works".into()),
        procedure_steps: vec![
            step(
                "Planning CT scan",
                "A three-dimensional scan is used to template implant size and \
                 position before the operation.",
            ),
            step(
                "Replacement",
                "Through a front-of-shoulder incision the worn joint surfaces are \
                 replaced; anatomic or reverse geometry is chosen according to the \
                 state of the rotator cuff.",
            ),
            step(
                "Sling and staged rehabilitation",
                "The arm rests in a sling for 3 to 4 weeks while a staged \
                 physiotherapy programme restores motion and then strength.",
            ),
        ],
        benefits_heading: Some("Benefits".into()),
        benefits: lines(&[
            "Reliable relief of arthritic shoulder pain",
            "Restored overhead reach for dressing and daily tasks",
            "Reverse option for shoulders previously considered untreatable",
        ]),
        risks: lines(&[
            "Infection or bleeding (uncommon)",
            "Nerve irritation around the shoulder",
            "Implant loosening over many years",
        ]),
        recovery_timeline: lines(&[
            "Weeks 1–4: sling, pendulum exercises",
            "Weeks 4–8: active movement without resistance",
            "Month 3 onward: strengthening and return to most activities",
        ]),
        faq_heading: Some("Shoulder replacement FAQs".into()),
        faqs: vec![faq(
            "What is the difference between anatomic and reverse replacement?",
            "An anatomic replacement copies your normal joint and relies on intact \
             rotator cuff tendons. A reverse replacement swaps the ball and socket \
             positions so the deltoid muscle lifts the arm instead, which is the \
             better choice when the cuff is torn beyond repair.",
        )],
        custom_cta: None,
        meta: Some(TreatmentMeta {
            duration: "90–120 minutes".into(),
            anesthesia: "General with nerve block".into(),
            hospital_stay: "2–3 days".into(),
            recovery_time: "3–6 months for full benefit".into(),
            success_rate: None,
        }),
        reviewed_by: Some(Reviewer {
            name: "Dr. Vikram Shetty".into(),
            role: "Director, Orthopaedics & Joint Replacement".into(),
            experience: "Over 4,000 joint replacements performed".into(),
            image: Some("/images/doctors/vikram-shetty.jpg".into()),
        }),
    }
}

pub(crate) fn rotator_cuff_repair() -> TreatmentDetail {
    TreatmentDetail {
        slug: "rotator-cuff-repair".into(),
        title: "Arthroscopic Rotator Cuff Repair".into(),
        category: "Orthopaedics & Joint Replacement".into(),
        department_href: "/departments/orthopaedics".into(),
        subheading: None,
        tagline: Some("Keyhole repair of torn shoulder tendons".into()),
        breadcrumb_title: Some("Rotator Cuff Repair".into()),
        short_description: "Keyhole repair of torn rotator cuff tendons using suture \
            anchors, restoring pain-free overhead movement."
            .into(),
        full_description: "The rotator cuff is the group of tendons that controls \
            shoulder movement. Tears cause pain, night ache and weakness, and \
            full-thickness tears rarely heal on their own. Arthroscopic repair \
            reattaches the torn tendon to the bone with small anchors through keyhole \
            incisions, avoiding the large open approaches of the past."
            .into(),
        overview: Some(Overview {
            heading: "Signs of a rotator cuff tear".into(),
            intro: "An MRI-confirmed tear with any of the following usually merits \
                repair:"
                .into(),
            items: lines(&[
                "Night pain on the affected shoulder",
                "Weak or painful overhead reach",
                "Loss of strength after a fall or lifting injury",
            ]),
        }),
        conditions_heading: None,
        conditions_treated: lines(&[
            "Full-thickness rotator cuff tears",
            "Partial tears failing conservative care",
            "Cuff tears with biceps tendon involvement",
        ]),
        procedure_heading: Some("The keyhole repair".into()),
        procedure_steps: vec![
            step(
                "Arthroscopic assessment",
                "A camera through a 5 mm incision maps the tear and any associated \
                 damage.",
            ),
            step(
                "Anchor repair",
                "Small anchors loaded with strong sutures pull the tendon back to its \
                 footprint on the bone and hold it while it heals.",
            ),
            step(
                "Protected rehabilitation",
                "A sling protects the repair for 4 to 6 weeks before staged \
                 physiotherapy begins.",
            ),
        ],
        benefits_heading: Some("Benefits".into()),
        benefits: lines(&[
            "Keyhole incisions and day-case surgery",
            "Durable tendon healing with modern anchor techniques",
            "Return of overhead strength in most patients",
        ]),
        risks: lines(&[
            "Stiffness during early rehabilitation",
            "Re-tear, more likely in large chronic tears",
        ]),
        recovery_timeline: lines(&[
            "Weeks 1–6: sling with passive exercises",
            "Weeks 6–12: active movement",
            "Months 4–6: strengthening and sport",
        ]),
        faq_heading: None,
        faqs: vec![faq(
            "Can a cuff tear be managed without surgery?",
            "Partial tears and some small tears in older, low-demand shoulders do \
             well with physiotherapy and injections. Full-thickness tears in active \
             patients tend to enlarge, so earlier repair gives better results.",
        )],
        custom_cta: None,
        meta: Some(TreatmentMeta {
            duration: "60–90 minutes".into(),
            anesthesia: "General with nerve block".into(),
            hospital_stay: "Day care".into(),
            recovery_time: "4–6 months".into(),
            success_rate: None,
        }),
        reviewed_by: None,
    }
}
