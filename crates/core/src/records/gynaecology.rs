//! Gynaecology detail pages.

use super::{faq, lines, step};
use crate::detail::{Overview, Reviewer, TreatmentDetail, TreatmentMeta};

pub(crate) fn hysterectomy() -> TreatmentDetail {
    TreatmentDetail {
        slug: "hysterectomy".into(),
        title: "Hysterectomy – Laparoscopic Uterus Removal".into(),
        category: "Gynaecology".into(),
        department_href: "/departments/gynaecology".into(),
        subheading: Some("Total laparoscopic hysterectomy with early recovery".into()),
        tagline: None,
        breadcrumb_title: Some("Hysterectomy".into()),
        short_description: "Total laparoscopic hysterectomy for fibroids, adenomyosis \
            and abnormal bleeding, with a two-day stay and early return to activity."
            .into(),
        full_description: "Hysterectomy, removal of the uterus, is recommended when \
            conditions such as large fibroids, adenomyosis or treatment-resistant \
            heavy bleeding no longer respond to medical or uterus-preserving options. \
            Performed laparoscopically through a few small incisions, it avoids the \
            long recovery of open surgery. The ovaries are conserved wherever \
            appropriate so natural hormones are not affected."
            .into(),
        overview: Some(Overview {
            heading: "When is hysterectomy considered?".into(),
            intro: "Surgery is discussed only after simpler options have been \
                explored. Common indications include:"
                .into(),
            items: lines(&[
                "Large or multiple fibroids causing pressure or bleeding",
                "Adenomyosis with severe period pain",
                "Heavy bleeding unresponsive to medication or ablation",
                "Uterine prolapse",
            ]),
        }),
        conditions_heading: Some("Conditions treated".into()),
        conditions_treated: lines(&[
            "Uterine fibroids",
            "Adenomyosis",
            "Dysfunctional uterine bleeding",
            "Endometrial hyperplasia",
            "Uterine prolapse",
        ]),
        procedure_heading: Some("The laparoscopic approach".into()),
        procedure_steps: vec![
            step(
                "Anaesthesia and port placement",
                "Under general anaesthesia, three or four 5–10 mm incisions give \
                 access to the pelvis.",
            ),
            step(
                "Uterus removal",
                "The uterus is freed using advanced energy devices and removed \
                 through the vagina; the vaginal vault is stitched closed \
                 internally.",
            ),
            step(
                "Recovery",
                "Most women walk the same evening, go home on day two, and return to \
                 routine activity within two to three weeks.",
            ),
        ],
        benefits_heading: Some("Benefits of the laparoscopic route".into()),
        benefits: lines(&[
            "Small incisions instead of a 10 cm open cut",
            "Two-day hospital stay for most patients",
            "Less pain and earlier mobilisation",
            "Ovarian conservation preserved where appropriate",
        ]),
        risks: lines(&[
            "Bleeding or injury to bladder, bowel or ureter (rare)",
            "Vaginal vault infection",
            "Conversion to open surgery in difficult pelvises",
        ]),
        recovery_timeline: lines(&[
            "Day 2: discharge home",
            "Week 2: light housework and short walks",
            "Week 6: full activity including exercise",
        ]),
        faq_heading: Some("Hysterectomy FAQs".into()),
        faqs: vec![
            faq(
                "Will I go into menopause after hysterectomy?",
                "Not if the ovaries are conserved, which is our default in \
                 premenopausal women unless there is a reason to remove them. \
                 Periods stop, but hormones continue naturally.",
            ),
            faq(
                "Are there alternatives to hysterectomy?",
                "Often yes: hormonal IUDs, endometrial ablation, and myomectomy for \
                 fibroids. Your gynaecologist will go through every uterus-preserving \
                 option first.",
            ),
        ],
        custom_cta: None,
        meta: Some(TreatmentMeta {
            duration: "60–120 minutes".into(),
            anesthesia: "General".into(),
            hospital_stay: "2 days".into(),
            recovery_time: "2–6 weeks".into(),
            success_rate: None,
        }),
        reviewed_by: Some(Reviewer {
            name: "Dr. Anita Deshmukh".into(),
            role: "Senior Consultant, Gynaecology & Laparoscopic Surgery".into(),
            experience: "22 years in advanced gynaecological surgery".into(),
            image: None,
        }),
    }
}
