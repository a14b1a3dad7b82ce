//! General & laparoscopic surgery detail pages.

use super::{faq, lines, step};
use crate::detail::{CustomCta, Overview, Reviewer, TreatmentDetail, TreatmentMeta};

/// Canonical page for the legacy `appendectomy` route.
pub(crate) fn appendicitis() -> TreatmentDetail {
    TreatmentDetail {
        slug: "appendicitis".into(),
        title: "Appendectomy – Appendix Removal Surgery".into(),
        category: "General & Laparoscopic Surgery".into(),
        department_href: "/departments/general-surgery".into(),
        subheading: Some("Laparoscopic and open appendix removal".into()),
        tagline: Some("Safe, same-day surgical care for acute appendicitis".into()),
        breadcrumb_title: Some("Appendectomy".into()),
        short_description: "Emergency and planned removal of the inflamed appendix, \
            performed laparoscopically in most cases with a short hospital stay."
            .into(),
        full_description: "Appendicitis is an inflammation of the appendix that usually \
            needs urgent surgical removal. Our general surgery team performs appendectomy \
            as a keyhole (laparoscopic) procedure whenever possible, which means smaller \
            incisions, less post-operative pain and a faster return to normal activity. \
            Open surgery remains available for complicated cases such as a ruptured \
            appendix or abscess formation."
            .into(),
        overview: Some(Overview {
            heading: "When is an appendectomy needed?".into(),
            intro: "Surgery is the standard treatment for acute appendicitis. Typical \
                signs that prompt an urgent surgical review include:"
                .into(),
            items: lines(&[
                "Pain that starts around the navel and settles in the lower right abdomen",
                "Fever with nausea or vomiting",
                "Loss of appetite and abdominal tenderness",
                "Raised infection markers on blood tests",
            ]),
        }),
        conditions_heading: Some("Conditions treated with appendectomy".into()),
        conditions_treated: lines(&[
            "Acute appendicitis",
            "Recurrent (grumbling) appendicitis",
            "Perforated appendix with local abscess",
            "Appendicular mass after conservative treatment",
        ]),
        procedure_heading: Some("How the surgery is performed".into()),
        procedure_steps: vec![
            step(
                "Assessment and imaging",
                "Clinical examination, blood tests and an ultrasound or CT scan \
                 confirm the diagnosis and rule out other causes of abdominal pain.",
            ),
            step(
                "Anaesthesia",
                "The operation is done under general anaesthesia; you are asleep \
                 throughout and feel nothing.",
            ),
            step(
                "Laparoscopic removal",
                "Three small incisions are made and the appendix is freed and removed \
                 through a port. The abdomen is washed out if infection has spread.",
            ),
            step(
                "Recovery and discharge",
                "Most patients walk the same evening and go home within 24 to 48 hours \
                 with simple oral painkillers.",
            ),
        ],
        benefits_heading: Some("Why choose laparoscopic appendectomy".into()),
        benefits: lines(&[
            "Three keyhole incisions instead of one large cut",
            "Discharge within 24 to 48 hours for uncomplicated cases",
            "Lower wound infection rates than open surgery",
            "Return to work or school in about a week",
        ]),
        risks: lines(&[
            "Wound infection or bleeding (uncommon)",
            "Abscess formation if the appendix had already ruptured",
            "Conversion to open surgery in complicated cases",
        ]),
        recovery_timeline: lines(&[
            "Day 1: walking and a light diet",
            "Week 1: back to desk work and school",
            "Week 3: normal activity, avoid heavy lifting until week 6",
        ]),
        faq_heading: Some("Appendectomy FAQs".into()),
        faqs: vec![
            faq(
                "Is appendectomy an emergency?",
                "Usually yes. Delaying surgery for acute appendicitis risks rupture, \
                 which makes the operation and recovery more difficult. Our emergency \
                 theatre list runs around the clock.",
            ),
            faq(
                "Can appendicitis be treated with antibiotics alone?",
                "Selected mild cases can settle with antibiotics, but appendicitis \
                 frequently recurs. Surgery remains the definitive treatment and your \
                 surgeon will discuss both options with you.",
            ),
            faq(
                "Will removing the appendix affect digestion?",
                "No. The appendix has no essential digestive function and its removal \
                 has no long-term effect on your health.",
            ),
        ],
        custom_cta: Some(CustomCta {
            heading: "Sudden abdominal pain?".into(),
            description: "Our emergency department and general surgeons are available \
                24x7 for suspected appendicitis."
                .into(),
            button_label: "Call the Emergency Line".into(),
        }),
        meta: Some(TreatmentMeta {
            duration: "45–60 minutes".into(),
            anesthesia: "General".into(),
            hospital_stay: "1–2 days".into(),
            recovery_time: "1–2 weeks".into(),
            success_rate: Some("Over 98% for uncomplicated cases".into()),
        }),
        reviewed_by: Some(Reviewer {
            name: "Dr. Meera Krishnan".into(),
            role: "Senior Consultant, General & Laparoscopic Surgery".into(),
            experience: "18+ years of laparoscopic surgical practice".into(),
            image: Some("/images/doctors/meera-krishnan.jpg".into()),
        }),
    }
}

/// Canonical page for the legacy `hernia-surgery` route.
pub(crate) fn hernia() -> TreatmentDetail {
    TreatmentDetail {
        slug: "hernia".into(),
        title: "Hernia Repair Surgery".into(),
        category: "General & Laparoscopic Surgery".into(),
        department_href: "/departments/general-surgery".into(),
        subheading: Some("Mesh and laparoscopic repair for all hernia types".into()),
        tagline: None,
        breadcrumb_title: Some("Hernia Surgery".into()),
        short_description: "Tension-free mesh repair of inguinal, umbilical, incisional \
            and hiatus hernias, performed laparoscopically wherever suitable."
            .into(),
        full_description: "A hernia occurs when tissue pushes through a weak point in \
            the abdominal wall. Hernias do not heal on their own and tend to enlarge \
            over time, so surgical repair is recommended for most symptomatic hernias. \
            We offer open and laparoscopic tension-free mesh repair, selecting the \
            approach that best fits the hernia type, its size and your general health."
            .into(),
        overview: Some(Overview {
            heading: "Signs your hernia needs repair".into(),
            intro: "Book a surgical review if you notice:".into(),
            items: lines(&[
                "A bulge in the groin, navel or near an old scar",
                "Discomfort that worsens on coughing, lifting or standing",
                "A bulge that no longer reduces when lying down",
                "Sudden severe pain, which needs emergency attention",
            ]),
        }),
        conditions_heading: Some("Hernia types we repair".into()),
        conditions_treated: lines(&[
            "Inguinal (groin) hernia",
            "Umbilical and paraumbilical hernia",
            "Incisional hernia after previous surgery",
            "Epigastric hernia",
            "Hiatus hernia",
        ]),
        procedure_heading: Some("What happens during hernia repair".into()),
        procedure_steps: vec![
            step(
                "Pre-operative assessment",
                "Examination and, where needed, ultrasound confirm the hernia type and \
                 size. Fitness for anaesthesia is checked in the pre-assessment clinic.",
            ),
            step(
                "Repair and mesh placement",
                "The protruding tissue is returned to the abdomen and the defect is \
                 reinforced with a surgical mesh, giving a low-tension, low-recurrence \
                 repair.",
            ),
            step(
                "Same-day mobilisation",
                "Most repairs are day-case or single-night procedures and you are \
                 walking within hours of surgery.",
            ),
        ],
        benefits_heading: Some("Benefits of tension-free mesh repair".into()),
        benefits: lines(&[
            "Recurrence rates below 2% with modern mesh techniques",
            "Day-case surgery for most groin and umbilical hernias",
            "Laparoscopic option with three small incisions",
            "Quick return to light activity, usually within days",
        ]),
        risks: lines(&[
            "Seroma or bruising around the repair",
            "Chronic groin discomfort (uncommon)",
            "Recurrence, more likely in very large or recurrent hernias",
        ]),
        recovery_timeline: lines(&[
            "Day 0–1: home the same day or next morning",
            "Week 1: light activity and desk work",
            "Week 4–6: gradual return to lifting and sport",
        ]),
        faq_heading: Some("Hernia surgery FAQs".into()),
        faqs: vec![
            faq(
                "Can I delay hernia surgery?",
                "Small painless hernias can sometimes be watched, but hernias enlarge \
                 over time and carry a small risk of strangulation, which is a surgical \
                 emergency. Early planned repair is simpler and safer.",
            ),
            faq(
                "Is the mesh safe?",
                "Surgical mesh has been used for decades and modern lightweight meshes \
                 are well tolerated. Your surgeon will discuss the specific mesh used \
                 for your repair.",
            ),
        ],
        custom_cta: None,
        meta: Some(TreatmentMeta {
            duration: "30–90 minutes depending on hernia type".into(),
            anesthesia: "General or regional".into(),
            hospital_stay: "Day case to 1 night".into(),
            recovery_time: "1–6 weeks depending on activity".into(),
            success_rate: None,
        }),
        reviewed_by: Some(Reviewer {
            name: "Dr. Meera Krishnan".into(),
            role: "Senior Consultant, General & Laparoscopic Surgery".into(),
            experience: "18+ years of laparoscopic surgical practice".into(),
            image: Some("/images/doctors/meera-krishnan.jpg".into()),
        }),
    }
}

pub(crate) fn piles() -> TreatmentDetail {
    TreatmentDetail {
        slug: "piles".into(),
        title: "Piles (Haemorrhoids) Treatment".into(),
        category: "General & Laparoscopic Surgery".into(),
        department_href: "/departments/general-surgery".into(),
        subheading: None,
        tagline: Some("From diet advice to painless laser surgery".into()),
        breadcrumb_title: Some("Piles Treatment".into()),
        short_description: "Graded treatment for haemorrhoids, from banding and \
            injection in clinic to stapled and laser haemorrhoidectomy."
            .into(),
        full_description: "Piles are swollen blood vessels in and around the anal \
            canal. Early grades respond well to dietary change and outpatient \
            procedures such as band ligation, while advanced or prolapsing piles are \
            best treated surgically. Our proctology clinic offers the full range of \
            options, including laser haemorrhoidoplasty for a faster, less painful \
            recovery."
            .into(),
        overview: None,
        conditions_heading: None,
        conditions_treated: lines(&[
            "Grade I–IV internal haemorrhoids",
            "Thrombosed external haemorrhoids",
            "Bleeding per rectum after specialist evaluation",
        ]),
        procedure_heading: Some("Treatment options by grade".into()),
        procedure_steps: vec![
            step(
                "Clinic procedures",
                "Grade I and II piles are treated with rubber band ligation or \
                 sclerotherapy during an outpatient visit, with no anaesthesia needed.",
            ),
            step(
                "Laser haemorrhoidoplasty",
                "A laser fibre shrinks the pile mass from within through a tiny \
                 opening, with minimal post-operative pain.",
            ),
            step(
                "Stapled or excisional surgery",
                "Large prolapsing piles are removed or repositioned under anaesthesia \
                 as a short-stay procedure.",
            ),
        ],
        benefits_heading: Some("Why patients choose our piles clinic".into()),
        benefits: lines(&[
            "Discreet single-visit assessment and grading",
            "Laser option with most patients back to work in 3 days",
            "Day-care surgery for the majority of cases",
        ]),
        risks: vec![],
        recovery_timeline: vec![],
        faq_heading: Some("Piles treatment FAQs".into()),
        faqs: vec![
            faq(
                "Do piles always need surgery?",
                "No. Most early piles settle with fibre, fluids and clinic procedures. \
                 Surgery is reserved for advanced grades or piles that keep coming \
                 back.",
            ),
            faq(
                "Is laser treatment really less painful?",
                "Laser haemorrhoidoplasty avoids cutting and stitching in the \
                 sensitive anal skin, so post-operative pain and recovery time are \
                 significantly reduced compared with conventional surgery.",
            ),
        ],
        custom_cta: None,
        meta: Some(TreatmentMeta {
            duration: "15–45 minutes".into(),
            anesthesia: "None to spinal, depending on procedure".into(),
            hospital_stay: "Outpatient or day care".into(),
            recovery_time: "3–10 days".into(),
            success_rate: None,
        }),
        reviewed_by: None,
    }
}
