//! Hand-authored detail records, grouped by department.
//!
//! Each function builds the complete page content for one canonical slug.
//! These are authored marketing/medical copy, not derived data; the registry
//! in [`crate::registry`] maps canonical slugs onto these factories so that
//! records are only constructed when requested.

pub(crate) mod ent;
pub(crate) mod general_surgery;
pub(crate) mod gynaecology;
pub(crate) mod ophthalmology;
pub(crate) mod orthopaedics;
pub(crate) mod urology;

use crate::detail::{Faq, ProcedureStep};

fn step(title: &str, description: &str) -> ProcedureStep {
    ProcedureStep {
        title: title.into(),
        description: description.into(),
    }
}

fn faq(question: &str, answer: &str) -> Faq {
    Faq {
        question: question.into(),
        answer: answer.into(),
    }
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
