//! Dynamic application form: per-vacancy questions rendered as typed controls,
//! validated together with the fixed applicant fields, and assembled into a
//! candidate submission.

pub mod assemble;
pub mod render;
pub mod session;
pub mod validate;

use std::collections::HashMap;

use uuid::Uuid;

use crate::models::question::{Question, QuestionType};

pub use session::{FixedField, FormSession, FormStatus, SubmitOutcome, VacancyMode};
pub use validate::FormErrors;

/// Applicant replies keyed by question id. Every value is carried as text.
pub type Answers = HashMap<Uuid, String>;

/// Fields every application carries regardless of the vacancy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicantFields {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub vacancy_id: Option<Uuid>,
    pub zona: String,
    pub message: String,
}

/// Rendering and answer checking for one question type.
pub struct TypeHandler {
    pub render: fn(&Question) -> render::Control,
    /// Returns a message when a non-blank answer is not acceptable.
    pub check: fn(&Question, &str) -> Option<&'static str>,
}

// Indexed by `QuestionType as usize`; keep in declaration order.
static TYPE_HANDLERS: [TypeHandler; 7] = [
    TypeHandler {
        render: render::text_input,
        check: validate::accept_any,
    },
    TypeHandler {
        render: render::text_area,
        check: validate::accept_any,
    },
    TypeHandler {
        render: render::number_input,
        check: validate::check_number,
    },
    TypeHandler {
        render: render::date_picker,
        check: validate::check_date,
    },
    TypeHandler {
        render: render::dropdown,
        check: validate::check_single_choice,
    },
    TypeHandler {
        render: render::radio_group,
        check: validate::check_single_choice,
    },
    TypeHandler {
        render: render::checkbox_group,
        check: validate::check_multi_choice,
    },
];

pub fn handler_for(question_type: QuestionType) -> &'static TypeHandler {
    &TYPE_HANDLERS[question_type as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_type_has_a_handler_in_table_order() {
        for (idx, kind) in QuestionType::ALL.iter().enumerate() {
            assert_eq!(*kind as usize, idx);
            let _ = handler_for(*kind);
        }
    }
}
