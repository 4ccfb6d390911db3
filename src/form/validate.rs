use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use super::{handler_for, Answers, ApplicantFields};
use crate::models::question::Question;
use crate::utils::validation::{is_blank, is_plausible_email, is_ten_digit_phone};

pub const FULL_NAME: &str = "fullName";
pub const EMAIL: &str = "email";
pub const PHONE: &str = "phone";
pub const VACANCY_ID: &str = "vacancyId";

pub const MSG_REQUIRED_QUESTION: &str = "This question is required";

pub fn question_key(question_id: Uuid) -> String {
    format!("question_{}", question_id)
}

/// Field key to message. Empty means the form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<String, String>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.0.insert(key.into(), message.into());
    }

    /// Removes one field's error; returns whether there was one.
    pub fn clear(&mut self, key: &str) -> bool {
        self.0.remove(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Checks the whole form and reports every problem at once.
///
/// `vacancy_required` is false when the vacancy came from a direct link.
pub fn validate_application(
    fields: &ApplicantFields,
    vacancy_required: bool,
    questions: &[Question],
    answers: &Answers,
) -> FormErrors {
    let mut errors = FormErrors::new();

    if is_blank(&fields.full_name) {
        errors.insert(FULL_NAME, "Full name is required");
    }

    if is_blank(&fields.email) {
        errors.insert(EMAIL, "Email is required");
    } else if !is_plausible_email(&fields.email) {
        errors.insert(EMAIL, "Enter a valid email address");
    }

    if is_blank(&fields.phone) {
        errors.insert(PHONE, "Phone is required");
    } else if !is_ten_digit_phone(&fields.phone) {
        errors.insert(PHONE, "Enter a valid phone number (10 digits)");
    }

    if vacancy_required && fields.vacancy_id.is_none() {
        errors.insert(VACANCY_ID, "Select a vacancy");
    }

    for question in questions {
        let answer = answers.get(&question.id).map(String::as_str).unwrap_or("");
        if is_blank(answer) {
            if question.required {
                errors.insert(question_key(question.id), MSG_REQUIRED_QUESTION);
            }
            continue;
        }
        if let Some(message) = (handler_for(question.question_type).check)(question, answer) {
            errors.insert(question_key(question.id), message);
        }
    }

    errors
}

pub(crate) fn accept_any(_: &Question, _: &str) -> Option<&'static str> {
    None
}

pub(crate) fn check_number(_: &Question, answer: &str) -> Option<&'static str> {
    match answer.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => None,
        _ => Some("Enter a number"),
    }
}

pub(crate) fn check_date(_: &Question, answer: &str) -> Option<&'static str> {
    match NaiveDate::parse_from_str(answer.trim(), "%Y-%m-%d") {
        Ok(_) => None,
        Err(_) => Some("Enter a valid date (YYYY-MM-DD)"),
    }
}

pub(crate) fn check_single_choice(question: &Question, answer: &str) -> Option<&'static str> {
    if question.options.iter().any(|opt| opt == answer) {
        None
    } else {
        Some("Choose one of the listed options")
    }
}

/// Checkbox answers are the chosen options joined by `", "`.
pub(crate) fn check_multi_choice(question: &Question, answer: &str) -> Option<&'static str> {
    if question.options.iter().any(|opt| opt == answer.trim()) {
        return None;
    }
    let all_listed = split_multi_choice(answer)
        .all(|picked| question.options.iter().any(|opt| opt == picked));
    if all_listed {
        None
    } else {
        Some("Choose only from the listed options")
    }
}

pub fn split_multi_choice(answer: &str) -> impl Iterator<Item = &str> {
    answer
        .split(',')
        .map(str::trim)
        .filter(|picked| !picked.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::QuestionType;

    fn valid_fields() -> ApplicantFields {
        ApplicantFields {
            full_name: "Ana Ruiz".into(),
            email: "ana@x.com".into(),
            phone: "4421234567".into(),
            vacancy_id: Some(Uuid::new_v4()),
            zona: String::new(),
            message: String::new(),
        }
    }

    fn question(question_type: QuestionType, required: bool, options: &[&str]) -> Question {
        Question {
            id: Uuid::new_v4(),
            vacancy_id: Uuid::new_v4(),
            text: "Question".into(),
            question_type,
            required,
            options: options.iter().map(|o| o.to_string()).collect(),
            order: 0,
            created_at: None,
        }
    }

    #[test]
    fn valid_form_has_no_errors() {
        let q = question(QuestionType::Number, true, &[]);
        let mut answers = Answers::new();
        answers.insert(q.id, "5".into());
        let errors = validate_application(&valid_fields(), true, &[q], &answers);
        assert!(errors.is_empty(), "{:?}", errors);
    }

    #[test]
    fn reports_all_fixed_field_problems_together() {
        let fields = ApplicantFields {
            full_name: "   ".into(),
            email: "a@b".into(),
            phone: "12345".into(),
            vacancy_id: None,
            ..Default::default()
        };
        let errors = validate_application(&fields, true, &[], &Answers::new());
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(FULL_NAME));
        assert_eq!(errors.get(EMAIL), Some("Enter a valid email address"));
        assert!(errors.contains(PHONE));
        assert!(errors.contains(VACANCY_ID));
    }

    #[test]
    fn vacancy_is_not_checked_for_preselected_forms() {
        let fields = ApplicantFields {
            vacancy_id: None,
            ..valid_fields()
        };
        assert!(validate_application(&fields, false, &[], &Answers::new()).is_empty());
    }

    #[test]
    fn blank_required_question_yields_one_error() {
        let required = question(QuestionType::Text, true, &[]);
        let optional = question(QuestionType::Text, false, &[]);
        let mut answers = Answers::new();
        answers.insert(required.id, "   ".into());

        let errors = validate_application(
            &valid_fields(),
            true,
            &[required.clone(), optional],
            &answers,
        );
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(&question_key(required.id)),
            Some(MSG_REQUIRED_QUESTION)
        );
    }

    #[test]
    fn typed_answers_are_checked_when_present() {
        let number = question(QuestionType::Number, false, &[]);
        let date = question(QuestionType::Date, false, &[]);
        let select = question(QuestionType::Select, false, &["Morning", "Night"]);
        let checkbox = question(QuestionType::Checkbox, false, &["Forklift", "Crane"]);
        let mut answers = Answers::new();
        answers.insert(number.id, "five".into());
        answers.insert(date.id, "2024-02-30".into());
        answers.insert(select.id, "Evening".into());
        answers.insert(checkbox.id, "Forklift, Truck".into());

        let questions = [number.clone(), date.clone(), select.clone(), checkbox.clone()];
        let errors = validate_application(&valid_fields(), true, &questions, &answers);
        assert_eq!(errors.len(), 4);

        answers.insert(number.id, "3.5".into());
        answers.insert(date.id, "2024-02-29".into());
        answers.insert(select.id, "Night".into());
        answers.insert(checkbox.id, "Forklift, Crane".into());
        let errors = validate_application(&valid_fields(), true, &questions, &answers);
        assert!(errors.is_empty(), "{:?}", errors);
    }

    #[test]
    fn single_checkbox_pick_may_contain_a_comma() {
        let checkbox = question(QuestionType::Checkbox, true, &["Mon, Wed", "Fri"]);
        let mut answers = Answers::new();
        answers.insert(checkbox.id, "Mon, Wed".into());
        let errors = validate_application(&valid_fields(), true, &[checkbox], &answers);
        assert!(errors.is_empty(), "{:?}", errors);
    }

    #[test]
    fn clearing_one_error_leaves_the_rest() {
        let mut errors = FormErrors::new();
        errors.insert(EMAIL, "Email is required");
        errors.insert(PHONE, "Phone is required");
        assert!(errors.clear(EMAIL));
        assert!(!errors.clear(EMAIL));
        assert_eq!(errors.keys().collect::<Vec<_>>(), vec![PHONE]);
    }
}
