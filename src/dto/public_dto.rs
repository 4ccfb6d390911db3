use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::form::render::RenderedQuestion;
use crate::form::{Answers, ApplicantFields};
use crate::models::vacancy::Vacancy;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormQuery {
    pub vacancy_id: Option<Uuid>,
}

/// Everything a client needs to draw the application form.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSchemaResponse {
    pub mode: &'static str,
    pub vacancy_id: Option<Uuid>,
    pub vacancy: Option<Vacancy>,
    /// Active vacancies to pick from; empty for a pre-selected form.
    pub vacancies: Vec<Vacancy>,
    pub questions: Vec<RenderedQuestion>,
}

/// A single answer, or the picks of a checkbox group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    One(String),
    Many(Vec<String>),
}

impl AnswerValue {
    pub fn into_text(self) -> String {
        match self {
            AnswerValue::One(text) => text,
            AnswerValue::Many(picks) => picks.join(", "),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationPayload {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub vacancy_id: Option<Uuid>,
    #[serde(default)]
    pub zona: String,
    #[serde(default)]
    pub message: String,
    /// Keyed by question id, either bare or as the rendered field name.
    #[serde(default)]
    pub answers: HashMap<String, AnswerValue>,
}

impl ApplicationPayload {
    pub fn applicant_fields(&self) -> ApplicantFields {
        ApplicantFields {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            vacancy_id: self.vacancy_id,
            zona: self.zona.clone(),
            message: self.message.clone(),
        }
    }

    /// Answers whose key names a question; anything else is dropped. When a
    /// question is sent under both key forms, `question_<id>` wins.
    pub fn parsed_answers(&self) -> Answers {
        let mut answers = Answers::new();
        for (key, value) in &self.answers {
            let (raw, field_name) = match key.strip_prefix("question_") {
                Some(raw) => (raw, true),
                None => (key.as_str(), false),
            };
            let Ok(id) = Uuid::parse_str(raw) else {
                continue;
            };
            if field_name || !answers.contains_key(&id) {
                answers.insert(id, value.clone().into_text());
            }
        }
        answers
    }
}
