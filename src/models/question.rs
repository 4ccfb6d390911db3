use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: Uuid,
    pub vacancy_id: Uuid,
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub order: i32,
    pub created_at: Option<DateTime<Utc>>,
}

/// Input kinds an administrator can attach to a vacancy.
///
/// Stored and transported as lowercase tags. Tags this build does not know
/// are read as [`QuestionType::Text`] so an applicant always gets an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QuestionType {
    #[default]
    Text,
    Textarea,
    Number,
    Date,
    Select,
    Radio,
    Checkbox,
}

impl QuestionType {
    pub const ALL: [QuestionType; 7] = [
        QuestionType::Text,
        QuestionType::Textarea,
        QuestionType::Number,
        QuestionType::Date,
        QuestionType::Select,
        QuestionType::Radio,
        QuestionType::Checkbox,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            QuestionType::Text => "text",
            QuestionType::Textarea => "textarea",
            QuestionType::Number => "number",
            QuestionType::Date => "date",
            QuestionType::Select => "select",
            QuestionType::Radio => "radio",
            QuestionType::Checkbox => "checkbox",
        }
    }

    pub fn parse(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "textarea" => QuestionType::Textarea,
            "number" => QuestionType::Number,
            "date" => QuestionType::Date,
            "select" => QuestionType::Select,
            "radio" => QuestionType::Radio,
            "checkbox" => QuestionType::Checkbox,
            _ => QuestionType::Text,
        }
    }

    /// Whether answers are picked from `Question::options`.
    pub fn has_options(self) -> bool {
        matches!(
            self,
            QuestionType::Select | QuestionType::Radio | QuestionType::Checkbox
        )
    }
}

impl From<String> for QuestionType {
    fn from(value: String) -> Self {
        QuestionType::parse(&value)
    }
}

impl From<QuestionType> for String {
    fn from(value: QuestionType) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Question as handed to the store for insertion; the store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewQuestion {
    pub vacancy_id: Uuid,
    pub text: String,
    pub question_type: QuestionType,
    pub required: bool,
    pub options: Vec<String>,
    pub order: i32,
}

/// In-place edit of a question. The display order is left untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionChanges {
    pub text: String,
    pub question_type: QuestionType,
    pub required: bool,
    pub options: Vec<String>,
}

/// Trims option labels, drops blanks, and clears the list for types that do
/// not offer choices.
pub fn normalize_options(question_type: QuestionType, options: Vec<String>) -> Vec<String> {
    if !question_type.has_options() {
        return Vec::new();
    }
    options
        .into_iter()
        .map(|opt| opt.trim().to_string())
        .filter(|opt| !opt.is_empty())
        .collect()
}
