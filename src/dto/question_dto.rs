use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::question::{Question, QuestionType};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuestionPayload {
    #[validate(length(min = 1, max = 500))]
    pub text: String,
    #[serde(rename = "type", default)]
    pub question_type: QuestionType,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub options: Vec<String>,
    /// Appended after the existing questions when absent.
    pub order: Option<i32>,
}

/// Edits in place; absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuestionPayload {
    #[validate(length(min = 1, max = 500))]
    pub text: Option<String>,
    #[serde(rename = "type")]
    pub question_type: Option<QuestionType>,
    pub required: Option<bool>,
    pub options: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub items: Vec<Question>,
    pub total: usize,
}

impl From<Vec<Question>> for QuestionListResponse {
    fn from(items: Vec<Question>) -> Self {
        Self {
            total: items.len(),
            items,
        }
    }
}
