use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::position::PositionData;
use crate::models::recruiter::RecruiterData;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecruiterPayload {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub extension: Option<String>,
    pub department: Option<String>,
    pub whatsapp: Option<String>,
    pub position: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PositionPayload {
    #[validate(length(min = 1, max = 200))]
    pub position: String,
    pub department: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PositionQuery {
    pub department: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DepartmentsResponse {
    pub items: Vec<String>,
}

fn cleaned(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl From<RecruiterPayload> for RecruiterData {
    fn from(payload: RecruiterPayload) -> Self {
        Self {
            name: payload.name.trim().to_string(),
            email: cleaned(payload.email),
            phone: cleaned(payload.phone),
            extension: cleaned(payload.extension),
            department: cleaned(payload.department),
            whatsapp: cleaned(payload.whatsapp),
            position: cleaned(payload.position),
        }
    }
}

impl From<PositionPayload> for PositionData {
    fn from(payload: PositionPayload) -> Self {
        Self {
            position: payload.position.trim().to_string(),
            department: cleaned(payload.department),
        }
    }
}
