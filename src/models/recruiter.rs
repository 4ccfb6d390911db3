use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recruiter {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub extension: Option<String>,
    pub department: Option<String>,
    pub whatsapp: Option<String>,
    pub position: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Full contact card; used both for inserts and for replacing a card.
#[derive(Debug, Clone, PartialEq)]
pub struct RecruiterData {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub extension: Option<String>,
    pub department: Option<String>,
    pub whatsapp: Option<String>,
    pub position: Option<String>,
}
