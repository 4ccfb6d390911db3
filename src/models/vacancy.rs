use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vacancy {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
    pub salary: Option<String>,
    pub active: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewVacancy {
    pub title: String,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
    pub salary: Option<String>,
}

/// Partial update; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VacancyChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
    pub salary: Option<String>,
}
