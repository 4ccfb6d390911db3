use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::vacancy::{NewVacancy, Vacancy, VacancyChanges};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVacancyPayload {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
    pub salary: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVacancyPayload {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
    pub salary: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VacancyListQuery {
    pub active_only: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct VacancyListResponse {
    pub items: Vec<Vacancy>,
    pub total: usize,
}

impl From<Vec<Vacancy>> for VacancyListResponse {
    fn from(items: Vec<Vacancy>) -> Self {
        Self {
            total: items.len(),
            items,
        }
    }
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl From<CreateVacancyPayload> for NewVacancy {
    fn from(payload: CreateVacancyPayload) -> Self {
        Self {
            title: payload.title.trim().to_string(),
            description: trimmed(payload.description),
            requirements: trimmed(payload.requirements),
            department: trimmed(payload.department),
            location: trimmed(payload.location),
            salary: trimmed(payload.salary),
        }
    }
}

impl From<UpdateVacancyPayload> for VacancyChanges {
    fn from(payload: UpdateVacancyPayload) -> Self {
        Self {
            title: payload.title.map(|t| t.trim().to_string()),
            description: payload.description,
            requirements: payload.requirements,
            department: payload.department,
            location: payload.location,
            salary: payload.salary,
        }
    }
}
