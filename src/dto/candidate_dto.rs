use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::candidate::{Candidate, CandidateStatus};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateListQuery {
    pub vacancy_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCandidateStatusPayload {
    pub status: CandidateStatus,
}

#[derive(Debug, Serialize)]
pub struct CandidateListResponse {
    pub items: Vec<Candidate>,
    pub total: usize,
}

impl From<Vec<Candidate>> for CandidateListResponse {
    fn from(items: Vec<Candidate>) -> Self {
        Self {
            total: items.len(),
            items,
        }
    }
}
