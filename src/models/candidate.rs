use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub vacancy_id: Option<Uuid>,
    pub vacancy_title: String,
    pub zona: String,
    pub message: String,
    pub answers: Vec<SubmittedAnswer>,
    pub status: CandidateStatus,
    pub created_at: DateTime<Utc>,
}

/// Snapshot of one dynamic question and the applicant's reply, frozen at
/// submission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedAnswer {
    pub question_id: Uuid,
    pub question_text: String,
    pub answer: String,
}

/// Assembled application handed to the store. The store assigns `id`,
/// `status` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCandidate {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub vacancy_id: Option<Uuid>,
    pub vacancy_title: String,
    pub zona: String,
    pub message: String,
    pub answers: Vec<SubmittedAnswer>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStatus {
    #[default]
    Pending,
    Reviewed,
    Contacted,
    Interviewed,
    Hired,
    Rejected,
}

impl CandidateStatus {
    pub const ALL: [CandidateStatus; 6] = [
        CandidateStatus::Pending,
        CandidateStatus::Reviewed,
        CandidateStatus::Contacted,
        CandidateStatus::Interviewed,
        CandidateStatus::Hired,
        CandidateStatus::Rejected,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CandidateStatus::Pending => "pending",
            CandidateStatus::Reviewed => "reviewed",
            CandidateStatus::Contacted => "contacted",
            CandidateStatus::Interviewed => "interviewed",
            CandidateStatus::Hired => "hired",
            CandidateStatus::Rejected => "rejected",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CandidateStatus::Pending => "Pending",
            CandidateStatus::Reviewed => "Reviewed",
            CandidateStatus::Contacted => "Contacted",
            CandidateStatus::Interviewed => "Interviewed",
            CandidateStatus::Hired => "Hired",
            CandidateStatus::Rejected => "Rejected",
        }
    }
}

impl std::str::FromStr for CandidateStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CandidateStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown candidate status: {}", s))
    }
}
