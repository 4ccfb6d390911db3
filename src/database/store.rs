use async_trait::async_trait;
use uuid::Uuid;

use crate::models::candidate::{Candidate, CandidateStatus, NewCandidate};
use crate::models::improvement_request::{
    ImprovementRequest, NewImprovementRequest, RequestChanges,
};
use crate::models::position::{Position, PositionData};
use crate::models::question::{NewQuestion, Question, QuestionChanges};
use crate::models::recruiter::{Recruiter, RecruiterData};
use crate::models::vacancy::{NewVacancy, Vacancy, VacancyChanges};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            other => StoreError::Unavailable(other.to_string()),
        }
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Document store backing the portal.
///
/// Implementations assign identifiers and timestamps. Listing operations return
/// records in the store's natural order for that collection:
/// questions in insertion order, vacancies/candidates/requests newest first,
/// recruiters by name, positions by department then title.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PortalStore: Send + Sync {
    async fn list_questions(&self, vacancy_id: Uuid) -> StoreResult<Vec<Question>>;
    async fn get_question(&self, id: Uuid) -> StoreResult<Option<Question>>;
    async fn create_question(&self, question: NewQuestion) -> StoreResult<Question>;
    async fn update_question(&self, id: Uuid, changes: QuestionChanges) -> StoreResult<()>;
    async fn delete_question(&self, id: Uuid) -> StoreResult<()>;
    async fn delete_questions_for_vacancy(&self, vacancy_id: Uuid) -> StoreResult<()>;

    async fn list_vacancies(&self, active_only: bool) -> StoreResult<Vec<Vacancy>>;
    async fn get_vacancy(&self, id: Uuid) -> StoreResult<Option<Vacancy>>;
    async fn create_vacancy(&self, vacancy: NewVacancy) -> StoreResult<Vacancy>;
    async fn update_vacancy(&self, id: Uuid, changes: VacancyChanges) -> StoreResult<Vacancy>;
    async fn set_vacancy_active(&self, id: Uuid, active: bool) -> StoreResult<()>;
    /// Removes the vacancy together with its questions as one unit.
    async fn delete_vacancy(&self, id: Uuid) -> StoreResult<()>;

    async fn create_candidate(&self, candidate: NewCandidate) -> StoreResult<Candidate>;
    async fn list_candidates(&self, vacancy_id: Option<Uuid>) -> StoreResult<Vec<Candidate>>;
    async fn get_candidate(&self, id: Uuid) -> StoreResult<Option<Candidate>>;
    async fn update_candidate_status(&self, id: Uuid, status: CandidateStatus)
        -> StoreResult<()>;
    async fn delete_candidate(&self, id: Uuid) -> StoreResult<()>;

    async fn list_recruiters(&self) -> StoreResult<Vec<Recruiter>>;
    async fn create_recruiter(&self, recruiter: RecruiterData) -> StoreResult<Recruiter>;
    async fn update_recruiter(&self, id: Uuid, recruiter: RecruiterData)
        -> StoreResult<Recruiter>;
    async fn delete_recruiter(&self, id: Uuid) -> StoreResult<()>;

    async fn list_positions(&self) -> StoreResult<Vec<Position>>;
    async fn create_position(&self, position: PositionData) -> StoreResult<Position>;
    async fn update_position(&self, id: Uuid, position: PositionData) -> StoreResult<Position>;
    async fn delete_position(&self, id: Uuid) -> StoreResult<()>;

    async fn list_improvement_requests(
        &self,
        user_email: Option<String>,
    ) -> StoreResult<Vec<ImprovementRequest>>;
    async fn get_improvement_request(&self, id: Uuid) -> StoreResult<Option<ImprovementRequest>>;
    async fn create_improvement_request(
        &self,
        request: NewImprovementRequest,
    ) -> StoreResult<ImprovementRequest>;
    async fn update_improvement_request(
        &self,
        id: Uuid,
        changes: RequestChanges,
    ) -> StoreResult<ImprovementRequest>;
    async fn delete_improvement_request(&self, id: Uuid) -> StoreResult<()>;
}
