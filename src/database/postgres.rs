use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::store::{PortalStore, StoreError, StoreResult};
use crate::models::candidate::{Candidate, CandidateStatus, NewCandidate, SubmittedAnswer};
use crate::models::improvement_request::{
    ImprovementRequest, NewImprovementRequest, RequestChanges,
};
use crate::models::position::{Position, PositionData};
use crate::models::question::{NewQuestion, Question, QuestionChanges, QuestionType};
use crate::models::recruiter::{Recruiter, RecruiterData};
use crate::models::vacancy::{NewVacancy, Vacancy, VacancyChanges};

const QUESTION_COLUMNS: &str =
    "id, vacancy_id, text, question_type, required, options, sort_order, created_at";
const VACANCY_COLUMNS: &str =
    "id, title, description, requirements, department, location, salary, active, created_at, updated_at";
const CANDIDATE_COLUMNS: &str =
    "id, full_name, email, phone, vacancy_id, vacancy_title, zona, message, answers, status, created_at";
const RECRUITER_COLUMNS: &str =
    "id, name, email, phone, extension, department, whatsapp, position, created_at";
const POSITION_COLUMNS: &str = "id, position, department, created_at";
const REQUEST_COLUMNS: &str = "id, title, description, priority, category, status, user_email, user_name, assigned_to, admin_response, created_at, updated_at";

/// PostgreSQL-backed [`PortalStore`].
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct QuestionRow {
    id: Uuid,
    vacancy_id: Uuid,
    text: String,
    question_type: String,
    required: bool,
    options: Json<Vec<String>>,
    sort_order: Option<i32>,
    created_at: Option<DateTime<Utc>>,
}

impl From<QuestionRow> for Question {
    fn from(row: QuestionRow) -> Self {
        Self {
            id: row.id,
            vacancy_id: row.vacancy_id,
            text: row.text,
            question_type: QuestionType::parse(&row.question_type),
            required: row.required,
            options: row.options.0,
            order: row.sort_order.unwrap_or(0),
            created_at: row.created_at,
        }
    }
}

#[derive(FromRow)]
struct CandidateRow {
    id: Uuid,
    full_name: String,
    email: String,
    phone: String,
    vacancy_id: Option<Uuid>,
    vacancy_title: String,
    zona: String,
    message: String,
    answers: Json<Vec<SubmittedAnswer>>,
    status: String,
    created_at: DateTime<Utc>,
}

impl From<CandidateRow> for Candidate {
    fn from(row: CandidateRow) -> Self {
        Self {
            id: row.id,
            full_name: row.full_name,
            email: row.email,
            phone: row.phone,
            vacancy_id: row.vacancy_id,
            vacancy_title: row.vacancy_title,
            zona: row.zona,
            message: row.message,
            answers: row.answers.0,
            status: row.status.parse().unwrap_or_default(),
            created_at: row.created_at,
        }
    }
}

#[derive(FromRow)]
struct RequestRow {
    id: Uuid,
    title: String,
    description: String,
    priority: String,
    category: String,
    status: String,
    user_email: String,
    user_name: String,
    assigned_to: Option<String>,
    admin_response: Option<String>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl From<RequestRow> for ImprovementRequest {
    fn from(row: RequestRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            priority: row.priority.parse().unwrap_or_default(),
            category: row.category.parse().unwrap_or_default(),
            status: row.status.parse().unwrap_or_default(),
            user_email: row.user_email,
            user_name: row.user_name,
            assigned_to: row.assigned_to,
            admin_response: row.admin_response,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(FromRow)]
struct VacancyRow {
    id: Uuid,
    title: String,
    description: Option<String>,
    requirements: Option<String>,
    department: Option<String>,
    location: Option<String>,
    salary: Option<String>,
    active: bool,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl From<VacancyRow> for Vacancy {
    fn from(row: VacancyRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            requirements: row.requirements,
            department: row.department,
            location: row.location,
            salary: row.salary,
            active: row.active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(FromRow)]
struct RecruiterRow {
    id: Uuid,
    name: String,
    email: Option<String>,
    phone: Option<String>,
    extension: Option<String>,
    department: Option<String>,
    whatsapp: Option<String>,
    position: Option<String>,
    created_at: Option<DateTime<Utc>>,
}

impl From<RecruiterRow> for Recruiter {
    fn from(row: RecruiterRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            extension: row.extension,
            department: row.department,
            whatsapp: row.whatsapp,
            position: row.position,
            created_at: row.created_at,
        }
    }
}

#[derive(FromRow)]
struct PositionRow {
    id: Uuid,
    position: String,
    department: Option<String>,
    created_at: Option<DateTime<Utc>>,
}

impl From<PositionRow> for Position {
    fn from(row: PositionRow) -> Self {
        Self {
            id: row.id,
            position: row.position,
            department: row.department,
            created_at: row.created_at,
        }
    }
}

fn affected(rows: u64) -> StoreResult<()> {
    if rows == 0 {
        Err(StoreError::NotFound)
    } else {
        Ok(())
    }
}

#[async_trait]
impl PortalStore for PgStore {
    async fn list_questions(&self, vacancy_id: Uuid) -> StoreResult<Vec<Question>> {
        let sql = format!(
            "SELECT {} FROM questions WHERE vacancy_id = $1 ORDER BY seq",
            QUESTION_COLUMNS
        );
        let rows = sqlx::query_as::<_, QuestionRow>(&sql)
            .bind(vacancy_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get_question(&self, id: Uuid) -> StoreResult<Option<Question>> {
        let sql = format!("SELECT {} FROM questions WHERE id = $1", QUESTION_COLUMNS);
        let row = sqlx::query_as::<_, QuestionRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Into::into))
    }

    async fn create_question(&self, question: NewQuestion) -> StoreResult<Question> {
        let sql = format!(
            "INSERT INTO questions (vacancy_id, text, question_type, required, options, sort_order)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {}",
            QUESTION_COLUMNS
        );
        let row = sqlx::query_as::<_, QuestionRow>(&sql)
            .bind(question.vacancy_id)
            .bind(question.text)
            .bind(question.question_type.as_str())
            .bind(question.required)
            .bind(Json(question.options))
            .bind(question.order)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into())
    }

    async fn update_question(&self, id: Uuid, changes: QuestionChanges) -> StoreResult<()> {
        let result = sqlx::query(
            "UPDATE questions
             SET text = $2, question_type = $3, required = $4, options = $5
             WHERE id = $1",
        )
        .bind(id)
        .bind(changes.text)
        .bind(changes.question_type.as_str())
        .bind(changes.required)
        .bind(Json(changes.options))
        .execute(&self.pool)
        .await?;
        affected(result.rows_affected())
    }

    async fn delete_question(&self, id: Uuid) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        affected(result.rows_affected())
    }

    async fn delete_questions_for_vacancy(&self, vacancy_id: Uuid) -> StoreResult<()> {
        sqlx::query("DELETE FROM questions WHERE vacancy_id = $1")
            .bind(vacancy_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn list_vacancies(&self, active_only: bool) -> StoreResult<Vec<Vacancy>> {
        let filter = if active_only { "WHERE active = TRUE" } else { "" };
        let sql = format!(
            "SELECT {} FROM vacancies {} ORDER BY created_at DESC",
            VACANCY_COLUMNS, filter
        );
        let rows = sqlx::query_as::<_, VacancyRow>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get_vacancy(&self, id: Uuid) -> StoreResult<Option<Vacancy>> {
        let sql = format!("SELECT {} FROM vacancies WHERE id = $1", VACANCY_COLUMNS);
        let row = sqlx::query_as::<_, VacancyRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Into::into))
    }

    async fn create_vacancy(&self, vacancy: NewVacancy) -> StoreResult<Vacancy> {
        let sql = format!(
            "INSERT INTO vacancies (title, description, requirements, department, location, salary, active)
             VALUES ($1, $2, $3, $4, $5, $6, TRUE)
             RETURNING {}",
            VACANCY_COLUMNS
        );
        let row = sqlx::query_as::<_, VacancyRow>(&sql)
            .bind(vacancy.title)
            .bind(vacancy.description)
            .bind(vacancy.requirements)
            .bind(vacancy.department)
            .bind(vacancy.location)
            .bind(vacancy.salary)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into())
    }

    async fn update_vacancy(&self, id: Uuid, changes: VacancyChanges) -> StoreResult<Vacancy> {
        let sql = format!(
            "UPDATE vacancies
             SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                requirements = COALESCE($4, requirements),
                department = COALESCE($5, department),
                location = COALESCE($6, location),
                salary = COALESCE($7, salary),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {}",
            VACANCY_COLUMNS
        );
        let row = sqlx::query_as::<_, VacancyRow>(&sql)
            .bind(id)
            .bind(changes.title)
            .bind(changes.description)
            .bind(changes.requirements)
            .bind(changes.department)
            .bind(changes.location)
            .bind(changes.salary)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into())
    }

    async fn set_vacancy_active(&self, id: Uuid, active: bool) -> StoreResult<()> {
        let result =
            sqlx::query("UPDATE vacancies SET active = $2, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .bind(active)
                .execute(&self.pool)
                .await?;
        affected(result.rows_affected())
    }

    async fn delete_vacancy(&self, id: Uuid) -> StoreResult<()> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM questions WHERE vacancy_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let result = sqlx::query("DELETE FROM vacancies WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(StoreError::NotFound);
        }
        tx.commit().await?;
        Ok(())
    }

    async fn create_candidate(&self, candidate: NewCandidate) -> StoreResult<Candidate> {
        let sql = format!(
            "INSERT INTO candidates (full_name, email, phone, vacancy_id, vacancy_title, zona, message, answers, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {}",
            CANDIDATE_COLUMNS
        );
        let row = sqlx::query_as::<_, CandidateRow>(&sql)
            .bind(candidate.full_name)
            .bind(candidate.email)
            .bind(candidate.phone)
            .bind(candidate.vacancy_id)
            .bind(candidate.vacancy_title)
            .bind(candidate.zona)
            .bind(candidate.message)
            .bind(Json(candidate.answers))
            .bind(CandidateStatus::Pending.as_str())
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into())
    }

    async fn list_candidates(&self, vacancy_id: Option<Uuid>) -> StoreResult<Vec<Candidate>> {
        let sql = format!(
            "SELECT {} FROM candidates
             WHERE ($1::uuid IS NULL OR vacancy_id = $1)
             ORDER BY created_at DESC",
            CANDIDATE_COLUMNS
        );
        let rows = sqlx::query_as::<_, CandidateRow>(&sql)
            .bind(vacancy_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get_candidate(&self, id: Uuid) -> StoreResult<Option<Candidate>> {
        let sql = format!("SELECT {} FROM candidates WHERE id = $1", CANDIDATE_COLUMNS);
        let row = sqlx::query_as::<_, CandidateRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Into::into))
    }

    async fn update_candidate_status(
        &self,
        id: Uuid,
        status: CandidateStatus,
    ) -> StoreResult<()> {
        let result = sqlx::query("UPDATE candidates SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status.as_str())
            .execute(&self.pool)
            .await?;
        affected(result.rows_affected())
    }

    async fn delete_candidate(&self, id: Uuid) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM candidates WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        affected(result.rows_affected())
    }

    async fn list_recruiters(&self) -> StoreResult<Vec<Recruiter>> {
        let sql = format!("SELECT {} FROM recruiters ORDER BY name ASC", RECRUITER_COLUMNS);
        let rows = sqlx::query_as::<_, RecruiterRow>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn create_recruiter(&self, recruiter: RecruiterData) -> StoreResult<Recruiter> {
        let sql = format!(
            "INSERT INTO recruiters (name, email, phone, extension, department, whatsapp, position)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {}",
            RECRUITER_COLUMNS
        );
        let row = sqlx::query_as::<_, RecruiterRow>(&sql)
            .bind(recruiter.name)
            .bind(recruiter.email)
            .bind(recruiter.phone)
            .bind(recruiter.extension)
            .bind(recruiter.department)
            .bind(recruiter.whatsapp)
            .bind(recruiter.position)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into())
    }

    async fn update_recruiter(
        &self,
        id: Uuid,
        recruiter: RecruiterData,
    ) -> StoreResult<Recruiter> {
        let sql = format!(
            "UPDATE recruiters
             SET name = $2, email = $3, phone = $4, extension = $5, department = $6, whatsapp = $7, position = $8
             WHERE id = $1
             RETURNING {}",
            RECRUITER_COLUMNS
        );
        let row = sqlx::query_as::<_, RecruiterRow>(&sql)
            .bind(id)
            .bind(recruiter.name)
            .bind(recruiter.email)
            .bind(recruiter.phone)
            .bind(recruiter.extension)
            .bind(recruiter.department)
            .bind(recruiter.whatsapp)
            .bind(recruiter.position)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into())
    }

    async fn delete_recruiter(&self, id: Uuid) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM recruiters WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        affected(result.rows_affected())
    }

    async fn list_positions(&self) -> StoreResult<Vec<Position>> {
        let sql = format!(
            "SELECT {} FROM positions ORDER BY department ASC NULLS FIRST, position ASC",
            POSITION_COLUMNS
        );
        let rows = sqlx::query_as::<_, PositionRow>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn create_position(&self, position: PositionData) -> StoreResult<Position> {
        let sql = format!(
            "INSERT INTO positions (position, department) VALUES ($1, $2) RETURNING {}",
            POSITION_COLUMNS
        );
        let row = sqlx::query_as::<_, PositionRow>(&sql)
            .bind(position.position)
            .bind(position.department)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into())
    }

    async fn update_position(&self, id: Uuid, position: PositionData) -> StoreResult<Position> {
        let sql = format!(
            "UPDATE positions SET position = $2, department = $3 WHERE id = $1 RETURNING {}",
            POSITION_COLUMNS
        );
        let row = sqlx::query_as::<_, PositionRow>(&sql)
            .bind(id)
            .bind(position.position)
            .bind(position.department)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into())
    }

    async fn delete_position(&self, id: Uuid) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM positions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        affected(result.rows_affected())
    }

    async fn list_improvement_requests(
        &self,
        user_email: Option<String>,
    ) -> StoreResult<Vec<ImprovementRequest>> {
        let sql = format!(
            "SELECT {} FROM improvement_requests
             WHERE ($1::text IS NULL OR user_email = $1)
             ORDER BY created_at DESC",
            REQUEST_COLUMNS
        );
        let rows = sqlx::query_as::<_, RequestRow>(&sql)
            .bind(user_email)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get_improvement_request(&self, id: Uuid) -> StoreResult<Option<ImprovementRequest>> {
        let sql = format!(
            "SELECT {} FROM improvement_requests WHERE id = $1",
            REQUEST_COLUMNS
        );
        let row = sqlx::query_as::<_, RequestRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Into::into))
    }

    async fn create_improvement_request(
        &self,
        request: NewImprovementRequest,
    ) -> StoreResult<ImprovementRequest> {
        let sql = format!(
            "INSERT INTO improvement_requests (title, description, priority, category, status, user_email, user_name, assigned_to)
             VALUES ($1, $2, $3, $4, 'pending', $5, $6, $7)
             RETURNING {}",
            REQUEST_COLUMNS
        );
        let row = sqlx::query_as::<_, RequestRow>(&sql)
            .bind(request.title)
            .bind(request.description)
            .bind(request.priority.as_str())
            .bind(request.category.as_str())
            .bind(request.user_email)
            .bind(request.user_name)
            .bind(request.assigned_to)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into())
    }

    async fn update_improvement_request(
        &self,
        id: Uuid,
        changes: RequestChanges,
    ) -> StoreResult<ImprovementRequest> {
        let sql = format!(
            "UPDATE improvement_requests
             SET
                status = COALESCE($2, status),
                admin_response = COALESCE($3, admin_response),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {}",
            REQUEST_COLUMNS
        );
        let row = sqlx::query_as::<_, RequestRow>(&sql)
            .bind(id)
            .bind(changes.status.map(|s| s.as_str()))
            .bind(changes.admin_response)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into())
    }

    async fn delete_improvement_request(&self, id: Uuid) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM improvement_requests WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        affected(result.rows_affected())
    }
}
