use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::store::{PortalStore, StoreError, StoreResult};
use crate::models::candidate::{Candidate, CandidateStatus, NewCandidate};
use crate::models::improvement_request::{
    ImprovementRequest, NewImprovementRequest, RequestChanges, RequestStatus,
};
use crate::models::position::{Position, PositionData};
use crate::models::question::{NewQuestion, Question, QuestionChanges};
use crate::models::recruiter::{Recruiter, RecruiterData};
use crate::models::vacancy::{NewVacancy, Vacancy, VacancyChanges};

#[derive(Debug, Default)]
struct Collections {
    questions: Vec<Question>,
    vacancies: Vec<Vacancy>,
    candidates: Vec<Candidate>,
    recruiters: Vec<Recruiter>,
    positions: Vec<Position>,
    requests: Vec<ImprovementRequest>,
}

/// Process-local store. Used when no database is configured and in tests.
///
/// `set_offline(true)` makes every call fail with `StoreError::Unavailable`,
/// which is how outages of the real store are reproduced.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<Collections>,
    offline: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Collections>> {
        self.check_online()?;
        self.data
            .read()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".into()))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Collections>> {
        self.check_online()?;
        self.data
            .write()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".into()))
    }

    fn check_online(&self) -> StoreResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("memory store is offline".into()));
        }
        Ok(())
    }
}

fn newest_first<T>(items: &mut [T], key: impl Fn(&T) -> Option<chrono::DateTime<Utc>>) {
    items.sort_by(|a, b| key(b).cmp(&key(a)));
}

#[async_trait]
impl PortalStore for MemoryStore {
    async fn list_questions(&self, vacancy_id: Uuid) -> StoreResult<Vec<Question>> {
        let data = self.read()?;
        Ok(data
            .questions
            .iter()
            .filter(|q| q.vacancy_id == vacancy_id)
            .cloned()
            .collect())
    }

    async fn get_question(&self, id: Uuid) -> StoreResult<Option<Question>> {
        let data = self.read()?;
        Ok(data.questions.iter().find(|q| q.id == id).cloned())
    }

    async fn create_question(&self, question: NewQuestion) -> StoreResult<Question> {
        let mut data = self.write()?;
        let created = Question {
            id: Uuid::new_v4(),
            vacancy_id: question.vacancy_id,
            text: question.text,
            question_type: question.question_type,
            required: question.required,
            options: question.options,
            order: question.order,
            created_at: Some(Utc::now()),
        };
        data.questions.push(created.clone());
        Ok(created)
    }

    async fn update_question(&self, id: Uuid, changes: QuestionChanges) -> StoreResult<()> {
        let mut data = self.write()?;
        let question = data
            .questions
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or(StoreError::NotFound)?;
        question.text = changes.text;
        question.question_type = changes.question_type;
        question.required = changes.required;
        question.options = changes.options;
        Ok(())
    }

    async fn delete_question(&self, id: Uuid) -> StoreResult<()> {
        let mut data = self.write()?;
        let before = data.questions.len();
        data.questions.retain(|q| q.id != id);
        if data.questions.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn delete_questions_for_vacancy(&self, vacancy_id: Uuid) -> StoreResult<()> {
        let mut data = self.write()?;
        data.questions.retain(|q| q.vacancy_id != vacancy_id);
        Ok(())
    }

    async fn list_vacancies(&self, active_only: bool) -> StoreResult<Vec<Vacancy>> {
        let data = self.read()?;
        let mut items: Vec<Vacancy> = data
            .vacancies
            .iter()
            .filter(|v| !active_only || v.active)
            .cloned()
            .collect();
        newest_first(&mut items, |v| v.created_at);
        Ok(items)
    }

    async fn get_vacancy(&self, id: Uuid) -> StoreResult<Option<Vacancy>> {
        let data = self.read()?;
        Ok(data.vacancies.iter().find(|v| v.id == id).cloned())
    }

    async fn create_vacancy(&self, vacancy: NewVacancy) -> StoreResult<Vacancy> {
        let mut data = self.write()?;
        let now = Utc::now();
        let created = Vacancy {
            id: Uuid::new_v4(),
            title: vacancy.title,
            description: vacancy.description,
            requirements: vacancy.requirements,
            department: vacancy.department,
            location: vacancy.location,
            salary: vacancy.salary,
            active: true,
            created_at: Some(now),
            updated_at: Some(now),
        };
        data.vacancies.push(created.clone());
        Ok(created)
    }

    async fn update_vacancy(&self, id: Uuid, changes: VacancyChanges) -> StoreResult<Vacancy> {
        let mut data = self.write()?;
        let vacancy = data
            .vacancies
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or(StoreError::NotFound)?;
        if let Some(title) = changes.title {
            vacancy.title = title;
        }
        if changes.description.is_some() {
            vacancy.description = changes.description;
        }
        if changes.requirements.is_some() {
            vacancy.requirements = changes.requirements;
        }
        if changes.department.is_some() {
            vacancy.department = changes.department;
        }
        if changes.location.is_some() {
            vacancy.location = changes.location;
        }
        if changes.salary.is_some() {
            vacancy.salary = changes.salary;
        }
        vacancy.updated_at = Some(Utc::now());
        Ok(vacancy.clone())
    }

    async fn set_vacancy_active(&self, id: Uuid, active: bool) -> StoreResult<()> {
        let mut data = self.write()?;
        let vacancy = data
            .vacancies
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or(StoreError::NotFound)?;
        vacancy.active = active;
        vacancy.updated_at = Some(Utc::now());
        Ok(())
    }

    async fn delete_vacancy(&self, id: Uuid) -> StoreResult<()> {
        let mut data = self.write()?;
        if !data.vacancies.iter().any(|v| v.id == id) {
            return Err(StoreError::NotFound);
        }
        data.questions.retain(|q| q.vacancy_id != id);
        data.vacancies.retain(|v| v.id != id);
        Ok(())
    }

    async fn create_candidate(&self, candidate: NewCandidate) -> StoreResult<Candidate> {
        let mut data = self.write()?;
        let created = Candidate {
            id: Uuid::new_v4(),
            full_name: candidate.full_name,
            email: candidate.email,
            phone: candidate.phone,
            vacancy_id: candidate.vacancy_id,
            vacancy_title: candidate.vacancy_title,
            zona: candidate.zona,
            message: candidate.message,
            answers: candidate.answers,
            status: CandidateStatus::Pending,
            created_at: Utc::now(),
        };
        data.candidates.push(created.clone());
        Ok(created)
    }

    async fn list_candidates(&self, vacancy_id: Option<Uuid>) -> StoreResult<Vec<Candidate>> {
        let data = self.read()?;
        let mut items: Vec<Candidate> = data
            .candidates
            .iter()
            .filter(|c| vacancy_id.is_none() || c.vacancy_id == vacancy_id)
            .cloned()
            .collect();
        newest_first(&mut items, |c| Some(c.created_at));
        Ok(items)
    }

    async fn get_candidate(&self, id: Uuid) -> StoreResult<Option<Candidate>> {
        let data = self.read()?;
        Ok(data.candidates.iter().find(|c| c.id == id).cloned())
    }

    async fn update_candidate_status(
        &self,
        id: Uuid,
        status: CandidateStatus,
    ) -> StoreResult<()> {
        let mut data = self.write()?;
        let candidate = data
            .candidates
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(StoreError::NotFound)?;
        candidate.status = status;
        Ok(())
    }

    async fn delete_candidate(&self, id: Uuid) -> StoreResult<()> {
        let mut data = self.write()?;
        let before = data.candidates.len();
        data.candidates.retain(|c| c.id != id);
        if data.candidates.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn list_recruiters(&self) -> StoreResult<Vec<Recruiter>> {
        let data = self.read()?;
        let mut items = data.recruiters.clone();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(items)
    }

    async fn create_recruiter(&self, recruiter: RecruiterData) -> StoreResult<Recruiter> {
        let mut data = self.write()?;
        let created = Recruiter {
            id: Uuid::new_v4(),
            name: recruiter.name,
            email: recruiter.email,
            phone: recruiter.phone,
            extension: recruiter.extension,
            department: recruiter.department,
            whatsapp: recruiter.whatsapp,
            position: recruiter.position,
            created_at: Some(Utc::now()),
        };
        data.recruiters.push(created.clone());
        Ok(created)
    }

    async fn update_recruiter(
        &self,
        id: Uuid,
        recruiter: RecruiterData,
    ) -> StoreResult<Recruiter> {
        let mut data = self.write()?;
        let stored = data
            .recruiters
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::NotFound)?;
        stored.name = recruiter.name;
        stored.email = recruiter.email;
        stored.phone = recruiter.phone;
        stored.extension = recruiter.extension;
        stored.department = recruiter.department;
        stored.whatsapp = recruiter.whatsapp;
        stored.position = recruiter.position;
        Ok(stored.clone())
    }

    async fn delete_recruiter(&self, id: Uuid) -> StoreResult<()> {
        let mut data = self.write()?;
        let before = data.recruiters.len();
        data.recruiters.retain(|r| r.id != id);
        if data.recruiters.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn list_positions(&self) -> StoreResult<Vec<Position>> {
        let data = self.read()?;
        let mut items = data.positions.clone();
        items.sort_by(|a, b| {
            a.department
                .cmp(&b.department)
                .then_with(|| a.position.cmp(&b.position))
        });
        Ok(items)
    }

    async fn create_position(&self, position: PositionData) -> StoreResult<Position> {
        let mut data = self.write()?;
        let created = Position {
            id: Uuid::new_v4(),
            position: position.position,
            department: position.department,
            created_at: Some(Utc::now()),
        };
        data.positions.push(created.clone());
        Ok(created)
    }

    async fn update_position(&self, id: Uuid, position: PositionData) -> StoreResult<Position> {
        let mut data = self.write()?;
        let stored = data
            .positions
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound)?;
        stored.position = position.position;
        stored.department = position.department;
        Ok(stored.clone())
    }

    async fn delete_position(&self, id: Uuid) -> StoreResult<()> {
        let mut data = self.write()?;
        let before = data.positions.len();
        data.positions.retain(|p| p.id != id);
        if data.positions.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn list_improvement_requests(
        &self,
        user_email: Option<String>,
    ) -> StoreResult<Vec<ImprovementRequest>> {
        let data = self.read()?;
        let mut items: Vec<ImprovementRequest> = data
            .requests
            .iter()
            .filter(|r| match &user_email {
                Some(email) => &r.user_email == email,
                None => true,
            })
            .cloned()
            .collect();
        newest_first(&mut items, |r| r.created_at);
        Ok(items)
    }

    async fn get_improvement_request(&self, id: Uuid) -> StoreResult<Option<ImprovementRequest>> {
        let data = self.read()?;
        Ok(data.requests.iter().find(|r| r.id == id).cloned())
    }

    async fn create_improvement_request(
        &self,
        request: NewImprovementRequest,
    ) -> StoreResult<ImprovementRequest> {
        let mut data = self.write()?;
        let now = Utc::now();
        let created = ImprovementRequest {
            id: Uuid::new_v4(),
            title: request.title,
            description: request.description,
            priority: request.priority,
            category: request.category,
            status: RequestStatus::Pending,
            user_email: request.user_email,
            user_name: request.user_name,
            assigned_to: request.assigned_to,
            admin_response: None,
            created_at: Some(now),
            updated_at: Some(now),
        };
        data.requests.push(created.clone());
        Ok(created)
    }

    async fn update_improvement_request(
        &self,
        id: Uuid,
        changes: RequestChanges,
    ) -> StoreResult<ImprovementRequest> {
        let mut data = self.write()?;
        let stored = data
            .requests
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::NotFound)?;
        if let Some(status) = changes.status {
            stored.status = status;
        }
        if changes.admin_response.is_some() {
            stored.admin_response = changes.admin_response;
        }
        stored.updated_at = Some(Utc::now());
        Ok(stored.clone())
    }

    async fn delete_improvement_request(&self, id: Uuid) -> StoreResult<()> {
        let mut data = self.write()?;
        let before = data.requests.len();
        data.requests.retain(|r| r.id != id);
        if data.requests.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::QuestionType;

    fn question_for(vacancy_id: Uuid, text: &str, order: i32) -> NewQuestion {
        NewQuestion {
            vacancy_id,
            text: text.to_string(),
            question_type: QuestionType::Text,
            required: false,
            options: Vec::new(),
            order,
        }
    }

    #[tokio::test]
    async fn deleting_a_vacancy_removes_its_questions_only() {
        let store = MemoryStore::new();
        let kept = store
            .create_vacancy(NewVacancy {
                title: "Operator".into(),
                description: None,
                requirements: None,
                department: None,
                location: None,
                salary: None,
            })
            .await
            .unwrap();
        let removed = store
            .create_vacancy(NewVacancy {
                title: "Driver".into(),
                description: None,
                requirements: None,
                department: None,
                location: None,
                salary: None,
            })
            .await
            .unwrap();
        store.create_question(question_for(kept.id, "Shift?", 0)).await.unwrap();
        store.create_question(question_for(removed.id, "License?", 0)).await.unwrap();

        store.delete_vacancy(removed.id).await.unwrap();

        assert!(store.list_questions(removed.id).await.unwrap().is_empty());
        assert_eq!(store.list_questions(kept.id).await.unwrap().len(), 1);
        assert!(store.get_vacancy(removed.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn offline_store_rejects_calls() {
        let store = MemoryStore::new();
        store.set_offline(true);
        let err = store.list_vacancies(false).await.unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));
        store.set_offline(false);
        assert!(store.list_vacancies(false).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_records_report_not_found() {
        let store = MemoryStore::new();
        let err = store.delete_question(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound));
        let err = store
            .update_candidate_status(Uuid::new_v4(), CandidateStatus::Hired)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound));
    }
}
