use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::database::PortalStore;
use crate::dto::vacancy_dto::{CreateVacancyPayload, UpdateVacancyPayload};
use crate::error::{Error, Result};
use crate::models::vacancy::Vacancy;
use crate::services::schema_service::FormSchemaService;

#[derive(Clone)]
pub struct VacancyService {
    store: Arc<dyn PortalStore>,
    schema: FormSchemaService,
}

impl VacancyService {
    pub fn new(store: Arc<dyn PortalStore>, schema: FormSchemaService) -> Self {
        Self { store, schema }
    }

    pub async fn list(&self, active_only: bool) -> Result<Vec<Vacancy>> {
        Ok(self.store.list_vacancies(active_only).await?)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Vacancy> {
        self.store
            .get_vacancy(id)
            .await?
            .ok_or_else(|| Error::NotFound("Vacancy not found".into()))
    }

    /// Inactive vacancies are hidden from applicants.
    pub async fn get_active(&self, id: Uuid) -> Result<Vacancy> {
        let vacancy = self.get_by_id(id).await?;
        if !vacancy.active {
            return Err(Error::NotFound("Vacancy not found".into()));
        }
        Ok(vacancy)
    }

    pub async fn create(&self, payload: CreateVacancyPayload) -> Result<Vacancy> {
        let vacancy = self.store.create_vacancy(payload.into()).await?;
        info!(vacancy_id = %vacancy.id, title = %vacancy.title, "vacancy created");
        Ok(vacancy)
    }

    pub async fn update(&self, id: Uuid, payload: UpdateVacancyPayload) -> Result<Vacancy> {
        Ok(self.store.update_vacancy(id, payload.into()).await?)
    }

    pub async fn toggle(&self, id: Uuid) -> Result<Vacancy> {
        let vacancy = self.get_by_id(id).await?;
        self.store.set_vacancy_active(id, !vacancy.active).await?;
        info!(vacancy_id = %id, active = !vacancy.active, "vacancy visibility toggled");
        self.get_by_id(id).await
    }

    /// Deletes the vacancy and every question attached to it.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        self.store.delete_vacancy(id).await?;
        self.schema.invalidate(id);
        info!(vacancy_id = %id, "vacancy deleted with its questions");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::MemoryStore;
    use crate::models::question::{NewQuestion, QuestionType};

    fn payload(title: &str) -> CreateVacancyPayload {
        CreateVacancyPayload {
            title: format!("  {}  ", title),
            description: Some("".into()),
            requirements: None,
            department: Some("Production".into()),
            location: None,
            salary: None,
        }
    }

    #[tokio::test]
    async fn toggle_hides_vacancy_from_applicants() {
        let store = Arc::new(MemoryStore::new());
        let service = VacancyService::new(store.clone(), FormSchemaService::new(store.clone()));
        let vacancy = service.create(payload("Welder")).await.unwrap();
        assert_eq!(vacancy.title, "Welder");
        assert_eq!(vacancy.description, None);
        assert!(vacancy.active);

        let toggled = service.toggle(vacancy.id).await.unwrap();
        assert!(!toggled.active);
        assert!(matches!(service.get_active(vacancy.id).await, Err(Error::NotFound(_))));
        assert!(service.list(true).await.unwrap().is_empty());
        assert_eq!(service.list(false).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_removes_questions_and_cached_schema() {
        let store = Arc::new(MemoryStore::new());
        let schema = FormSchemaService::new(store.clone());
        let service = VacancyService::new(store.clone(), schema.clone());
        let vacancy = service.create(payload("Welder")).await.unwrap();
        store
            .create_question(NewQuestion {
                vacancy_id: vacancy.id,
                text: "Certified?".into(),
                question_type: QuestionType::Radio,
                required: true,
                options: vec!["Yes".into(), "No".into()],
                order: 0,
            })
            .await
            .unwrap();
        assert_eq!(schema.resolve(Some(vacancy.id)).await.len(), 1);

        service.delete(vacancy.id).await.unwrap();
        assert!(store.list_questions(vacancy.id).await.unwrap().is_empty());
        assert!(schema.resolve(Some(vacancy.id)).await.is_empty());
        assert!(matches!(service.delete(vacancy.id).await, Err(Error::NotFound(_))));
    }
}
