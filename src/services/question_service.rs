use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::database::PortalStore;
use crate::dto::question_dto::{CreateQuestionPayload, UpdateQuestionPayload};
use crate::error::{Error, Result};
use crate::models::question::{
    normalize_options, NewQuestion, Question, QuestionChanges, QuestionType,
};
use crate::services::schema_service::{sort_for_display, FormSchemaService};

/// Staff-side catalog of per-vacancy questions. Every mutation drops the
/// cached form schema of the affected vacancy.
#[derive(Clone)]
pub struct QuestionService {
    store: Arc<dyn PortalStore>,
    schema: FormSchemaService,
}

impl QuestionService {
    pub fn new(store: Arc<dyn PortalStore>, schema: FormSchemaService) -> Self {
        Self { store, schema }
    }

    pub async fn list(&self, vacancy_id: Uuid) -> Result<Vec<Question>> {
        self.ensure_vacancy(vacancy_id).await?;
        let mut questions = self.store.list_questions(vacancy_id).await?;
        sort_for_display(&mut questions);
        Ok(questions)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Question> {
        self.store
            .get_question(id)
            .await?
            .ok_or_else(|| Error::NotFound("Question not found".into()))
    }

    pub async fn create(&self, vacancy_id: Uuid, payload: CreateQuestionPayload) -> Result<Question> {
        self.ensure_vacancy(vacancy_id).await?;

        let text = checked_text(&payload.text)?;
        let options = checked_options(payload.question_type, payload.options)?;
        let order = match payload.order {
            Some(order) => order,
            None => next_order(self.store.list_questions(vacancy_id).await?.len())?,
        };

        let question = self
            .store
            .create_question(NewQuestion {
                vacancy_id,
                text,
                question_type: payload.question_type,
                required: payload.required,
                options,
                order,
            })
            .await?;
        self.schema.invalidate(vacancy_id);
        info!(
            question_id = %question.id,
            %vacancy_id,
            question_type = %question.question_type,
            order = question.order,
            "question created"
        );
        Ok(question)
    }

    pub async fn update(&self, id: Uuid, payload: UpdateQuestionPayload) -> Result<Question> {
        let current = self.get_by_id(id).await?;

        let question_type = payload.question_type.unwrap_or(current.question_type);
        let text = match payload.text {
            Some(text) => checked_text(&text)?,
            None => current.text.clone(),
        };
        let options = checked_options(
            question_type,
            payload.options.unwrap_or_else(|| current.options.clone()),
        )?;
        let changes = QuestionChanges {
            text,
            question_type,
            required: payload.required.unwrap_or(current.required),
            options,
        };

        self.store.update_question(id, changes).await?;
        self.schema.invalidate(current.vacancy_id);
        info!(question_id = %id, vacancy_id = %current.vacancy_id, "question updated");
        self.get_by_id(id).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let current = self.get_by_id(id).await?;
        self.store.delete_question(id).await?;
        self.schema.invalidate(current.vacancy_id);
        info!(question_id = %id, vacancy_id = %current.vacancy_id, "question deleted");
        Ok(())
    }

    async fn ensure_vacancy(&self, vacancy_id: Uuid) -> Result<()> {
        match self.store.get_vacancy(vacancy_id).await? {
            Some(_) => Ok(()),
            None => Err(Error::NotFound("Vacancy not found".into())),
        }
    }
}

fn checked_text(raw: &str) -> Result<String> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(Error::BadRequest("Question text is required".into()));
    }
    Ok(text.to_string())
}

fn next_order(count: usize) -> Result<i32> {
    i32::try_from(count)
        .map_err(|_| Error::Internal(format!("Question count {} exceeds the order range", count)))
}

fn checked_options(question_type: QuestionType, raw: Vec<String>) -> Result<Vec<String>> {
    let options = normalize_options(question_type, raw);
    if question_type.has_options() && options.is_empty() {
        return Err(Error::BadRequest(format!(
            "A {} question needs at least one option",
            question_type
        )));
    }
    // Checkbox picks travel as one comma-joined answer.
    if question_type == QuestionType::Checkbox && options.iter().any(|opt| opt.contains(',')) {
        return Err(Error::BadRequest(
            "Checkbox options cannot contain commas".into(),
        ));
    }
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::MemoryStore;
    use crate::models::vacancy::NewVacancy;

    async fn setup() -> (Arc<MemoryStore>, FormSchemaService, QuestionService, Uuid) {
        let store = Arc::new(MemoryStore::new());
        let schema = FormSchemaService::new(store.clone());
        let service = QuestionService::new(store.clone(), schema.clone());
        let vacancy = store
            .create_vacancy(NewVacancy {
                title: "Cashier".into(),
                description: None,
                requirements: None,
                department: None,
                location: None,
                salary: None,
            })
            .await
            .unwrap();
        (store, schema, service, vacancy.id)
    }

    fn payload(text: &str, question_type: QuestionType, options: &[&str]) -> CreateQuestionPayload {
        CreateQuestionPayload {
            text: text.into(),
            question_type,
            required: false,
            options: options.iter().map(|o| o.to_string()).collect(),
            order: None,
        }
    }

    #[tokio::test]
    async fn new_questions_are_appended() {
        let (_, _, service, vacancy_id) = setup().await;
        let first = service
            .create(vacancy_id, payload("Name of last employer", QuestionType::Text, &[]))
            .await
            .unwrap();
        let second = service
            .create(vacancy_id, payload("Shift", QuestionType::Select, &["Day", " ", "Night "]))
            .await
            .unwrap();
        assert_eq!(first.order, 0);
        assert_eq!(second.order, 1);
        assert_eq!(second.options, vec!["Day".to_string(), "Night".to_string()]);
    }

    #[tokio::test]
    async fn choice_questions_need_options() {
        let (_, _, service, vacancy_id) = setup().await;
        let err = service
            .create(vacancy_id, payload("Shift", QuestionType::Radio, &["  "]))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::BadRequest(_)));

        let err = service
            .create(vacancy_id, payload("   ", QuestionType::Text, &[]))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::BadRequest(_)));
    }

    #[tokio::test]
    async fn unknown_vacancy_is_not_found() {
        let (_, _, service, _) = setup().await;
        let err = service
            .create(Uuid::new_v4(), payload("Shift", QuestionType::Text, &[]))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn edits_keep_order_and_refresh_the_form() {
        let (_, schema, service, vacancy_id) = setup().await;
        service
            .create(vacancy_id, payload("First", QuestionType::Text, &[]))
            .await
            .unwrap();
        let question = service
            .create(vacancy_id, payload("Second", QuestionType::Text, &["ignored"]))
            .await
            .unwrap();
        assert!(question.options.is_empty());
        assert_eq!(schema.resolve(Some(vacancy_id)).await[1].text, "Second");

        let updated = service
            .update(
                question.id,
                UpdateQuestionPayload {
                    text: Some("Preferred shift".into()),
                    question_type: Some(QuestionType::Checkbox),
                    required: Some(true),
                    options: Some(vec!["Day".into(), "Night".into()]),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.order, 1);
        assert!(updated.required);

        let resolved = schema.resolve(Some(vacancy_id)).await;
        assert_eq!(resolved[1].text, "Preferred shift");
        assert_eq!(resolved[1].question_type, QuestionType::Checkbox);

        service.delete(question.id).await.unwrap();
        assert_eq!(schema.resolve(Some(vacancy_id)).await.len(), 1);
    }

    #[tokio::test]
    async fn switching_to_a_choice_type_requires_options() {
        let (_, _, service, vacancy_id) = setup().await;
        let question = service
            .create(vacancy_id, payload("Shift", QuestionType::Text, &[]))
            .await
            .unwrap();
        let err = service
            .update(
                question.id,
                UpdateQuestionPayload {
                    question_type: Some(QuestionType::Select),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, Error::BadRequest(_)));
    }

    #[test]
    fn order_past_i32_is_an_error() {
        assert_eq!(next_order(3).unwrap(), 3);
        assert!(matches!(
            next_order(i32::MAX as usize + 1),
            Err(Error::Internal(_))
        ));
    }

    #[tokio::test]
    async fn checkbox_options_cannot_contain_commas() {
        let (_, _, service, vacancy_id) = setup().await;
        let err = service
            .create(vacancy_id, payload("Days", QuestionType::Checkbox, &["Mon, Wed", "Fri"]))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::BadRequest(_)));

        let select = service
            .create(vacancy_id, payload("Days", QuestionType::Select, &["Mon, Wed", "Fri"]))
            .await
            .unwrap();
        let err = service
            .update(
                select.id,
                UpdateQuestionPayload {
                    question_type: Some(QuestionType::Checkbox),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, Error::BadRequest(_)));
    }
}
