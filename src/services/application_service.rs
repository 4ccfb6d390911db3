use std::sync::Arc;

use tracing::warn;
use uuid::Uuid;

use crate::database::PortalStore;
use crate::dto::public_dto::{ApplicationPayload, FormSchemaResponse};
use crate::error::{Error, Result};
use crate::form::{FixedField, FormSession, SubmitOutcome, VacancyMode};
use crate::models::candidate::Candidate;
use crate::services::schema_service::FormSchemaService;

/// Drives one form session per public request.
#[derive(Clone)]
pub struct ApplicationService {
    store: Arc<dyn PortalStore>,
    schema: FormSchemaService,
}

impl ApplicationService {
    pub fn new(store: Arc<dyn PortalStore>, schema: FormSchemaService) -> Self {
        Self { store, schema }
    }

    /// Schema of a pre-selected form when `preselected` is set; otherwise of a
    /// combined form, showing the questions of `chosen` if the applicant has
    /// already picked a vacancy.
    pub async fn form_schema(
        &self,
        preselected: Option<Uuid>,
        chosen: Option<Uuid>,
    ) -> Result<FormSchemaResponse> {
        if let Some(vacancy_id) = preselected {
            if let Err(err) = self.ensure_open(vacancy_id).await {
                match err {
                    Error::NotFound(_) => return Err(err),
                    other => warn!(%vacancy_id, error = %other, "could not check vacancy; serving form anyway"),
                }
            }
        }

        let mut session = FormSession::open(&self.schema, preselected).await;
        if preselected.is_none() && chosen.is_some() {
            session.select_vacancy(&self.schema, chosen).await?;
        }

        Ok(FormSchemaResponse {
            mode: match session.mode() {
                VacancyMode::Preselected => "preselected",
                VacancyMode::Combined => "combined",
            },
            vacancy_id: session.fields().vacancy_id,
            vacancy: session.vacancy().cloned(),
            vacancies: session.vacancies().to_vec(),
            questions: session.rendered_questions(),
        })
    }

    pub async fn submit(
        &self,
        preselected: Option<Uuid>,
        payload: ApplicationPayload,
    ) -> Result<Candidate> {
        if let Some(vacancy_id) = preselected {
            self.ensure_open(vacancy_id).await.map_err(|err| match err {
                Error::NotFound(_) => err,
                other => Error::SubmissionFailed(other.to_string()),
            })?;
        }

        let mut session = FormSession::open(&self.schema, preselected).await;
        if preselected.is_none() {
            session.select_vacancy(&self.schema, payload.vacancy_id).await?;
        }

        let fields = payload.applicant_fields();
        session.set_field(FixedField::FullName, fields.full_name);
        session.set_field(FixedField::Email, fields.email);
        session.set_field(FixedField::Phone, fields.phone);
        session.set_field(FixedField::Zona, fields.zona);
        session.set_field(FixedField::Message, fields.message);
        for (question_id, answer) in payload.parsed_answers() {
            session.set_answer(question_id, answer);
        }

        match session.submit(self.store.as_ref()).await? {
            SubmitOutcome::Submitted(candidate) => Ok(candidate),
            SubmitOutcome::Invalid(errors) => Err(Error::Form(errors)),
        }
    }

    /// Pre-selected forms exist only for open vacancies.
    async fn ensure_open(&self, vacancy_id: Uuid) -> Result<()> {
        match self.store.get_vacancy(vacancy_id).await? {
            Some(vacancy) if vacancy.active => Ok(()),
            _ => Err(Error::NotFound("Vacancy not found".to_string())),
        }
    }
}
