use tracing::{error, info};
use uuid::Uuid;

use super::assemble::assemble_submission;
use super::render::{render_questions, RenderedQuestion};
use super::validate::{self, question_key, validate_application, FormErrors};
use super::{Answers, ApplicantFields};
use crate::database::PortalStore;
use crate::error::{Error, Result};
use crate::models::candidate::Candidate;
use crate::models::question::Question;
use crate::models::vacancy::Vacancy;
use crate::services::schema_service::FormSchemaService;

/// How the vacancy of a form was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VacancyMode {
    /// Reached through a vacancy link; the vacancy cannot change.
    Preselected,
    /// The applicant picks from the active vacancies.
    Combined,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Editing,
    Submitted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixedField {
    FullName,
    Email,
    Phone,
    Zona,
    Message,
}

impl FixedField {
    fn error_key(self) -> Option<&'static str> {
        match self {
            FixedField::FullName => Some(validate::FULL_NAME),
            FixedField::Email => Some(validate::EMAIL),
            FixedField::Phone => Some(validate::PHONE),
            FixedField::Zona | FixedField::Message => None,
        }
    }
}

#[derive(Debug)]
pub enum SubmitOutcome {
    Invalid(FormErrors),
    Submitted(Candidate),
}

/// State of one applicant's form, from load to submission.
///
/// The session is owned by a single caller. It suspends only while loading,
/// when the vacancy changes, and while submitting.
#[derive(Debug)]
pub struct FormSession {
    mode: VacancyMode,
    fields: ApplicantFields,
    vacancy: Option<Vacancy>,
    vacancies: Vec<Vacancy>,
    questions: Vec<Question>,
    answers: Answers,
    errors: FormErrors,
    status: FormStatus,
}

impl FormSession {
    pub async fn open(schema: &FormSchemaService, preselected: Option<Uuid>) -> Self {
        let mut session = Self {
            mode: VacancyMode::Combined,
            fields: ApplicantFields::default(),
            vacancy: None,
            vacancies: Vec::new(),
            questions: Vec::new(),
            answers: Answers::new(),
            errors: FormErrors::new(),
            status: FormStatus::Editing,
        };

        match preselected {
            Some(vacancy_id) => {
                session.mode = VacancyMode::Preselected;
                session.fields.vacancy_id = Some(vacancy_id);
                session.vacancy = schema.vacancy(vacancy_id).await;
                session.questions = schema.resolve(Some(vacancy_id)).await;
            }
            None => {
                session.vacancies = schema.active_vacancies().await;
            }
        }

        session
    }

    /// Switches the vacancy of a combined form. The question set is reloaded
    /// and every answer given so far is discarded.
    pub async fn select_vacancy(
        &mut self,
        schema: &FormSchemaService,
        vacancy_id: Option<Uuid>,
    ) -> Result<()> {
        if self.mode == VacancyMode::Preselected {
            return Err(Error::BadRequest(
                "The vacancy of this form cannot be changed".to_string(),
            ));
        }

        self.fields.vacancy_id = vacancy_id;
        self.vacancy = vacancy_id.and_then(|id| self.vacancies.iter().find(|v| v.id == id).cloned());
        self.errors.clear(validate::VACANCY_ID);
        self.questions = schema.resolve(vacancy_id).await;
        self.answers.clear();
        Ok(())
    }

    pub fn set_field(&mut self, field: FixedField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FixedField::FullName => self.fields.full_name = value,
            FixedField::Email => self.fields.email = value,
            FixedField::Phone => self.fields.phone = value,
            FixedField::Zona => self.fields.zona = value,
            FixedField::Message => self.fields.message = value,
        }
        if let Some(key) = field.error_key() {
            self.errors.clear(key);
        }
    }

    pub fn set_answer(&mut self, question_id: Uuid, value: impl Into<String>) {
        self.answers.insert(question_id, value.into());
        self.errors.clear(&question_key(question_id));
    }

    /// Recomputes the full error set; returns whether the form is valid.
    pub fn validate(&mut self) -> bool {
        self.errors = validate_application(
            &self.fields,
            self.mode == VacancyMode::Combined,
            &self.questions,
            &self.answers,
        );
        self.errors.is_empty()
    }

    /// Validates, assembles and stores the application.
    ///
    /// A store failure leaves the session untouched so the applicant can try
    /// again; a successful submission closes the session for good.
    pub async fn submit(&mut self, store: &dyn PortalStore) -> Result<SubmitOutcome> {
        if self.status == FormStatus::Submitted {
            return Err(Error::Conflict(
                "This application has already been submitted".to_string(),
            ));
        }

        if !self.validate() {
            return Ok(SubmitOutcome::Invalid(self.errors.clone()));
        }

        let submission = assemble_submission(
            &self.fields,
            self.vacancy.as_ref(),
            &self.questions,
            &self.answers,
        );

        match store.create_candidate(submission).await {
            Ok(candidate) => {
                self.status = FormStatus::Submitted;
                info!(
                    candidate_id = %candidate.id,
                    vacancy_id = ?candidate.vacancy_id,
                    answers = candidate.answers.len(),
                    "application submitted"
                );
                Ok(SubmitOutcome::Submitted(candidate))
            }
            Err(err) => {
                error!(error = %err, vacancy_id = ?self.fields.vacancy_id, "application could not be stored");
                Err(Error::SubmissionFailed(err.to_string()))
            }
        }
    }

    pub fn mode(&self) -> VacancyMode {
        self.mode
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn fields(&self) -> &ApplicantFields {
        &self.fields
    }

    pub fn vacancy(&self) -> Option<&Vacancy> {
        self.vacancy.as_ref()
    }

    pub fn vacancies(&self) -> &[Vacancy] {
        &self.vacancies
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn rendered_questions(&self) -> Vec<RenderedQuestion> {
        render_questions(&self.questions)
    }
}
