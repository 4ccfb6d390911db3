pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod form;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use crate::config::Config;
use crate::database::PortalStore;
use crate::services::{
    application_service::ApplicationService, candidate_service::CandidateService,
    directory_service::DirectoryService,
    improvement_request_service::ImprovementRequestService, question_service::QuestionService,
    schema_service::FormSchemaService, vacancy_service::VacancyService,
};

/// Runtime settings the router needs, detached from the process-wide config
/// so several routers can coexist in one process.
#[derive(Debug, Clone)]
pub struct Settings {
    pub jwt_secret: Arc<str>,
    pub public_rps: u32,
    pub admin_rps: u32,
    pub trust_forwarded_for: bool,
    pub admin_contact_email: Option<String>,
}

impl From<&Config> for Settings {
    fn from(config: &Config) -> Self {
        Self {
            jwt_secret: Arc::from(config.jwt_secret.as_str()),
            public_rps: config.public_rps,
            admin_rps: config.admin_rps,
            trust_forwarded_for: config.trust_forwarded_for,
            admin_contact_email: config.admin_contact_email.clone(),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub schema: FormSchemaService,
    pub application_service: ApplicationService,
    pub vacancy_service: VacancyService,
    pub question_service: QuestionService,
    pub candidate_service: CandidateService,
    pub directory_service: DirectoryService,
    pub request_service: ImprovementRequestService,
}

impl AppState {
    pub fn new(store: Arc<dyn PortalStore>, settings: Settings) -> Self {
        let schema = FormSchemaService::new(store.clone());
        let application_service = ApplicationService::new(store.clone(), schema.clone());
        let vacancy_service = VacancyService::new(store.clone(), schema.clone());
        let question_service = QuestionService::new(store.clone(), schema.clone());
        let candidate_service = CandidateService::new(store.clone());
        let directory_service = DirectoryService::new(store.clone());
        let request_service =
            ImprovementRequestService::new(store, settings.admin_contact_email.clone());

        Self {
            settings,
            schema,
            application_service,
            vacancy_service,
            question_service,
            candidate_service,
            directory_service,
            request_service,
        }
    }
}
