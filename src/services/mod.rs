pub mod application_service;
pub mod candidate_service;
pub mod directory_service;
pub mod export_service;
pub mod improvement_request_service;
pub mod question_service;
pub mod schema_service;
pub mod vacancy_service;
