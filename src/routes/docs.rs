use axum::{response::IntoResponse, Json};
use utoipa::OpenApi;

use super::{candidate_routes, directory, export, health, improvement_request, public, question, vacancy};

#[derive(OpenApi)]
#[openapi(
    info(title = "Recruiting portal API"),
    paths(
        health::health,
        health::current_session,
        public::list_public_vacancies,
        public::get_public_vacancy,
        public::get_combined_form,
        public::get_vacancy_form,
        public::submit_application,
        public::submit_vacancy_application,
        vacancy::list_vacancies,
        vacancy::get_vacancy,
        vacancy::create_vacancy,
        vacancy::update_vacancy,
        vacancy::toggle_vacancy,
        vacancy::delete_vacancy,
        question::list_questions,
        question::create_question,
        question::update_question,
        question::delete_question,
        candidate_routes::list_candidates,
        candidate_routes::get_candidate,
        candidate_routes::update_candidate_status,
        candidate_routes::delete_candidate,
        export::export_candidates,
        export::export_recruiters,
        directory::list_recruiters,
        directory::create_recruiter,
        directory::update_recruiter,
        directory::delete_recruiter,
        directory::list_positions,
        directory::list_departments,
        directory::create_position,
        directory::update_position,
        directory::delete_position,
        improvement_request::create_request,
        improvement_request::list_requests,
        improvement_request::request_summary,
        improvement_request::get_request,
        improvement_request::update_request,
        improvement_request::delete_request,
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
