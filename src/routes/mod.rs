pub mod candidate_routes;
pub mod directory;
pub mod docs;
pub mod export;
pub mod health;
pub mod improvement_request;
pub mod public;
pub mod question;
pub mod vacancy;

use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::{get, patch, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::middleware::{
    auth::{require_admin, require_staff},
    rate_limit::{new_rps_state, rps_middleware},
};
use crate::AppState;

/// Full API with state applied. CORS is left to the caller.
pub fn build_router(state: AppState) -> Router {
    let base_routes = Router::new()
        .route("/health", get(health::health))
        .route("/api/openapi.json", get(docs::openapi_json));

    let public_api = Router::new()
        .route("/api/public/vacancies", get(public::list_public_vacancies))
        .route("/api/public/vacancies/:id", get(public::get_public_vacancy))
        .route("/api/public/vacancies/:id/form", get(public::get_vacancy_form))
        .route(
            "/api/public/vacancies/:id/applications",
            post(public::submit_vacancy_application),
        )
        .route("/api/public/form", get(public::get_combined_form))
        .route("/api/public/applications", post(public::submit_application))
        .layer(from_fn_with_state(
            new_rps_state(state.settings.public_rps, state.settings.trust_forwarded_for),
            rps_middleware,
        ));

    let admin_api = Router::new()
        .route("/api/admin/session", get(health::current_session))
        .route(
            "/api/admin/vacancies",
            get(vacancy::list_vacancies).post(vacancy::create_vacancy),
        )
        .route(
            "/api/admin/vacancies/:id",
            get(vacancy::get_vacancy)
                .patch(vacancy::update_vacancy)
                .delete(vacancy::delete_vacancy),
        )
        .route("/api/admin/vacancies/:id/toggle", post(vacancy::toggle_vacancy))
        .route(
            "/api/admin/vacancies/:id/questions",
            get(question::list_questions).post(question::create_question),
        )
        .route(
            "/api/admin/questions/:id",
            patch(question::update_question).delete(question::delete_question),
        )
        .route("/api/admin/candidates", get(candidate_routes::list_candidates))
        .route("/api/admin/candidates/export", get(export::export_candidates))
        .route(
            "/api/admin/candidates/:id",
            get(candidate_routes::get_candidate).delete(candidate_routes::delete_candidate),
        )
        .route(
            "/api/admin/candidates/:id/status",
            post(candidate_routes::update_candidate_status),
        )
        .route(
            "/api/admin/recruiters",
            get(directory::list_recruiters).post(directory::create_recruiter),
        )
        .route("/api/admin/recruiters/export", get(export::export_recruiters))
        .route(
            "/api/admin/recruiters/:id",
            put(directory::update_recruiter).delete(directory::delete_recruiter),
        )
        .route(
            "/api/admin/positions",
            get(directory::list_positions).post(directory::create_position),
        )
        .route("/api/admin/positions/departments", get(directory::list_departments))
        .route(
            "/api/admin/positions/:id",
            put(directory::update_position).delete(directory::delete_position),
        )
        .route(
            "/api/admin/improvement-requests",
            get(improvement_request::list_requests).post(improvement_request::create_request),
        )
        .route(
            "/api/admin/improvement-requests/summary",
            get(improvement_request::request_summary),
        )
        .route(
            "/api/admin/improvement-requests/:id",
            get(improvement_request::get_request).merge(
                patch(improvement_request::update_request)
                    .delete(improvement_request::delete_request)
                    .route_layer(from_fn(require_admin)),
            ),
        )
        .route_layer(from_fn_with_state(state.clone(), require_staff))
        .layer(from_fn_with_state(
            new_rps_state(state.settings.admin_rps, state.settings.trust_forwarded_for),
            rps_middleware,
        ));

    base_routes
        .merge(public_api)
        .merge(admin_api)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
