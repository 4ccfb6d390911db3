use axum::{http::StatusCode, response::IntoResponse, Extension, Json};
use serde_json::json;

use crate::middleware::auth::StaffSession;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up")
    )
)]
#[axum::debug_handler]
pub async fn health() -> impl IntoResponse {
    let body = json!({
        "status": "ok",
    });
    (StatusCode::OK, Json(body))
}

#[utoipa::path(
    get,
    path = "/api/admin/session",
    responses(
        (status = 200, description = "Identity and role of the caller"),
        (status = 401, description = "Missing or invalid token")
    )
)]
#[axum::debug_handler]
pub async fn current_session(Extension(session): Extension<StaffSession>) -> impl IntoResponse {
    let display_name = session.display_name();
    Json(json!({
        "email": session.email,
        "name": display_name,
        "role": session.role,
        "isAdmin": session.is_admin(),
    }))
}
