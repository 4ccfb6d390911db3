use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use uuid::Uuid;

use crate::{
    dto::request_dto::{CreateRequestPayload, RequestListResponse, UpdateRequestPayload},
    error::Result,
    middleware::auth::StaffSession,
    utils::validation::validate,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/admin/improvement-requests",
    request_body = CreateRequestPayload,
    responses(
        (status = 201, description = "Request filed"),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_request(
    State(state): State<AppState>,
    Extension(session): Extension<StaffSession>,
    Json(payload): Json<CreateRequestPayload>,
) -> Result<impl IntoResponse> {
    validate(&payload)?;
    let request = state.request_service.create(&session, payload).await?;
    Ok((StatusCode::CREATED, Json(request)))
}

#[utoipa::path(
    get,
    path = "/api/admin/improvement-requests",
    responses(
        (status = 200, description = "Requests visible to the caller, newest first")
    )
)]
#[axum::debug_handler]
pub async fn list_requests(
    State(state): State<AppState>,
    Extension(session): Extension<StaffSession>,
) -> Result<impl IntoResponse> {
    let items = state.request_service.list(&session).await?;
    Ok(Json(RequestListResponse::from(items)))
}

#[utoipa::path(
    get,
    path = "/api/admin/improvement-requests/summary",
    responses(
        (status = 200, description = "Counts per status")
    )
)]
#[axum::debug_handler]
pub async fn request_summary(
    State(state): State<AppState>,
    Extension(session): Extension<StaffSession>,
) -> Result<impl IntoResponse> {
    let summary = state.request_service.summary(&session).await?;
    Ok(Json(summary))
}

#[utoipa::path(
    get,
    path = "/api/admin/improvement-requests/{id}",
    params(
        ("id" = Uuid, Path, description = "Request ID")
    ),
    responses(
        (status = 200, description = "Request found"),
        (status = 404, description = "Request not found")
    )
)]
#[axum::debug_handler]
pub async fn get_request(
    State(state): State<AppState>,
    Extension(session): Extension<StaffSession>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let request = state.request_service.get(&session, id).await?;
    Ok(Json(request))
}

#[utoipa::path(
    patch,
    path = "/api/admin/improvement-requests/{id}",
    params(
        ("id" = Uuid, Path, description = "Request ID")
    ),
    request_body = UpdateRequestPayload,
    responses(
        (status = 200, description = "Status or response updated"),
        (status = 403, description = "Admins only"),
        (status = 404, description = "Request not found")
    )
)]
#[axum::debug_handler]
pub async fn update_request(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateRequestPayload>,
) -> Result<impl IntoResponse> {
    validate(&payload)?;
    let request = state.request_service.update(id, payload).await?;
    Ok(Json(request))
}

#[utoipa::path(
    delete,
    path = "/api/admin/improvement-requests/{id}",
    params(
        ("id" = Uuid, Path, description = "Request ID")
    ),
    responses(
        (status = 204, description = "Request deleted"),
        (status = 403, description = "Admins only"),
        (status = 404, description = "Request not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_request(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.request_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
