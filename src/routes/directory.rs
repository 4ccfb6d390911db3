use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use uuid::Uuid;

use crate::{
    dto::directory_dto::{DepartmentsResponse, PositionPayload, PositionQuery, RecruiterPayload},
    error::Result,
    utils::validation::validate,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/admin/recruiters",
    responses(
        (status = 200, description = "Recruiters by name")
    )
)]
#[axum::debug_handler]
pub async fn list_recruiters(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let items = state.directory_service.list_recruiters().await?;
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/api/admin/recruiters",
    request_body = RecruiterPayload,
    responses(
        (status = 201, description = "Recruiter added"),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_recruiter(
    State(state): State<AppState>,
    Json(payload): Json<RecruiterPayload>,
) -> Result<impl IntoResponse> {
    validate(&payload)?;
    let recruiter = state.directory_service.create_recruiter(payload).await?;
    Ok((StatusCode::CREATED, Json(recruiter)))
}

#[utoipa::path(
    put,
    path = "/api/admin/recruiters/{id}",
    params(
        ("id" = Uuid, Path, description = "Recruiter ID")
    ),
    request_body = RecruiterPayload,
    responses(
        (status = 200, description = "Recruiter replaced"),
        (status = 404, description = "Recruiter not found")
    )
)]
#[axum::debug_handler]
pub async fn update_recruiter(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<RecruiterPayload>,
) -> Result<impl IntoResponse> {
    validate(&payload)?;
    let recruiter = state.directory_service.update_recruiter(id, payload).await?;
    Ok(Json(recruiter))
}

#[utoipa::path(
    delete,
    path = "/api/admin/recruiters/{id}",
    params(
        ("id" = Uuid, Path, description = "Recruiter ID")
    ),
    responses(
        (status = 204, description = "Recruiter removed"),
        (status = 404, description = "Recruiter not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_recruiter(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.directory_service.delete_recruiter(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/admin/positions",
    params(
        ("department" = Option<String>, Query, description = "Department filter")
    ),
    responses(
        (status = 200, description = "Positions by department, then title")
    )
)]
#[axum::debug_handler]
pub async fn list_positions(
    State(state): State<AppState>,
    Query(query): Query<PositionQuery>,
) -> Result<impl IntoResponse> {
    let items = state
        .directory_service
        .list_positions(query.department.as_deref())
        .await?;
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/api/admin/positions/departments",
    responses(
        (status = 200, description = "Distinct departments, sorted")
    )
)]
#[axum::debug_handler]
pub async fn list_departments(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let items = state.directory_service.departments().await?;
    Ok(Json(DepartmentsResponse { items }))
}

#[utoipa::path(
    post,
    path = "/api/admin/positions",
    request_body = PositionPayload,
    responses(
        (status = 201, description = "Position added"),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_position(
    State(state): State<AppState>,
    Json(payload): Json<PositionPayload>,
) -> Result<impl IntoResponse> {
    validate(&payload)?;
    let position = state.directory_service.create_position(payload).await?;
    Ok((StatusCode::CREATED, Json(position)))
}

#[utoipa::path(
    put,
    path = "/api/admin/positions/{id}",
    params(
        ("id" = Uuid, Path, description = "Position ID")
    ),
    request_body = PositionPayload,
    responses(
        (status = 200, description = "Position replaced"),
        (status = 404, description = "Position not found")
    )
)]
#[axum::debug_handler]
pub async fn update_position(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<PositionPayload>,
) -> Result<impl IntoResponse> {
    validate(&payload)?;
    let position = state.directory_service.update_position(id, payload).await?;
    Ok(Json(position))
}

#[utoipa::path(
    delete,
    path = "/api/admin/positions/{id}",
    params(
        ("id" = Uuid, Path, description = "Position ID")
    ),
    responses(
        (status = 204, description = "Position removed"),
        (status = 404, description = "Position not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_position(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.directory_service.delete_position(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
