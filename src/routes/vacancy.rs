use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use uuid::Uuid;

use crate::{
    dto::vacancy_dto::{
        CreateVacancyPayload, UpdateVacancyPayload, VacancyListQuery, VacancyListResponse,
    },
    error::Result,
    utils::validation::validate,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/admin/vacancies",
    request_body = CreateVacancyPayload,
    responses(
        (status = 201, description = "Vacancy created successfully"),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_vacancy(
    State(state): State<AppState>,
    Json(payload): Json<CreateVacancyPayload>,
) -> Result<impl IntoResponse> {
    validate(&payload)?;
    let vacancy = state.vacancy_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(vacancy)))
}

#[utoipa::path(
    patch,
    path = "/api/admin/vacancies/{id}",
    params(
        ("id" = Uuid, Path, description = "Vacancy ID")
    ),
    request_body = UpdateVacancyPayload,
    responses(
        (status = 200, description = "Vacancy updated successfully"),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Vacancy not found")
    )
)]
#[axum::debug_handler]
pub async fn update_vacancy(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateVacancyPayload>,
) -> Result<impl IntoResponse> {
    validate(&payload)?;
    let vacancy = state.vacancy_service.update(id, payload).await?;
    Ok(Json(vacancy))
}

#[utoipa::path(
    post,
    path = "/api/admin/vacancies/{id}/toggle",
    params(
        ("id" = Uuid, Path, description = "Vacancy ID")
    ),
    responses(
        (status = 200, description = "Vacancy opened or closed"),
        (status = 404, description = "Vacancy not found")
    )
)]
#[axum::debug_handler]
pub async fn toggle_vacancy(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let vacancy = state.vacancy_service.toggle(id).await?;
    Ok(Json(vacancy))
}

#[utoipa::path(
    delete,
    path = "/api/admin/vacancies/{id}",
    params(
        ("id" = Uuid, Path, description = "Vacancy ID")
    ),
    responses(
        (status = 204, description = "Vacancy and its questions deleted"),
        (status = 404, description = "Vacancy not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_vacancy(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.vacancy_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/admin/vacancies",
    params(
        ("activeOnly" = Option<bool>, Query, description = "Only open vacancies")
    ),
    responses(
        (status = 200, description = "List of vacancies")
    )
)]
#[axum::debug_handler]
pub async fn list_vacancies(
    State(state): State<AppState>,
    Query(query): Query<VacancyListQuery>,
) -> Result<impl IntoResponse> {
    let items = state
        .vacancy_service
        .list(query.active_only.unwrap_or(false))
        .await?;
    Ok(Json(VacancyListResponse::from(items)))
}

#[utoipa::path(
    get,
    path = "/api/admin/vacancies/{id}",
    params(
        ("id" = Uuid, Path, description = "Vacancy ID")
    ),
    responses(
        (status = 200, description = "Vacancy found"),
        (status = 404, description = "Vacancy not found")
    )
)]
#[axum::debug_handler]
pub async fn get_vacancy(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let vacancy = state.vacancy_service.get_by_id(id).await?;
    Ok(Json(vacancy))
}
