use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use uuid::Uuid;

use crate::{
    dto::{
        public_dto::{ApplicationPayload, FormQuery},
        vacancy_dto::VacancyListResponse,
    },
    error::Result,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/public/vacancies",
    responses(
        (status = 200, description = "Active vacancies, newest first")
    )
)]
#[axum::debug_handler]
pub async fn list_public_vacancies(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let items = state.vacancy_service.list(true).await?;
    Ok(Json(VacancyListResponse::from(items)))
}

#[utoipa::path(
    get,
    path = "/api/public/vacancies/{id}",
    params(
        ("id" = Uuid, Path, description = "Vacancy ID")
    ),
    responses(
        (status = 200, description = "Active vacancy"),
        (status = 404, description = "Vacancy not found or closed")
    )
)]
#[axum::debug_handler]
pub async fn get_public_vacancy(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let vacancy = state.vacancy_service.get_active(id).await?;
    Ok(Json(vacancy))
}

#[utoipa::path(
    get,
    path = "/api/public/form",
    params(
        ("vacancyId" = Option<Uuid>, Query, description = "Vacancy picked so far")
    ),
    responses(
        (status = 200, description = "Combined application form")
    )
)]
#[axum::debug_handler]
pub async fn get_combined_form(
    State(state): State<AppState>,
    Query(query): Query<FormQuery>,
) -> Result<impl IntoResponse> {
    let schema = state
        .application_service
        .form_schema(None, query.vacancy_id)
        .await?;
    Ok(Json(schema))
}

#[utoipa::path(
    get,
    path = "/api/public/vacancies/{id}/form",
    params(
        ("id" = Uuid, Path, description = "Vacancy ID")
    ),
    responses(
        (status = 200, description = "Application form for one vacancy"),
        (status = 404, description = "Vacancy not found or closed")
    )
)]
#[axum::debug_handler]
pub async fn get_vacancy_form(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let schema = state.application_service.form_schema(Some(id), None).await?;
    Ok(Json(schema))
}

#[utoipa::path(
    post,
    path = "/api/public/applications",
    request_body = ApplicationPayload,
    responses(
        (status = 201, description = "Application stored"),
        (status = 422, description = "Invalid fields, keyed by field name"),
        (status = 503, description = "Application could not be stored")
    )
)]
#[axum::debug_handler]
pub async fn submit_application(
    State(state): State<AppState>,
    Json(payload): Json<ApplicationPayload>,
) -> Result<impl IntoResponse> {
    let candidate = state.application_service.submit(None, payload).await?;
    Ok((StatusCode::CREATED, Json(candidate)))
}

#[utoipa::path(
    post,
    path = "/api/public/vacancies/{id}/applications",
    params(
        ("id" = Uuid, Path, description = "Vacancy ID")
    ),
    request_body = ApplicationPayload,
    responses(
        (status = 201, description = "Application stored"),
        (status = 404, description = "Vacancy not found or closed"),
        (status = 422, description = "Invalid fields, keyed by field name"),
        (status = 503, description = "Application could not be stored")
    )
)]
#[axum::debug_handler]
pub async fn submit_vacancy_application(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ApplicationPayload>,
) -> Result<impl IntoResponse> {
    let candidate = state.application_service.submit(Some(id), payload).await?;
    Ok((StatusCode::CREATED, Json(candidate)))
}
