use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use uuid::Uuid;

use crate::{
    dto::question_dto::{CreateQuestionPayload, QuestionListResponse, UpdateQuestionPayload},
    error::Result,
    utils::validation::validate,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/admin/vacancies/{id}/questions",
    params(
        ("id" = Uuid, Path, description = "Vacancy ID")
    ),
    responses(
        (status = 200, description = "Questions in display order"),
        (status = 404, description = "Vacancy not found")
    )
)]
#[axum::debug_handler]
pub async fn list_questions(
    State(state): State<AppState>,
    Path(vacancy_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let items = state.question_service.list(vacancy_id).await?;
    Ok(Json(QuestionListResponse::from(items)))
}

#[utoipa::path(
    post,
    path = "/api/admin/vacancies/{id}/questions",
    params(
        ("id" = Uuid, Path, description = "Vacancy ID")
    ),
    request_body = CreateQuestionPayload,
    responses(
        (status = 201, description = "Question appended to the form"),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Vacancy not found")
    )
)]
#[axum::debug_handler]
pub async fn create_question(
    State(state): State<AppState>,
    Path(vacancy_id): Path<Uuid>,
    Json(payload): Json<CreateQuestionPayload>,
) -> Result<impl IntoResponse> {
    validate(&payload)?;
    let question = state.question_service.create(vacancy_id, payload).await?;
    Ok((StatusCode::CREATED, Json(question)))
}

#[utoipa::path(
    patch,
    path = "/api/admin/questions/{id}",
    params(
        ("id" = Uuid, Path, description = "Question ID")
    ),
    request_body = UpdateQuestionPayload,
    responses(
        (status = 200, description = "Question updated"),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Question not found")
    )
)]
#[axum::debug_handler]
pub async fn update_question(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateQuestionPayload>,
) -> Result<impl IntoResponse> {
    validate(&payload)?;
    let question = state.question_service.update(id, payload).await?;
    Ok(Json(question))
}

#[utoipa::path(
    delete,
    path = "/api/admin/questions/{id}",
    params(
        ("id" = Uuid, Path, description = "Question ID")
    ),
    responses(
        (status = 204, description = "Question deleted"),
        (status = 404, description = "Question not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_question(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.question_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
