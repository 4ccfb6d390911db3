use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use uuid::Uuid;

use crate::{
    dto::candidate_dto::{
        CandidateListQuery, CandidateListResponse, UpdateCandidateStatusPayload,
    },
    error::Result,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/admin/candidates",
    params(
        ("vacancyId" = Option<Uuid>, Query, description = "Only applications for this vacancy")
    ),
    responses(
        (status = 200, description = "Applications, newest first")
    )
)]
#[axum::debug_handler]
pub async fn list_candidates(
    State(state): State<AppState>,
    Query(query): Query<CandidateListQuery>,
) -> Result<impl IntoResponse> {
    let items = state
        .candidate_service
        .list_candidates(query.vacancy_id)
        .await?;
    Ok(Json(CandidateListResponse::from(items)))
}

#[utoipa::path(
    get,
    path = "/api/admin/candidates/{id}",
    params(
        ("id" = Uuid, Path, description = "Candidate ID")
    ),
    responses(
        (status = 200, description = "Application with its answers"),
        (status = 404, description = "Candidate not found")
    )
)]
#[axum::debug_handler]
pub async fn get_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let candidate = state.candidate_service.get_candidate(id).await?;
    Ok(Json(candidate))
}

#[utoipa::path(
    post,
    path = "/api/admin/candidates/{id}/status",
    params(
        ("id" = Uuid, Path, description = "Candidate ID")
    ),
    request_body = UpdateCandidateStatusPayload,
    responses(
        (status = 200, description = "Status changed"),
        (status = 404, description = "Candidate not found")
    )
)]
#[axum::debug_handler]
pub async fn update_candidate_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCandidateStatusPayload>,
) -> Result<impl IntoResponse> {
    let candidate = state
        .candidate_service
        .update_status(id, payload.status)
        .await?;
    Ok(Json(candidate))
}

#[utoipa::path(
    delete,
    path = "/api/admin/candidates/{id}",
    params(
        ("id" = Uuid, Path, description = "Candidate ID")
    ),
    responses(
        (status = 204, description = "Candidate deleted"),
        (status = 404, description = "Candidate not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.candidate_service.delete_candidate(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
