use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
};

use crate::{
    dto::candidate_dto::CandidateListQuery,
    error::Result,
    services::export_service::{ExportService, XLSX_CONTENT_TYPE},
    AppState,
};

fn attachment(prefix: &str, buffer: Vec<u8>) -> impl IntoResponse {
    let filename = format!("{}_{}.xlsx", prefix, chrono::Utc::now().format("%Y%m%d"));
    let disposition = format!("attachment; filename=\"{}\"", filename);

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        buffer,
    )
}

/// Export candidates as XLSX, optionally for a single vacancy
#[utoipa::path(
    get,
    path = "/api/admin/candidates/export",
    params(
        ("vacancyId" = Option<uuid::Uuid>, Query, description = "Only applications for this vacancy")
    ),
    responses(
        (status = 200, description = "XLSX workbook")
    )
)]
pub async fn export_candidates(
    State(state): State<AppState>,
    Query(query): Query<CandidateListQuery>,
) -> Result<impl IntoResponse> {
    let candidates = state
        .candidate_service
        .list_candidates(query.vacancy_id)
        .await?;
    let buffer = ExportService::generate_candidates_xlsx(&candidates)?;
    tracing::info!(rows = candidates.len(), "candidates exported");
    Ok(attachment("candidates", buffer))
}

/// Export the recruiter directory as XLSX
#[utoipa::path(
    get,
    path = "/api/admin/recruiters/export",
    responses(
        (status = 200, description = "XLSX workbook")
    )
)]
pub async fn export_recruiters(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let recruiters = state.directory_service.list_recruiters().await?;
    let buffer = ExportService::generate_recruiters_xlsx(&recruiters)?;
    Ok(attachment("recruiters", buffer))
}
