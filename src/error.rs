use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

use crate::database::StoreError;
use crate::form::validate::FormErrors;

pub type Result<T> = std::result::Result<T, Error>;

pub const SUBMISSION_FAILED_NOTICE: &str =
    "We could not send your application. Please try again in a few minutes.";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Application form has {} invalid field(s)", .0.len())]
    Form(FormErrors),

    #[error("Submission failed: {0}")]
    SubmissionFailed(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Excel export error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message) = match self {
            Error::Form(errors) => {
                let body = Json(json!({
                    "error": "Please correct the highlighted fields",
                    "errors": errors,
                }));
                return (StatusCode::UNPROCESSABLE_ENTITY, body).into_response();
            }
            Error::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Error::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            Error::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            Error::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Error::Conflict(msg) => (StatusCode::CONFLICT, msg),
            Error::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            Error::Json(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            Error::Store(msg) => {
                tracing::error!(error = %msg, "store request failed");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "The service is temporarily unavailable".to_string(),
                )
            }
            Error::SubmissionFailed(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                SUBMISSION_FAILED_NOTICE.to_string(),
            ),
            Error::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            Error::Xlsx(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Export error: {}", err),
            ),
            Error::Config(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An unexpected error occurred".to_string(),
            ),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => Error::NotFound("Resource not found".to_string()),
            StoreError::Unavailable(msg) => Error::Store(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn store_failures_do_not_leak_driver_text() {
        let err = Error::from(StoreError::Unavailable(
            "error returned from database: relation \"candidates\" does not exist".into(),
        ));
        let res = err.into_response();
        assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "The service is temporarily unavailable");
    }
}
