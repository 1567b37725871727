//! API error type and status mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use cohort_core::CohortError;
use cohort_ingest::IngestError;

/// Errors surfaced to HTTP clients as `{"error": "..."}` bodies.
#[derive(Debug)]
pub enum ApiError {
    /// Bad or missing input at submission time; nothing was mutated.
    Validation(String),
    /// Unknown job, record, or dataset.
    NotFound(String),
    /// The external dataset source failed or returned garbage.
    Upstream(String),
    /// A complete job without a cached result — a write-ordering bug.
    Inconsistent(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg),
            Self::Inconsistent(msg) => {
                error!(error = %msg, "result cache inconsistency");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            Self::Internal(msg) => {
                error!(error = %msg, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<CohortError> for ApiError {
    fn from(e: CohortError) -> Self {
        match e {
            CohortError::InvalidDate(_)
            | CohortError::InvalidDateRange { .. }
            | CohortError::UnknownMethod(_) => Self::Validation(e.to_string()),
            CohortError::JobNotFound(_) | CohortError::DatasetEmpty => {
                Self::NotFound(e.to_string())
            }
            CohortError::ResultMissing(_) => Self::Inconsistent(e.to_string()),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl From<IngestError> for ApiError {
    fn from(e: IngestError) -> Self {
        match e {
            IngestError::Fetch(_)
            | IngestError::UpstreamStatus(_)
            | IngestError::Parse(_)
            | IngestError::UnexpectedShape(_) => Self::Upstream(e.to_string()),
            IngestError::Io(io) => Self::Internal(io.to_string()),
        }
    }
}
