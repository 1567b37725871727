//! Result retrieval endpoint.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use cohort_core::JobStatus;

use crate::error::ApiError;
use crate::state::AppState;

use super::jobs::parse_job_id;

/// GET /results/{id}.
///
/// The result cache is consulted first: once a result exists it is always
/// served the same way, regardless of later job-record changes. Only on a
/// cache miss is the job record inspected to decide between 404, 202, and
/// the defensive 500 for a complete job with no result.
pub async fn results_get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let job_id = parse_job_id(&id)?;

    if let Some(result) = state.results.get(job_id).await {
        return Ok(Json(&*result).into_response());
    }

    let job = state
        .jobs
        .get(job_id)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("job not found: {}", job_id)))?;

    if job.status != JobStatus::Complete {
        return Ok((
            StatusCode::ACCEPTED,
            Json(json!({
                "message": format!("Job {} is not yet finished.", job_id),
                "status": job.status,
            })),
        )
            .into_response());
    }

    Err(ApiError::Inconsistent(format!(
        "job {} is complete but has no cached result",
        job_id
    )))
}
