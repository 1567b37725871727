//! Job submission and status endpoints.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{error, info};
use uuid::Uuid;

use cohort_core::{parse_date, AnalysisMethod, CohortError, Job, JobStatus};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateJobRequest {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub method: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateJobResponse {
    pub job_id: Uuid,
    pub status: JobStatus,
}

/// POST /jobs — validate, create, enqueue. Fire-and-forget: the caller
/// polls for completion, it never blocks on it.
pub async fn jobs_create(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateJobRequest>,
) -> Result<(StatusCode, Json<CreateJobResponse>), ApiError> {
    // All validation happens before any state is touched; a rejected
    // request leaves no job behind.
    let start_raw = require_date(&req.start_date)?;
    let end_raw = require_date(&req.end_date)?;
    let start = parse_date(start_raw)?;
    let end = parse_date(end_raw)?;
    if start > end {
        return Err(CohortError::InvalidDateRange {
            start: start_raw.to_string(),
            end: end_raw.to_string(),
        }
        .into());
    }
    let method = AnalysisMethod::resolve(req.method.as_deref())?;

    let job = state.jobs.create(start, end, method).await;
    state.queue.enqueue(job.id).map_err(|e| {
        error!(job_id = %job.id, error = %e, "job created but enqueue failed");
        ApiError::Internal("failed to enqueue job".to_string())
    })?;

    info!(job_id = %job.id, start = %start, end = %end, method = ?method, "job submitted");
    Ok((
        StatusCode::CREATED,
        Json(CreateJobResponse {
            job_id: job.id,
            status: job.status,
        }),
    ))
}

fn require_date(field: &Option<String>) -> Result<&str, ApiError> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            ApiError::Validation(
                "both 'start_date' and 'end_date' are required in YYYY-MM-DD format".to_string(),
            )
        })
}

/// GET /jobs — every known job id.
pub async fn jobs_list(State(state): State<Arc<AppState>>) -> Json<Value> {
    let ids = state.jobs.list_ids().await;
    Json(json!({ "jobs": ids }))
}

/// GET /jobs/{id} — the full job record.
pub async fn jobs_get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Job>, ApiError> {
    let job_id = parse_job_id(&id)?;
    state
        .jobs
        .get(job_id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("job not found: {}", job_id)))
}

/// A malformed id can't name any job, so it reads as not-found rather
/// than a bad request.
pub(super) fn parse_job_id(id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(id).map_err(|_| ApiError::NotFound(format!("job not found: {}", id)))
}
