//! Record enumeration and lookup over the cached dataset.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

use cohort_core::DatasetRecord;

use crate::error::ApiError;
use crate::state::AppState;

async fn snapshot(state: &AppState) -> Result<Arc<Vec<DatasetRecord>>, ApiError> {
    state
        .dataset
        .get()
        .await
        .ok_or_else(|| ApiError::NotFound("no dataset loaded".to_string()))
}

/// GET /records — domain ids of every cached record.
pub async fn records_list(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    let records = snapshot(&state).await?;
    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    Ok(Json(json!(ids)))
}

/// GET /records/{id} — a single record by domain id.
pub async fn records_get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DatasetRecord>, ApiError> {
    let records = snapshot(&state).await?;
    records
        .iter()
        .find(|r| r.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("record not found: {}", id)))
}
