//! Dataset cache endpoints: load, read, evict.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

/// Optional body for `POST /data`.
#[derive(Debug, Default, Deserialize)]
pub struct LoadDataRequest {
    /// Overrides the configured `DATASET_URL` for this load.
    pub source_url: Option<String>,
}

/// POST /data — fetch the dataset source and replace the cache.
pub async fn data_load(
    State(state): State<Arc<AppState>>,
    body: Option<Json<LoadDataRequest>>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let req = body.map(|Json(r)| r).unwrap_or_default();
    let url = req
        .source_url
        .or_else(|| state.config.dataset.source_url.clone())
        .ok_or_else(|| {
            ApiError::Validation(
                "no dataset source configured — set DATASET_URL or pass 'source_url'".to_string(),
            )
        })?;

    let records = state.fetcher.fetch(&url).await?;
    let record_count = state.dataset.load(records).await;
    info!(url = %url, record_count = record_count, "dataset loaded");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "dataset loaded successfully",
            "record_count": record_count,
        })),
    ))
}

/// GET /data — the full cached record collection.
pub async fn data_get(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    let records = state
        .dataset
        .get()
        .await
        .ok_or_else(|| ApiError::NotFound("no dataset loaded".to_string()))?;
    Ok(Json(serde_json::to_value(&*records).map_err(|e| {
        ApiError::Internal(format!("failed to serialize dataset: {}", e))
    })?))
}

/// DELETE /data — evict the cached dataset.
pub async fn data_delete(State(state): State<Arc<AppState>>) -> Result<StatusCode, ApiError> {
    if state.dataset.clear().await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("no dataset to delete".to_string()))
    }
}
