//! HTTP router construction.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api;
use crate::state::AppState;

/// Build the complete application router with all routes and middleware.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route(
            "/data",
            post(api::data_load)
                .get(api::data_get)
                .delete(api::data_delete),
        )
        .route("/records", get(api::records_list))
        .route("/records/{id}", get(api::records_get))
        .route("/jobs", post(api::jobs_create).get(api::jobs_list))
        .route("/jobs/{id}", get(api::jobs_get))
        .route("/results/{id}", get(api::results_get))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
