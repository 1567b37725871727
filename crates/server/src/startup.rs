//! Server startup: shared state construction and worker spawning.

use std::sync::Arc;

use tracing::info;

use cohort_core::Config;
use cohort_ingest::DatasetFetcher;
use cohort_queue::{work_queue, WorkReceiver};
use cohort_store::{MemoryDatasetCache, MemoryJobStore, MemoryResultCache};

use crate::state::AppState;
use crate::worker;

/// Build `AppState` with the in-memory stores and a fresh work queue.
///
/// Returns the receiver half separately so the caller decides how many
/// workers to attach to it.
pub fn build_app_state(config: Config) -> (Arc<AppState>, WorkReceiver) {
    let (queue, receiver) = work_queue();
    let fetcher = DatasetFetcher::new(config.dataset.field_profile());

    let state = Arc::new(AppState {
        dataset: Arc::new(MemoryDatasetCache::new()),
        jobs: Arc::new(MemoryJobStore::new()),
        results: Arc::new(MemoryResultCache::new()),
        queue,
        fetcher,
        config,
    });

    (state, receiver)
}

/// Spawn the configured number of worker loops over a shared receiver.
pub fn spawn_workers(state: &Arc<AppState>, receiver: WorkReceiver) {
    let count = state.config.worker.count;
    info!(worker_count = count, "spawning workers");
    for worker_id in 0..count {
        let state = state.clone();
        let receiver = receiver.clone();
        tokio::spawn(async move {
            worker::run_worker(state, receiver, worker_id).await;
        });
    }
}

// ── Test support ─────────────────────────────────────────────────────
