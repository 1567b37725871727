use std::sync::Arc;

use cohort_core::Config;
use cohort_ingest::DatasetFetcher;
use cohort_queue::WorkQueue;
use cohort_store::{DatasetCache, JobStore, ResultCache};

/// Shared application state.
///
/// Handlers and workers coordinate only through the three stores and the
/// queue; the trait objects let tests plug in their own backings.
pub struct AppState {
    pub config: Config,
    pub dataset: Arc<dyn DatasetCache>,
    pub jobs: Arc<dyn JobStore>,
    pub results: Arc<dyn ResultCache>,
    pub queue: WorkQueue,
    pub fetcher: DatasetFetcher,
}
