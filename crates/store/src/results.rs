//! Write-once cache of computed analysis results.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use cohort_core::AnalysisResult;

/// Result cache keyed by job id.
///
/// The first write for a job id sticks; later writes are ignored so that
/// a result, once produced, is always served identically.
#[async_trait]
pub trait ResultCache: Send + Sync {
    /// Store a result. Returns `false` if one already existed for the id
    /// (the stored result is left untouched).
    async fn put(&self, result: AnalysisResult) -> bool;

    async fn get(&self, id: Uuid) -> Option<Arc<AnalysisResult>>;
}

/// In-memory result cache.
#[derive(Debug, Default)]
pub struct MemoryResultCache {
    results: RwLock<HashMap<Uuid, Arc<AnalysisResult>>>,
}

impl MemoryResultCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResultCache for MemoryResultCache {
    async fn put(&self, result: AnalysisResult) -> bool {
        let job_id = result.job_id;
        let mut results = self.results.write().unwrap();
        if results.contains_key(&job_id) {
            warn!(job_id = %job_id, "result already cached — ignoring rewrite");
            return false;
        }
        results.insert(job_id, Arc::new(result));
        info!(job_id = %job_id, "result cached");
        true
    }

    async fn get(&self, id: Uuid) -> Option<Arc<AnalysisResult>> {
        self.results.read().unwrap().get(&id).cloned()
    }
}

// ── Tests ────────────────────────────────────────────────────────────
