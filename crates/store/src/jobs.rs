//! Durable map from job id to job record.

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::NaiveDate;
use indexmap::IndexMap;
use tracing::{info, warn};
use uuid::Uuid;

use cohort_core::{AnalysisMethod, CohortError, Job, JobStatus};

/// Key-value store for job records; last write wins.
///
/// `update_status` is a read-modify-write of the full record, not a
/// partial patch. A concurrent update could be lost, but in this design
/// only the one worker that dequeued a job ever mutates it.
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Generate an id, persist a `submitted` job, and return it.
    async fn create(&self, start: NaiveDate, end: NaiveDate, method: AnalysisMethod) -> Job;

    async fn get(&self, id: Uuid) -> Option<Job>;

    /// Overwrite the stored record's status. Fails only for unknown ids.
    async fn update_status(&self, id: Uuid, status: JobStatus) -> Result<(), CohortError>;

    /// All known job ids, oldest first.
    async fn list_ids(&self) -> Vec<Uuid>;
}

/// In-memory job store.
///
/// `IndexMap` preserves insertion order so `list_ids` enumerates jobs in
/// submission order while lookups stay O(1).
#[derive(Debug, Default)]
pub struct MemoryJobStore {
    jobs: RwLock<IndexMap<Uuid, Job>>,
}

impl MemoryJobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl JobStore for MemoryJobStore {
    async fn create(&self, start: NaiveDate, end: NaiveDate, method: AnalysisMethod) -> Job {
        let job = Job::submitted(start, end, method);
        let mut jobs = self.jobs.write().unwrap();
        jobs.insert(job.id, job.clone());
        info!(job_id = %job.id, start = %start, end = %end, "job created");
        job
    }

    async fn get(&self, id: Uuid) -> Option<Job> {
        self.jobs.read().unwrap().get(&id).cloned()
    }

    async fn update_status(&self, id: Uuid, status: JobStatus) -> Result<(), CohortError> {
        let mut jobs = self.jobs.write().unwrap();
        let job = jobs.get_mut(&id).ok_or(CohortError::JobNotFound(id))?;
        if !job.status.allows_transition_to(status) {
            // Single-writer discipline should make this unreachable.
            warn!(
                job_id = %id,
                from = job.status.as_str(),
                to = status.as_str(),
                "non-forward status transition"
            );
        }
        job.status = status;
        info!(job_id = %id, status = status.as_str(), "job status updated");
        Ok(())
    }

    async fn list_ids(&self) -> Vec<Uuid> {
        self.jobs.read().unwrap().keys().copied().collect()
    }
}

// ── Tests ────────────────────────────────────────────────────────────
