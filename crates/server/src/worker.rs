//! Background worker: blocking dequeue-process loop.
//!
//! Each worker pulls job ids from the shared queue, flips the job to
//! `in_progress` before touching any data, runs the analysis over the
//! current dataset snapshot, writes the result, and only then marks the
//! job `complete`. That write ordering is the one cross-operation
//! guarantee the query side relies on: a `complete` status is never
//! observable before its result.
//!
//! Failures are absorbed into the state machine — the job is marked
//! `failed` with a logged reason and the loop moves on, so one bad job
//! cannot stall the worker. There is no retry and no processing timeout.

use std::sync::Arc;

use tracing::{error, info, warn};
use uuid::Uuid;

use cohort_core::{AnalysisResult, CohortError, Job, JobStatus};
use cohort_queue::WorkReceiver;

use crate::state::AppState;

/// Run one worker loop until the queue is closed and drained.
pub async fn run_worker(state: Arc<AppState>, receiver: WorkReceiver, worker_id: usize) {
    info!(worker_id = worker_id, "worker started");
    while let Some(job_id) = receiver.dequeue().await {
        process_job(&state, job_id).await;
    }
    info!(worker_id = worker_id, "work queue closed — worker exiting");
}

/// Process a single dequeued job id through the status state machine.
async fn process_job(state: &AppState, job_id: Uuid) {
    let Some(job) = state.jobs.get(job_id).await else {
        // The submitter already moved on; nothing to error, nothing to requeue.
        warn!(job_id = %job_id, "dequeued job not found in job store — dropping");
        return;
    };

    // Mark in_progress before any processing so status queries never see
    // a stale `submitted` once work has started.
    if let Err(e) = state.jobs.update_status(job_id, JobStatus::InProgress).await {
        warn!(job_id = %job_id, error = %e, "could not mark job in_progress — dropping");
        return;
    }

    match execute(state, &job).await {
        Ok(result) => {
            let total = result.total_records;
            let skipped = result.skipped_records;
            // Result first, status second — a `complete` status must never
            // be observable before its result.
            state.results.put(result).await;
            if let Err(e) = state.jobs.update_status(job_id, JobStatus::Complete).await {
                error!(job_id = %job_id, error = %e, "result cached but status update failed");
                return;
            }
            info!(
                job_id = %job_id,
                total_records = total,
                skipped_records = skipped,
                "job complete"
            );
        }
        Err(reason) => {
            error!(job_id = %job_id, error = %reason, "job failed");
            if let Err(e) = state.jobs.update_status(job_id, JobStatus::Failed).await {
                error!(job_id = %job_id, error = %e, "could not record job failure");
            }
        }
    }
}

/// Run the analysis pipeline for one job.
async fn execute(state: &AppState, job: &Job) -> Result<AnalysisResult, CohortError> {
    let records = state.dataset.get().await.ok_or(CohortError::DatasetEmpty)?;
    Ok(cohort_compute::run_analysis(job, records.as_slice()))
}

// ── Tests ────────────────────────────────────────────────────────────
