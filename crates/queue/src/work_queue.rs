//! Channel-backed queue implementation.

use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

use crate::error::QueueError;

/// Create a connected queue/receiver pair.
pub fn work_queue() -> (WorkQueue, WorkReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (
        WorkQueue { tx },
        WorkReceiver {
            rx: Arc::new(Mutex::new(rx)),
        },
    )
}

/// Producer half: submission handlers append job ids here.
#[derive(Debug, Clone)]
pub struct WorkQueue {
    tx: UnboundedSender<Uuid>,
}

impl WorkQueue {
    /// Append a job id to the FIFO.
    pub fn enqueue(&self, id: Uuid) -> Result<(), QueueError> {
        self.tx.send(id).map_err(|_| QueueError::Closed(id))?;
        info!(job_id = %id, "job enqueued");
        Ok(())
    }
}

/// Consumer half: worker loops pull ids one at a time.
///
/// Cloneable so several workers can compete for entries; the inner mutex
/// serializes the actual channel reads, which keeps each entry with a
/// single consumer.
#[derive(Debug, Clone)]
pub struct WorkReceiver {
    rx: Arc<Mutex<UnboundedReceiver<Uuid>>>,
}

impl WorkReceiver {
    /// Await the next job id. Returns `None` once the queue is closed
    /// (every [`WorkQueue`] handle dropped) and drained.
    pub async fn dequeue(&self) -> Option<Uuid> {
        self.rx.lock().await.recv().await
    }
}

// ── Tests ────────────────────────────────────────────────────────────
