//! Queue error types.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum QueueError {
    #[error("queue closed: job {0} not enqueued")]
    Closed(Uuid),
}
