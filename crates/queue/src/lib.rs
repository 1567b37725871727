//! FIFO work queue handing job ids from submission to the workers.
//!
//! Entries carry no payload — just the job id; everything else lives in
//! the job store. The queue is a closeable channel: `dequeue` awaits the
//! next entry without spinning, and a `None` return means the queue was
//! closed and the worker loop should drain out. Each entry is delivered to
//! exactly one consumer, so any number of workers can share the receiver.
//!
//! There is no redelivery and no visibility timeout: a worker that dies
//! mid-job takes the entry with it and the job stays `in_progress`.

pub mod error;
pub mod work_queue;

pub use error::QueueError;
pub use work_queue::{work_queue, WorkQueue, WorkReceiver};
