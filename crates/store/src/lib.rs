//! Shared stores for the job pipeline.
//!
//! Three logically separate keyspaces sit between the HTTP handlers and the
//! workers: the single-slot dataset cache, the job store, and the
//! write-once result cache. Each is a trait seam so tests and alternative
//! deployments can substitute their own backing; the in-memory
//! implementations here provide the atomic single-key operations the
//! pipeline relies on.

pub mod dataset;
pub mod jobs;
pub mod results;

pub use dataset::{DatasetCache, MemoryDatasetCache};
pub use jobs::{JobStore, MemoryJobStore};
pub use results::{MemoryResultCache, ResultCache};
