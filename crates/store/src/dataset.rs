//! Single-slot cache for the currently loaded dataset.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use tracing::info;

use cohort_core::DatasetRecord;

/// The dataset cache holds at most one record collection.
///
/// `load` replaces the whole snapshot atomically; concurrent loads race
/// last-write-wins, which is acceptable because loads are rare
/// operator-triggered events. Readers get a cheap `Arc` snapshot handle
/// and never observe a partially replaced collection.
#[async_trait]
pub trait DatasetCache: Send + Sync {
    /// Replace the cached collection. Returns the new record count.
    async fn load(&self, records: Vec<DatasetRecord>) -> usize;

    /// Snapshot of the current collection, or `None` when nothing is loaded.
    async fn get(&self) -> Option<Arc<Vec<DatasetRecord>>>;

    /// Evict the cached collection. Returns whether anything was removed.
    async fn clear(&self) -> bool;
}

/// In-memory dataset cache.
#[derive(Debug, Default)]
pub struct MemoryDatasetCache {
    slot: RwLock<Option<Arc<Vec<DatasetRecord>>>>,
}

impl MemoryDatasetCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DatasetCache for MemoryDatasetCache {
    async fn load(&self, records: Vec<DatasetRecord>) -> usize {
        let count = records.len();
        let mut slot = self.slot.write().unwrap();
        *slot = Some(Arc::new(records));
        info!(record_count = count, "dataset cache replaced");
        count
    }

    async fn get(&self) -> Option<Arc<Vec<DatasetRecord>>> {
        self.slot.read().unwrap().clone()
    }

    async fn clear(&self) -> bool {
        let removed = self.slot.write().unwrap().take().is_some();
        if removed {
            info!("dataset cache cleared");
        }
        removed
    }
}

// ── Tests ────────────────────────────────────────────────────────────
