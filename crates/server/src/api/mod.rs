//! Domain-focused API endpoint modules.
//!
//! Each sub-module owns a single responsibility area: dataset cache
//! operations, record lookups, job submission/status, result retrieval,
//! and health.

mod data;
mod health;
mod jobs;
mod records;
mod results;


// ── Re-exports ───────────────────────────────────────────────────
// Preserves flat `api::foo` import paths used by router registration.

pub use data::{data_delete, data_get, data_load};
pub use health::health;
pub use jobs::{jobs_create, jobs_get, jobs_list};
pub use records::{records_get, records_list};
pub use results::results_get;
