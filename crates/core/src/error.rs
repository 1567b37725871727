use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum CohortError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(String),

    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid range: start {start} is after end {end}")]
    InvalidDateRange { start: String, end: String },

    #[error("Unknown analysis method: {0}")]
    UnknownMethod(String),

    #[error("Job not found: {0}")]
    JobNotFound(Uuid),

    #[error("No dataset loaded")]
    DatasetEmpty,

    #[error("Job {0} is complete but has no cached result")]
    ResultMissing(Uuid),

    #[error("{0}")]
    Other(String),
}
