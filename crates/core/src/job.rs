//! Job model: identity, date range, analysis method, and the status
//! state machine.
//!
//! A job is created `submitted`, moves to `in_progress` when a worker picks
//! it up, and ends `complete` or `failed`. Terminal states are final — the
//! only way to re-run an analysis is to submit a new job.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CohortError;

/// Wire format for job date ranges.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date string.
pub fn parse_date(s: &str) -> Result<NaiveDate, CohortError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| CohortError::InvalidDate(s.to_string()))
}

// ── Status state machine ─────────────────────────────────────────────

/// Current status of an analysis job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Submitted,
    InProgress,
    Complete,
    Failed,
}

impl JobStatus {
    /// Whether this status admits no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete | Self::Failed)
    }

    /// Forward-only transition check: submitted → in_progress → complete|failed.
    pub fn allows_transition_to(&self, next: JobStatus) -> bool {
        matches!(
            (self, next),
            (Self::Submitted, Self::InProgress)
                | (Self::InProgress, Self::Complete)
                | (Self::InProgress, Self::Failed)
        )
    }

    /// Lowercase wire name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Submitted => "submitted",
            Self::InProgress => "in_progress",
            Self::Complete => "complete",
            Self::Failed => "failed",
        }
    }
}

// ── Analysis method ──────────────────────────────────────────────────

/// Which analysis to run over the filtered records.
///
/// Resolved at submission time from the request's `method` string; unknown
/// names are rejected there rather than surfacing later as a failed job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMethod {
    /// Count records per category value (e.g. locus types for gene data).
    CategoryCounts,
    /// Per formation/play-type/direction combination, count plays and the
    /// share whose description mentions an injury.
    InjuryRates,
}

impl Default for AnalysisMethod {
    fn default() -> Self {
        Self::CategoryCounts
    }
}

impl AnalysisMethod {
    /// Resolve a request `method` string. `None` selects the default
    /// full-range category summary.
    pub fn resolve(method: Option<&str>) -> Result<Self, CohortError> {
        match method.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some("category_counts") => Ok(Self::CategoryCounts),
            Some("injury_rates") => Ok(Self::InjuryRates),
            Some(other) => Err(CohortError::UnknownMethod(other.to_string())),
        }
    }
}

// ── Job record ───────────────────────────────────────────────────────

/// One asynchronous analysis request over a date range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: Uuid,
    pub status: JobStatus,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub method: AnalysisMethod,
    pub created_at: DateTime<Utc>,
}

impl Job {
    /// Build a freshly submitted job with a generated id.
    ///
    /// `start <= end` must already have been validated; it is never
    /// re-checked after creation.
    pub fn submitted(start: NaiveDate, end: NaiveDate, method: AnalysisMethod) -> Self {
        Self {
            id: Uuid::new_v4(),
            status: JobStatus::Submitted,
            start,
            end,
            method,
            created_at: Utc::now(),
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────
