//! Dataset record model and field profiles.
//!
//! A record is one semi-structured row from the loaded dataset. The fields
//! the analysis pipeline cares about (domain id, date, category,
//! description) are lifted out of the raw row according to a
//! [`FieldProfile`]; everything else is kept verbatim in `extra` so single
//! record lookups can return the full row.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::job::DATE_FORMAT;

/// One row of the cached dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetRecord {
    /// Domain identifier (e.g. an HGNC id or a play id).
    pub id: String,
    /// Raw date text. Parsed per use so a malformed value can be skipped
    /// for one record without failing the whole job.
    pub date: Option<String>,
    /// Categorical field (e.g. locus type, formation).
    pub category: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// Remaining source fields, preserved as-is.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

impl DatasetRecord {
    /// Parse the record's date field as `YYYY-MM-DD`, if present and valid.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        self.date
            .as_deref()
            .and_then(|s| NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok())
    }

    /// Look up a retained extra field as a string.
    pub fn extra_str(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(Value::as_str)
    }
}

// ── Field profiles ───────────────────────────────────────────────────

/// Names of the source columns that map onto [`DatasetRecord`] fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldProfile {
    pub id_field: String,
    pub date_field: String,
    pub category_field: String,
    pub description_field: String,
}

impl FieldProfile {
    /// HGNC gene dataset: locus types keyed by approval date.
    pub fn genes() -> Self {
        Self {
            id_field: "hgnc_id".to_string(),
            date_field: "date_approved_reserved".to_string(),
            category_field: "locus_type".to_string(),
            description_field: "name".to_string(),
        }
    }

    /// NFL play-by-play dataset: formations keyed by game date.
    pub fn plays() -> Self {
        Self {
            id_field: "play_id".to_string(),
            date_field: "GameDate".to_string(),
            category_field: "Formation".to_string(),
            description_field: "Description".to_string(),
        }
    }

    /// Resolve a named preset. Deployment selects this via `DATASET_PROFILE`.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "genes" => Some(Self::genes()),
            "plays" => Some(Self::plays()),
            _ => None,
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────
