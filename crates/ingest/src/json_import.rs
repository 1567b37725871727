//! JSON row extraction and HTTP dataset fetch.

use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, info};

use cohort_core::{DatasetRecord, FieldProfile};

use crate::error::IngestError;

// ── Row extraction ──────────────────────────────────────────────────

/// Maps raw JSON rows onto [`DatasetRecord`]s using a [`FieldProfile`].
pub struct JsonImporter;

impl JsonImporter {
    /// Extract records from a fetched payload.
    ///
    /// Accepts a top-level array of row objects, or the HGNC envelope
    /// `{"response": {"docs": [...]}}`. Non-object rows are dropped with
    /// a debug log.
    pub fn extract(payload: &Value, profile: &FieldProfile) -> Result<Vec<DatasetRecord>, IngestError> {
        let rows = Self::rows(payload)?;

        let mut records = Vec::with_capacity(rows.len());
        for (idx, row) in rows.iter().enumerate() {
            let Some(obj) = row.as_object() else {
                debug!(row = idx, "dropping non-object row");
                continue;
            };
            records.push(Self::record_from_row(obj, profile, idx));
        }

        info!(record_count = records.len(), "dataset rows extracted");
        Ok(records)
    }

    /// Read and extract a local JSON file.
    pub fn import_file(path: &Path, profile: &FieldProfile) -> Result<Vec<DatasetRecord>, IngestError> {
        let raw = std::fs::read_to_string(path)?;
        let payload: Value = serde_json::from_str(&raw)?;
        Self::extract(&payload, profile)
    }

    fn rows(payload: &Value) -> Result<&Vec<Value>, IngestError> {
        if let Some(rows) = payload.as_array() {
            return Ok(rows);
        }
        if let Some(rows) = payload
            .get("response")
            .and_then(|r| r.get("docs"))
            .and_then(Value::as_array)
        {
            return Ok(rows);
        }
        Err(IngestError::UnexpectedShape(
            "expected a row array or a response.docs envelope".to_string(),
        ))
    }

    fn record_from_row(row: &Map<String, Value>, profile: &FieldProfile, idx: usize) -> DatasetRecord {
        let id = match row.get(&profile.id_field) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            // Rows without a domain id still get a stable position-based one.
            _ => format!("row-{}", idx),
        };

        let mut extra = Map::new();
        for (key, value) in row {
            if key != &profile.id_field
                && key != &profile.date_field
                && key != &profile.category_field
                && key != &profile.description_field
            {
                extra.insert(key.clone(), value.clone());
            }
        }

        DatasetRecord {
            id,
            date: field_str(row, &profile.date_field),
            category: field_str(row, &profile.category_field),
            description: field_str(row, &profile.description_field),
            extra,
        }
    }
}

fn field_str(row: &Map<String, Value>, field: &str) -> Option<String> {
    row.get(field).and_then(Value::as_str).map(String::from)
}

// ── HTTP fetch ──────────────────────────────────────────────────────

/// Fetches the dataset source over HTTP and extracts its records.
pub struct DatasetFetcher {
    client: reqwest::Client,
    profile: FieldProfile,
}

impl DatasetFetcher {
    pub fn new(profile: FieldProfile) -> Self {
        Self {
            client: reqwest::Client::new(),
            profile,
        }
    }

    /// GET `url`, expect a JSON body, and extract records from it.
    pub async fn fetch(&self, url: &str) -> Result<Vec<DatasetRecord>, IngestError> {
        info!(url = %url, "fetching dataset");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(IngestError::UpstreamStatus(status.as_u16()));
        }

        let payload: Value = response.json().await?;
        JsonImporter::extract(&payload, &self.profile)
    }
}

// ── Tests ────────────────────────────────────────────────────────────
