//! Analysis result model.
//!
//! A result is written exactly once per completed job and treated as
//! immutable afterwards. Breakdown maps are ordered (`IndexMap`) so that
//! repeated serialization of a cached result is byte-identical.

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::job::AnalysisMethod;

/// Per-category rate entry for the injury breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateStat {
    /// Records counted in this category.
    pub total: u64,
    /// Records whose description matched.
    pub hits: u64,
    /// `hits / total * 100`, rounded to two decimals.
    pub percentage: f64,
}

/// Method-specific result payload, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Breakdown {
    Counts { categories: IndexMap<String, u64> },
    Rates { categories: IndexMap<String, RateStat> },
}

/// Output of one completed job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub job_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub method: AnalysisMethod,
    /// Records whose date fell inside `[start_date, end_date]`.
    pub total_records: u64,
    /// Records skipped because their date field was missing or malformed.
    pub skipped_records: u64,
    pub breakdown: Breakdown,
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakdown_counts_serde() {
        let mut categories = IndexMap::new();
        categories.insert("protein-coding gene".to_string(), 1u64);
        categories.insert("pseudogene".to_string(), 1u64);

        let json = serde_json::to_string(&Breakdown::Counts { categories }).unwrap();
        assert!(json.contains("\"kind\":\"counts\""));
        assert!(json.contains("\"protein-coding gene\":1"));

        let parsed: Breakdown = serde_json::from_str(&json).unwrap();
        match parsed {
            Breakdown::Counts { categories } => assert_eq!(categories.len(), 2),
            other => panic!("expected Counts, got {:?}", other),
        }
    }

    #[test]
    fn test_breakdown_rates_serde() {
        let mut categories = IndexMap::new();
        categories.insert(
            "Formation: SHOTGUN; PlayType: PASS; Direction: SHORT LEFT".to_string(),
            RateStat {
                total: 4,
                hits: 1,
                percentage: 25.0,
            },
        );

        let json = serde_json::to_string(&Breakdown::Rates { categories }).unwrap();
        assert!(json.contains("\"kind\":\"rates\""));
        assert!(json.contains("\"percentage\":25.0"));

        let parsed: Breakdown = serde_json::from_str(&json).unwrap();
        assert!(matches!(parsed, Breakdown::Rates { .. }));
    }

    #[test]
    fn test_result_serialization_is_stable() {
        let mut categories = IndexMap::new();
        categories.insert("pseudogene".to_string(), 3u64);
        categories.insert("ncRNA".to_string(), 1u64);

        let result = AnalysisResult {
            job_id: Uuid::new_v4(),
            start_date: NaiveDate::from_ymd_opt(2010, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2014, 1, 1).unwrap(),
            method: AnalysisMethod::CategoryCounts,
            total_records: 4,
            skipped_records: 0,
            breakdown: Breakdown::Counts { categories },
        };

        // Ordered maps keep insertion order, so repeated reads of a cached
        // result serialize to the same bytes.
        let first = serde_json::to_string(&result).unwrap();
        let second = serde_json::to_string(&result).unwrap();
        assert_eq!(first, second);
        assert!(first.find("pseudogene").unwrap() < first.find("ncRNA").unwrap());
    }
}
