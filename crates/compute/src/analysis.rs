//! Analysis dispatch and the concrete analysis functions.

use indexmap::IndexMap;
use tracing::debug;

use cohort_core::{AnalysisMethod, AnalysisResult, Breakdown, DatasetRecord, Job, RateStat};

use crate::filter::filter_in_range;

/// Category fallback when a record carries none.
const UNKNOWN_CATEGORY: &str = "Unknown";

/// Play types that participate in the injury breakdown.
const COUNTED_PLAY_TYPES: &[&str] = &["RUSH", "PASS"];

/// Substring in a play description that marks an injury.
const INJURY_MARKER: &str = "injured";

/// Run the job's analysis over a dataset snapshot and assemble the result.
///
/// Filters to the job's inclusive date range (skipping records with
/// unusable dates), then dispatches on the method chosen at submission.
/// An empty filtered set yields a well-formed zero-count result.
pub fn run_analysis(job: &Job, records: &[DatasetRecord]) -> AnalysisResult {
    let filtered = filter_in_range(records, job.start, job.end);
    debug!(
        job_id = %job.id,
        in_range = filtered.records.len(),
        skipped = filtered.skipped,
        "records filtered for analysis"
    );

    let breakdown = match job.method {
        AnalysisMethod::CategoryCounts => Breakdown::Counts {
            categories: category_counts(&filtered.records),
        },
        AnalysisMethod::InjuryRates => Breakdown::Rates {
            categories: injury_rates(&filtered.records),
        },
    };

    AnalysisResult {
        job_id: job.id,
        start_date: job.start,
        end_date: job.end,
        method: job.method,
        total_records: filtered.records.len() as u64,
        skipped_records: filtered.skipped,
        breakdown,
    }
}

/// Count records per category value.
pub fn category_counts(records: &[&DatasetRecord]) -> IndexMap<String, u64> {
    let mut counts: IndexMap<String, u64> = IndexMap::new();
    for record in records {
        let category = record.category.as_deref().unwrap_or(UNKNOWN_CATEGORY);
        *counts.entry(category.to_string()).or_insert(0) += 1;
    }
    counts
}

/// Injury share per formation/play-type/direction combination.
///
/// Only rush and pass plays are counted. The direction comes from the
/// `RushDirection` or `PassType` source field depending on play type, and
/// a play counts as an injury when its description mentions one.
pub fn injury_rates(records: &[&DatasetRecord]) -> IndexMap<String, RateStat> {
    let mut rates: IndexMap<String, RateStat> = IndexMap::new();

    for record in records {
        let play_type = record
            .extra_str("PlayType")
            .unwrap_or_default()
            .to_uppercase();
        if !COUNTED_PLAY_TYPES.contains(&play_type.as_str()) {
            continue;
        }

        let formation = record.category.as_deref().unwrap_or(UNKNOWN_CATEGORY);
        let direction = if play_type == "RUSH" {
            record.extra_str("RushDirection")
        } else {
            record.extra_str("PassType")
        }
        .unwrap_or(UNKNOWN_CATEGORY);

        let key = format!(
            "Formation: {}; PlayType: {}; Direction: {}",
            formation, play_type, direction
        );

        let injured = record
            .description
            .as_deref()
            .map(|d| d.to_lowercase().contains(INJURY_MARKER))
            .unwrap_or(false);

        let stat = rates.entry(key).or_insert(RateStat {
            total: 0,
            hits: 0,
            percentage: 0.0,
        });
        stat.total += 1;
        if injured {
            stat.hits += 1;
        }
        stat.percentage = round2(stat.hits as f64 / stat.total as f64 * 100.0);
    }

    rates
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use cohort_core::JobStatus;
    use serde_json::{Map, Value};
    use uuid::Uuid;

    fn gene(id: &str, date: &str, locus: &str) -> DatasetRecord {
        DatasetRecord {
            id: id.to_string(),
            date: Some(date.to_string()),
            category: Some(locus.to_string()),
            description: None,
            extra: Map::new(),
        }
    }

    fn play(date: &str, formation: &str, play_type: &str, direction: &str, desc: &str) -> DatasetRecord {
        let mut extra = Map::new();
        extra.insert(
            "PlayType".to_string(),
            Value::String(play_type.to_string()),
        );
        let dir_field = if play_type.eq_ignore_ascii_case("RUSH") {
            "RushDirection"
        } else {
            "PassType"
        };
        extra.insert(dir_field.to_string(), Value::String(direction.to_string()));

        DatasetRecord {
            id: Uuid::new_v4().to_string(),
            date: Some(date.to_string()),
            category: Some(formation.to_string()),
            description: Some(desc.to_string()),
            extra,
        }
    }

    fn job(start: &str, end: &str, method: AnalysisMethod) -> Job {
        Job {
            id: Uuid::new_v4(),
            status: JobStatus::InProgress,
            start: NaiveDate::parse_from_str(start, "%Y-%m-%d").unwrap(),
            end: NaiveDate::parse_from_str(end, "%Y-%m-%d").unwrap(),
            method,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_locus_counts_over_date_range() {
        // Three records, one outside the range: only the in-range locus
        // types are counted and the out-of-range category never appears.
        let records = vec![
            gene("HGNC:1", "2012-01-01", "protein-coding gene"),
            gene("HGNC:2", "2013-06-15", "pseudogene"),
            gene("HGNC:3", "2009-01-01", "ncRNA"),
        ];
        let job = job("2010-01-01", "2014-01-01", AnalysisMethod::CategoryCounts);

        let result = run_analysis(&job, &records);
        assert_eq!(result.total_records, 2);
        assert_eq!(result.skipped_records, 0);

        let Breakdown::Counts { categories } = result.breakdown else {
            panic!("expected counts breakdown");
        };
        assert_eq!(categories.get("protein-coding gene"), Some(&1));
        assert_eq!(categories.get("pseudogene"), Some(&1));
        assert!(!categories.contains_key("ncRNA"));
    }

    #[test]
    fn test_empty_filtered_set_yields_zero_counts() {
        let records = vec![gene("HGNC:1", "1999-01-01", "pseudogene")];
        let job = job("2010-01-01", "2014-01-01", AnalysisMethod::CategoryCounts);

        let result = run_analysis(&job, &records);
        assert_eq!(result.total_records, 0);
        let Breakdown::Counts { categories } = result.breakdown else {
            panic!("expected counts breakdown");
        };
        assert!(categories.is_empty());
    }

    #[test]
    fn test_malformed_date_does_not_fail_the_job() {
        let records = vec![
            gene("HGNC:1", "2012-01-01", "pseudogene"),
            gene("HGNC:2", "bogus", "pseudogene"),
            gene("HGNC:3", "2013-01-01", "ncRNA"),
        ];
        let job = job("2010-01-01", "2014-01-01", AnalysisMethod::CategoryCounts);

        let result = run_analysis(&job, &records);
        assert_eq!(result.total_records, 2);
        assert_eq!(result.skipped_records, 1);
    }

    #[test]
    fn test_missing_category_counts_as_unknown() {
        let mut record = gene("HGNC:1", "2012-01-01", "x");
        record.category = None;
        let job = job("2010-01-01", "2014-01-01", AnalysisMethod::CategoryCounts);

        let result = run_analysis(&job, &[record]);
        let Breakdown::Counts { categories } = result.breakdown else {
            panic!("expected counts breakdown");
        };
        assert_eq!(categories.get("Unknown"), Some(&1));
    }

    #[test]
    fn test_injury_rates_combo_keys_and_percentages() {
        let records = vec![
            play("2015-09-13", "SHOTGUN", "PASS", "SHORT LEFT", "pass complete"),
            play("2015-09-13", "SHOTGUN", "PASS", "SHORT LEFT", "sacked, J.Doe was injured on the play"),
            play("2015-09-13", "UNDER CENTER", "RUSH", "LEFT END", "rush for 3 yards"),
            // Kickoffs and other play types are not counted at all.
            play("2015-09-13", "SPECIAL", "KICKOFF", "MIDDLE", "returned 25 yards"),
        ];
        let job = job("2015-01-01", "2015-12-31", AnalysisMethod::InjuryRates);

        let result = run_analysis(&job, &records);
        let Breakdown::Rates { categories } = result.breakdown else {
            panic!("expected rates breakdown");
        };

        let pass = categories
            .get("Formation: SHOTGUN; PlayType: PASS; Direction: SHORT LEFT")
            .unwrap();
        assert_eq!(pass.total, 2);
        assert_eq!(pass.hits, 1);
        assert_eq!(pass.percentage, 50.0);

        let rush = categories
            .get("Formation: UNDER CENTER; PlayType: RUSH; Direction: LEFT END")
            .unwrap();
        assert_eq!(rush.total, 1);
        assert_eq!(rush.hits, 0);
        assert_eq!(rush.percentage, 0.0);

        assert_eq!(categories.len(), 2);
    }

    #[test]
    fn test_injury_percentage_rounds_to_two_decimals() {
        let mut records = vec![play(
            "2015-09-13",
            "SHOTGUN",
            "PASS",
            "DEEP RIGHT",
            "T.Smith was injured",
        )];
        records.push(play("2015-09-13", "SHOTGUN", "PASS", "DEEP RIGHT", "incomplete"));
        records.push(play("2015-09-13", "SHOTGUN", "PASS", "DEEP RIGHT", "incomplete"));
        let job = job("2015-01-01", "2015-12-31", AnalysisMethod::InjuryRates);

        let result = run_analysis(&job, &records);
        let Breakdown::Rates { categories } = result.breakdown else {
            panic!("expected rates breakdown");
        };
        let stat = categories
            .get("Formation: SHOTGUN; PlayType: PASS; Direction: DEEP RIGHT")
            .unwrap();
        // 1/3 → 33.33, not 33.333333…
        assert_eq!(stat.percentage, 33.33);
    }
}
