//! Date-range filtering with a per-record skip policy.

use chrono::NaiveDate;
use tracing::debug;

use cohort_core::DatasetRecord;

/// Records selected for analysis, plus how many were dropped for
/// unusable dates.
#[derive(Debug)]
pub struct FilteredSet<'a> {
    /// Records whose date falls inside the inclusive range.
    pub records: Vec<&'a DatasetRecord>,
    /// Records skipped because their date field was missing or malformed.
    /// Out-of-range records are excluded but not counted here.
    pub skipped: u64,
}

/// Select records dated within `[start, end]` inclusive.
///
/// A record with a missing or unparseable date is skipped individually —
/// one bad row never fails the whole job.
pub fn filter_in_range<'a>(
    records: &'a [DatasetRecord],
    start: NaiveDate,
    end: NaiveDate,
) -> FilteredSet<'a> {
    let mut selected = Vec::new();
    let mut skipped = 0u64;

    for record in records {
        match record.parsed_date() {
            Some(date) => {
                if start <= date && date <= end {
                    selected.push(record);
                }
            }
            None => {
                debug!(
                    record_id = %record.id,
                    date = record.date.as_deref().unwrap_or("(missing)"),
                    "skipping record with unusable date"
                );
                skipped += 1;
            }
        }
    }

    FilteredSet {
        records: selected,
        skipped,
    }
}

// ── Tests ────────────────────────────────────────────────────────────
