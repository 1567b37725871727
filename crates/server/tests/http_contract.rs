//! Contract tests for the JSON wire formats.
//!
//! Since `cohort-server` is a binary crate (no lib.rs), endpoint behavior
//! is tested in-crate against the router; here we pin the JSON contract
//! itself by defining mirror types and validating the shapes clients and
//! workers exchange.

use serde::{Deserialize, Serialize};
use serde_json::json;

// ── Mirror types matching the HTTP contract ───────────────────────

/// Job statuses a client can observe, in lifecycle order.
const JOB_STATUSES: &[&str] = &["submitted", "in_progress", "complete", "failed"];

/// Methods accepted by `POST /jobs`.
const ANALYSIS_METHODS: &[&str] = &["category_counts", "injury_rates"];

#[derive(Debug, Serialize, Deserialize)]
struct CreateJobRequest {
    start_date: String,
    end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    method: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct CreateJobResponse {
    job_id: String,
    status: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct JobRecord {
    id: String,
    status: String,
    start: String,
    end: String,
    method: String,
    created_at: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct ResultBody {
    job_id: String,
    start_date: String,
    end_date: String,
    method: String,
    total_records: u64,
    skipped_records: u64,
    breakdown: BreakdownBody,
}

#[derive(Debug, Serialize, Deserialize)]
struct BreakdownBody {
    kind: String,
    categories: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct PendingBody {
    message: String,
    status: String,
}

// ── Tests ─────────────────────────────────────────────────────────

#[test]
fn test_create_job_request_shape() {
    let req = CreateJobRequest {
        start_date: "2010-01-01".to_string(),
        end_date: "2014-01-01".to_string(),
        method: None,
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(
        value,
        json!({"start_date": "2010-01-01", "end_date": "2014-01-01"})
    );

    // With an explicit method the field is present and lowercase.
    let req = CreateJobRequest {
        method: Some("injury_rates".to_string()),
        ..req
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["method"], "injury_rates");
}

#[test]
fn test_create_job_response_roundtrip() {
    let body = json!({
        "job_id": "7f4df01e-9c2a-4b6f-8a59-95a720f4a1cf",
        "status": "submitted"
    });
    let parsed: CreateJobResponse = serde_json::from_value(body).unwrap();
    assert_eq!(parsed.status, "submitted");
    assert!(JOB_STATUSES.contains(&parsed.status.as_str()));
}

#[test]
fn test_job_record_roundtrip() {
    let body = json!({
        "id": "7f4df01e-9c2a-4b6f-8a59-95a720f4a1cf",
        "status": "in_progress",
        "start": "2010-01-01",
        "end": "2014-01-01",
        "method": "category_counts",
        "created_at": "2025-03-02T10:15:30Z"
    });
    let parsed: JobRecord = serde_json::from_value(body).unwrap();
    assert!(JOB_STATUSES.contains(&parsed.status.as_str()));
    assert!(ANALYSIS_METHODS.contains(&parsed.method.as_str()));
    // Dates stay in the wire format jobs are submitted with.
    assert_eq!(parsed.start.len(), "YYYY-MM-DD".len());
}

#[test]
fn test_counts_result_shape() {
    let body = json!({
        "job_id": "7f4df01e-9c2a-4b6f-8a59-95a720f4a1cf",
        "start_date": "2010-01-01",
        "end_date": "2014-01-01",
        "method": "category_counts",
        "total_records": 2,
        "skipped_records": 0,
        "breakdown": {
            "kind": "counts",
            "categories": {
                "protein-coding gene": 1,
                "pseudogene": 1
            }
        }
    });
    let parsed: ResultBody = serde_json::from_value(body).unwrap();
    assert_eq!(parsed.breakdown.kind, "counts");
    assert_eq!(parsed.total_records, 2);
    assert_eq!(parsed.breakdown.categories.len(), 2);
}

#[test]
fn test_rates_result_shape() {
    let body = json!({
        "job_id": "7f4df01e-9c2a-4b6f-8a59-95a720f4a1cf",
        "start_date": "2015-09-01",
        "end_date": "2015-12-31",
        "method": "injury_rates",
        "total_records": 4,
        "skipped_records": 1,
        "breakdown": {
            "kind": "rates",
            "categories": {
                "Formation: SHOTGUN; PlayType: PASS; Direction: SHORT LEFT": {
                    "total": 4,
                    "hits": 1,
                    "percentage": 25.0
                }
            }
        }
    });
    let parsed: ResultBody = serde_json::from_value(body).unwrap();
    assert_eq!(parsed.breakdown.kind, "rates");

    let stat = parsed
        .breakdown
        .categories
        .values()
        .next()
        .and_then(|v| v.as_object())
        .unwrap();
    assert_eq!(stat["total"], 4);
    assert_eq!(stat["hits"], 1);
    assert_eq!(stat["percentage"], 25.0);
}

#[test]
fn test_error_body_shape() {
    let body = json!({"error": "both 'start_date' and 'end_date' are required in YYYY-MM-DD format"});
    let parsed: ErrorBody = serde_json::from_value(body).unwrap();
    assert!(parsed.error.contains("YYYY-MM-DD"));
}

#[test]
fn test_pending_body_shape() {
    let body = json!({
        "message": "Job 7f4df01e-9c2a-4b6f-8a59-95a720f4a1cf is not yet finished.",
        "status": "in_progress"
    });
    let parsed: PendingBody = serde_json::from_value(body).unwrap();
    assert!(JOB_STATUSES.contains(&parsed.status.as_str()));
    assert!(parsed.message.contains("not yet finished"));
}

#[test]
fn test_jobs_list_shape() {
    let body = json!({"jobs": ["7f4df01e-9c2a-4b6f-8a59-95a720f4a1cf"]});
    let jobs = body["jobs"].as_array().unwrap();
    assert_eq!(jobs.len(), 1);
    assert!(jobs[0].as_str().unwrap().parse::<uuid::Uuid>().is_ok());
}
