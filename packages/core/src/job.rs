//! Job opening domain types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::Record;

/// Publication status of a job opening.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    /// Open and visible to applicants.
    #[default]
    Active,
    /// Temporarily hidden.
    Paused,
    /// No longer accepting applications.
    Closed,
    /// Soft-deleted by the backend.
    Deleted,
}

impl JobStatus {
    /// Statuses an operator can set from the console.
    pub const SETTABLE: [JobStatus; 3] = [JobStatus::Active, JobStatus::Paused, JobStatus::Closed];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Active => "active",
            JobStatus::Paused => "paused",
            JobStatus::Closed => "closed",
            JobStatus::Deleted => "deleted",
        }
    }

    /// Localized label.
    pub fn label(&self) -> &'static str {
        match self {
            JobStatus::Active => "招募中",
            JobStatus::Paused => "暫停",
            JobStatus::Closed => "已關閉",
            JobStatus::Deleted => "已刪除",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "active" => Some(JobStatus::Active),
            "paused" => Some(JobStatus::Paused),
            "closed" => Some(JobStatus::Closed),
            "deleted" => Some(JobStatus::Deleted),
            _ => None,
        }
    }

    /// Status of a job record; records without one are treated as active.
    pub fn of(record: &Record) -> Option<Self> {
        match record.get("status") {
            None | Some(Value::Null) => Some(JobStatus::Active),
            Some(value) => value.as_str().and_then(Self::parse),
        }
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate counts across all statuses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobStats {
    pub total_jobs: u64,
    pub active_jobs: u64,
    pub paused_jobs: u64,
    pub closed_jobs: u64,
    pub total_views: u64,
}

/// Per-item result of a batch operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchItemOutcome {
    pub id: String,
    pub success: bool,
    pub error: Option<String>,
}

/// Fields the backend owns and a duplicate must not carry over.
const NOT_DUPLICATED: &[&str] = &["view_count", "application_count", "ai_parsed"];

/// Build the create payload for a copy of `job`: server-owned fields are dropped,
/// the title is marked as a copy, and the copy starts paused.
pub fn duplicate_fields(job: &Record) -> Map<String, Value> {
    let mut fields = job.fields.clone();
    for key in NOT_DUPLICATED {
        fields.remove(*key);
    }

    let title = format!("{} (複製)", job.text("job_title"));
    fields.insert("job_title".to_string(), Value::String(title));
    fields.insert(
        "status".to_string(),
        Value::String(JobStatus::Paused.as_str().to_string()),
    );
    fields
}

#[cfg(test)]
mod tests {
    #![allow(clippy::disallowed_methods)]

    use serde_json::json;

    use super::*;
    use crate::JOBS;

    #[test]
    fn duplicate_strips_server_fields() {
        let job = Record::from_value(
            json!({
                "job_id": "AC-EN-CO-1a2b3c4d",
                "job_title": "Backend Engineer",
                "status": "active",
                "view_count": 12,
                "application_count": 3,
                "ai_parsed": true,
                "created_at": "2025-06-12T10:00:00Z",
                "required_skills": ["Rust"]
            }),
            &JOBS,
        )
        .unwrap();

        let fields = duplicate_fields(&job);
        assert_eq!(fields["job_title"], "Backend Engineer (複製)");
        assert_eq!(fields["status"], "paused");
        assert_eq!(fields["required_skills"], json!(["Rust"]));
        for gone in ["job_id", "view_count", "application_count", "ai_parsed", "created_at"] {
            assert!(!fields.contains_key(gone), "{gone} should not be copied");
        }
    }

    #[test]
    fn status_round_trips_through_text() {
        for status in JobStatus::SETTABLE {
            assert_eq!(JobStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(JobStatus::parse("archived"), None);
        assert_eq!(JobStatus::Paused.to_string(), "paused");
    }

    #[test]
    fn missing_status_reads_as_active() {
        assert_eq!(JobStatus::of(&Record::with_id("J-1")), Some(JobStatus::Active));
    }
}
