//! CSV rendering of job records for spreadsheet export.

use serde_json::Value;

use crate::format::{employment_type, experience_level, remote_option};
use crate::{JobStatus, Record};

/// Column headers, in export order.
pub const JOB_CSV_HEADERS: [&str; 16] = [
    "職缺ID",
    "職缺標題",
    "公司",
    "團隊",
    "就業類型",
    "經驗等級",
    "最低薪資",
    "最高薪資",
    "工作地點",
    "工作模式",
    "必備技能",
    "學歷要求",
    "狀態",
    "瀏覽次數",
    "申請人數",
    "建立時間",
];

/// Render jobs as CSV: a header row, then one row per job. Every cell is quoted.
pub fn jobs_csv(jobs: &[Record]) -> String {
    std::iter::once(JOB_CSV_HEADERS.map(str::to_string).to_vec())
        .chain(jobs.iter().map(job_row))
        .map(|row| {
            row.iter()
                .map(|cell| quote(cell))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn job_row(job: &Record) -> Vec<String> {
    let status = match JobStatus::of(job) {
        Some(status) => status.label().to_string(),
        None => job.text("status"),
    };
    let education = match job.text("education_required") {
        text if text.is_empty() => job.text("education_requirement"),
        text => text,
    };
    let count = |field: &str| job.number(field).map_or(0, |n| n.max(0.0) as u64).to_string();

    vec![
        job.id.clone(),
        job.text("job_title"),
        job.text("company"),
        job.text("team_name"),
        employment_type(&job.text("employment_type")).to_string(),
        experience_level(&job.text("experience_level")).to_string(),
        job.text("salary_min"),
        job.text("salary_max"),
        job.text("location"),
        remote_option(&job.text("remote_option")).to_string(),
        skills(job),
        education,
        status,
        count("view_count"),
        count("application_count"),
        job.created_at
            .map(|at| at.format("%Y/%m/%d").to_string())
            .unwrap_or_default(),
    ]
}

/// Skills are joined with `; ` so they stay one cell when reopened.
fn skills(job: &Record) -> String {
    match job.get("required_skills") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join("; "),
        _ => job.text("required_skills"),
    }
}

fn quote(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::disallowed_methods)]

    use serde_json::json;

    use super::*;
    use crate::JOBS;

    #[test]
    fn header_row_comes_first() {
        let csv = jobs_csv(&[]);
        assert!(csv.starts_with("\"職缺ID\",\"職缺標題\",\"公司\""));
        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn job_rows_use_display_labels() {
        let job = Record::from_value(
            json!({
                "job_id": "J-1",
                "job_title": "Backend \"Rust\" Engineer",
                "company": "Acme",
                "team_name": "Core",
                "employment_type": "full-time",
                "salary_min": 50000,
                "required_skills": ["Rust", "SQL"],
                "status": "paused",
                "view_count": 12,
                "created_at": "2025-06-12T10:00:00Z"
            }),
            &JOBS,
        )
        .unwrap();

        let csv = jobs_csv(&[job]);
        let row = csv.lines().nth(1).unwrap();
        assert!(row.starts_with("\"J-1\",\"Backend \"\"Rust\"\" Engineer\",\"Acme\",\"Core\""));
        assert!(row.contains("\"50000\",\"\""));
        assert!(row.contains("\"Rust; SQL\""));
        assert!(row.contains(&format!("\"{}\"", JobStatus::Paused.label())));
        assert!(row.contains(&format!("\"{}\"", employment_type("full-time"))));
        assert!(row.ends_with("\"12\",\"0\",\"2025/06/12\""));
    }
}
