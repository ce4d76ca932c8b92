//! Job status badge.

use admin_core::JobStatus;
use dioxus::prelude::*;

/// Badge for a job's publication status. Unknown values render as-is.
#[component]
pub fn JobStatusBadge(status: String) -> Element {
    let (class, text) = match JobStatus::parse(&status) {
        Some(JobStatus::Active) => ("badge-active", JobStatus::Active.label()),
        Some(JobStatus::Paused) => ("badge-paused", JobStatus::Paused.label()),
        Some(JobStatus::Closed) => ("badge-closed", JobStatus::Closed.label()),
        Some(JobStatus::Deleted) => ("badge-deleted", JobStatus::Deleted.label()),
        None if status.is_empty() => ("badge-active", JobStatus::Active.label()),
        None => ("badge-default", status.as_str()),
    };

    rsx! {
        span {
            class: "status-badge {class}",
            {text}
        }
    }
}
