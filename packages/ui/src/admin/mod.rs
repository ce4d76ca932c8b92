//! Admin console components for teams and job openings.

mod confirm_dialog;
mod job_form;
mod job_stats;
pub mod notice;
mod status_badge;
mod team_files;
mod team_form;

pub mod pages;
pub use pages::{AdminJobsPage, AdminTeamsPage};

pub use confirm_dialog::ConfirmDialog;
pub use job_form::JobForm;
pub use job_stats::JobStatsCards;
pub use notice::{Notice, NoticeBanner};
pub use status_badge::JobStatusBadge;
pub use team_files::TeamFiles;
pub use team_form::TeamForm;
