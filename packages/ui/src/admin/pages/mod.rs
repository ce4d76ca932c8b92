//! Admin page components for route-based navigation.

mod jobs_page;
mod teams_page;

pub use jobs_page::AdminJobsPage;
pub use teams_page::AdminTeamsPage;
