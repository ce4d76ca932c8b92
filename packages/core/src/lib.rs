//! Core domain types for the recruiting admin console.
//!
//! This crate contains shared types used across all packages:
//! - Record, ListPage and the backend response shapes they are read from
//! - Outcome, the success/data/error envelope handed to presentation code
//! - ListQuery for building collection query strings
//! - Form field resolution and validation helpers
//! - Team and job specific helpers and display formatters
//! - CSV export of job records

pub mod export;
pub mod fields;
pub mod format;
mod job;
mod outcome;
mod query;
mod record;
mod resource;
mod team;
pub mod validation;

pub use export::jobs_csv;
pub use fields::{FieldLookup, LogicalField, resolve_field, resolve_form};
pub use job::{BatchItemOutcome, JobStats, JobStatus, duplicate_fields};
pub use outcome::Outcome;
pub use query::ListQuery;
pub use record::{ListPage, ListShape, PageInfo, Record, ShapeError, unwrap_record};
pub use resource::{JOBS, Resource, TEAMS};
pub use team::{TeamFile, TeamFilter, company_names, generate_team_id_preview};
pub use validation::{FormatRule, ValidationReport, validate};
