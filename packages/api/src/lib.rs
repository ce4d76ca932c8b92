//! HTTP clients for the recruiting backend.
//!
//! This crate contains:
//! - `ResourceClient`, generic CRUD over one collection behind a `Transport`
//! - `TeamsClient` and `JobsClient`, the resource-specific wrappers
//! - `ClientConfig` for locating the backend
//! - `TtlCache`, the short-lived cache for sub-resource listings

mod cache;
mod client;
mod config;
mod error;
mod jobs;
mod payload;
mod response;
mod teams;
mod transport;

pub use cache::{DEFAULT_TTL_SECS, TtlCache};
pub use client::{Attachments, BinaryFile, ResourceClient};
pub use config::{ClientConfig, DEFAULT_API_BASE_URL, ENV_VAR};
pub use error::{ApiError, ApiResult, ConfigError};
pub use jobs::JobsClient;
pub use teams::TeamsClient;
pub use transport::{
    ApiRequest, HttpTransport, MultipartPart, RawResponse, RequestBody, Transport, TransportError,
};

// Re-export core types for convenience
pub use admin_core::{JobStatus, ListPage, ListQuery, Outcome, Record, TeamFile};
pub use reqwest::Method;
