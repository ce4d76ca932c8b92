//! Jobs client: job CRUD plus search, batch status, stats, duplicate and export.

use admin_core::fields::JOB_FORM_FIELDS;
use admin_core::validation::validate_job;
use admin_core::{
    BatchItemOutcome, FieldLookup, JOBS, JobStats, JobStatus, ListPage, ListQuery, Record, TEAMS,
    duplicate_fields, resolve_form,
};
use futures_util::future::{join_all, try_join_all, try_join3};
use serde_json::{Map, Value};

use crate::client::ResourceClient;
use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::payload::{PayloadMode, form_entries};
use crate::transport::{HttpTransport, Transport};

/// Page size used when a helper needs the whole collection.
const FETCH_ALL_LIMIT: &str = "1000";

/// Form fields sent as arrays of comma-separated entries.
const LIST_FIELDS: &[&str] = &["required_skills", "responsibilities"];

/// Form fields sent as integers when they parse as one.
const NUMBER_FIELDS: &[&str] = &["salary_min", "salary_max"];

/// Client for job openings. Also reads the teams collection to populate the
/// team selector of the job form.
#[derive(Debug, Clone)]
pub struct JobsClient<T = HttpTransport> {
    jobs: ResourceClient<T>,
    teams: ResourceClient<T>,
}

impl JobsClient<HttpTransport> {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_transport(HttpTransport::default(), config)
    }
}

impl<T: Transport + Clone> JobsClient<T> {
    pub fn with_transport(transport: T, config: &ClientConfig) -> Self {
        Self {
            jobs: ResourceClient::with_transport(transport.clone(), config, JOBS),
            teams: ResourceClient::with_transport(transport, config, TEAMS),
        }
    }
}

impl<T: Transport> JobsClient<T> {
    /// The underlying generic client.
    pub fn resource_client(&self) -> &ResourceClient<T> {
        &self.jobs
    }

    pub async fn list_jobs(&self, query: &ListQuery) -> ApiResult<ListPage> {
        self.jobs.list(query).await
    }

    pub async fn get_job(&self, id: &str) -> ApiResult<Record> {
        self.jobs.get(id).await
    }

    /// Create a job from raw form input. Missing required fields and an inverted
    /// salary range fail with [`ApiError::Validation`] before any request is made.
    pub async fn create_job<L: FieldLookup + ?Sized>(&self, form: &L) -> ApiResult<Record> {
        let fields = job_payload(form, PayloadMode::Create)?;
        let job = self.jobs.create(&fields).await?;
        tracing::info!(job_id = %job.id, "job created");
        Ok(job)
    }

    /// Update a job from raw form input. Fields the form carries with an empty
    /// value clear the stored one: text becomes `""`, salaries `null` and lists `[]`.
    pub async fn update_job<L: FieldLookup + ?Sized>(&self, id: &str, form: &L) -> ApiResult<Record> {
        let fields = job_payload(form, PayloadMode::Update)?;
        self.jobs.update(id, &fields, None).await
    }

    pub async fn set_status(&self, id: &str, status: JobStatus) -> ApiResult<Record> {
        let mut fields = Map::new();
        fields.insert("status".to_string(), Value::from(status.as_str()));
        self.jobs.update(id, &fields, None).await
    }

    pub async fn delete_job(&self, id: &str) -> ApiResult<()> {
        self.jobs.remove(id).await
    }

    /// Teams available for the job form's team selector.
    pub async fn list_teams(&self) -> ApiResult<Vec<Record>> {
        Ok(self.teams.list(&ListQuery::new()).await?.items)
    }

    /// Free-text search combined with extra filters; blank filters are ignored.
    pub async fn search(&self, term: &str, filters: ListQuery) -> ApiResult<ListPage> {
        let query = ListQuery::new().param("search", term).merge(filters);
        self.jobs.list(&query).await
    }

    /// Set the status of several jobs concurrently. Every id gets its own outcome;
    /// one failure does not stop the others.
    pub async fn batch_update_status(
        &self,
        ids: &[String],
        status: JobStatus,
    ) -> Vec<BatchItemOutcome> {
        let results = join_all(ids.iter().map(|id| self.set_status(id, status))).await;

        let outcomes: Vec<_> = ids
            .iter()
            .zip(results)
            .map(|(id, result)| BatchItemOutcome {
                id: id.clone(),
                success: result.is_ok(),
                error: result.err().map(|e| e.to_string()),
            })
            .collect();

        let failed = outcomes.iter().filter(|o| !o.success).count();
        tracing::info!(status = %status, total = outcomes.len(), failed, "batch status update");
        outcomes
    }

    /// Counts per status and the total view count across them.
    pub async fn stats(&self) -> ApiResult<JobStats> {
        let by_status = |status: JobStatus| {
            ListQuery::new()
                .param("status", status.as_str())
                .param("limit", FETCH_ALL_LIMIT)
        };
        let (active_q, paused_q, closed_q) = (
            by_status(JobStatus::Active),
            by_status(JobStatus::Paused),
            by_status(JobStatus::Closed),
        );

        let (active, paused, closed) = try_join3(
            self.jobs.list(&active_q),
            self.jobs.list(&paused_q),
            self.jobs.list(&closed_q),
        )
        .await?;

        let total_views = [&active, &paused, &closed]
            .iter()
            .flat_map(|page| page.items.iter())
            .filter_map(|job| job.number("view_count"))
            .map(|views| views.max(0.0) as u64)
            .sum();

        Ok(JobStats {
            total_jobs: active.total_items() + paused.total_items() + closed.total_items(),
            active_jobs: active.total_items(),
            paused_jobs: paused.total_items(),
            closed_jobs: closed.total_items(),
            total_views,
        })
    }

    /// Copy a job into a new, paused opening.
    pub async fn duplicate(&self, id: &str) -> ApiResult<Record> {
        let original = self.jobs.get(id).await?;
        let copy = self.jobs.create(&duplicate_fields(&original)).await?;
        tracing::info!(source = id, job_id = %copy.id, "job duplicated");
        Ok(copy)
    }

    /// Fetch full records for export: the given ids, or every job when `ids` is empty.
    pub async fn export(&self, ids: &[String]) -> ApiResult<Vec<Record>> {
        if ids.is_empty() {
            let query = ListQuery::new().param("limit", FETCH_ALL_LIMIT);
            return Ok(self.jobs.list(&query).await?.items);
        }
        try_join_all(ids.iter().map(|id| self.jobs.get(id))).await
    }
}

/// Resolve, validate and encode a job form.
///
/// List fields are split on commas and salaries are sent as numbers.
fn job_payload<L: FieldLookup + ?Sized>(
    form: &L,
    mode: PayloadMode,
) -> ApiResult<Map<String, Value>> {
    let report = validate_job(&resolve_form(JOB_FORM_FIELDS, form));
    if !report.is_valid() {
        return Err(ApiError::Validation(report.errors));
    }

    Ok(form_entries(JOB_FORM_FIELDS, form, mode)
        .into_iter()
        .map(|(name, value)| {
            let encoded = if LIST_FIELDS.contains(&name) {
                Value::from(
                    value
                        .split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .collect::<Vec<_>>(),
                )
            } else if NUMBER_FIELDS.contains(&name) {
                if value.is_empty() {
                    Value::Null
                } else {
                    value
                        .parse::<u64>()
                        .map(Value::from)
                        .unwrap_or_else(|_| Value::String(value.clone()))
                }
            } else {
                Value::String(value)
            };
            (name.to_string(), encoded)
        })
        .collect())
}
