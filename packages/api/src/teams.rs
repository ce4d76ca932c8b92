//! Teams client: team CRUD plus the team files sub-resource.

use std::cell::RefCell;

use admin_core::fields::TEAM_FORM_FIELDS;
use admin_core::validation::validate_team;
use admin_core::{FieldLookup, ListQuery, Record, TEAMS, TeamFile, resolve_form};
use reqwest::Method;
use serde::Deserialize;
use serde_json::{Map, Value, json};

use crate::cache::TtlCache;
use crate::client::{Attachments, ResourceClient};
use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::payload::{PayloadMode, form_entries};
use crate::transport::{ApiRequest, HttpTransport, RequestBody, Transport};

#[derive(Debug, Deserialize)]
struct FilesBody {
    #[serde(default)]
    files: Vec<TeamFile>,
}

#[derive(Debug, Deserialize)]
struct DownloadBody {
    #[serde(rename = "downloadUrl", alias = "download_url")]
    download_url: String,
}

/// Client for the teams collection.
///
/// File listings are cached per team for 30 seconds; deleting a file drops the
/// cached listing of its team.
#[derive(Debug)]
pub struct TeamsClient<T = HttpTransport> {
    teams: ResourceClient<T>,
    files: RefCell<TtlCache<String, Vec<TeamFile>>>,
}

impl TeamsClient<HttpTransport> {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_transport(HttpTransport::default(), config)
    }
}

impl<T: Transport> TeamsClient<T> {
    pub fn with_transport(transport: T, config: &ClientConfig) -> Self {
        Self {
            teams: ResourceClient::with_transport(transport, config, TEAMS),
            files: RefCell::new(TtlCache::default()),
        }
    }

    /// The underlying generic client.
    pub fn resource_client(&self) -> &ResourceClient<T> {
        &self.teams
    }

    pub async fn list_teams(&self) -> ApiResult<Vec<Record>> {
        Ok(self.teams.list(&ListQuery::new()).await?.items)
    }

    pub async fn get_team(&self, id: &str) -> ApiResult<Record> {
        self.teams.get(id).await
    }

    /// Create a team from raw form input.
    ///
    /// Missing required fields fail with [`ApiError::Validation`] before any
    /// request is made. Format warnings do not block; callers confirm them with
    /// the operator beforehand.
    pub async fn create_team<L: FieldLookup + ?Sized>(&self, form: &L) -> ApiResult<Record> {
        let fields = team_payload(form, PayloadMode::Create)?;
        let team = self.teams.create(&fields).await?;
        tracing::info!(team_id = %team.id, "team created");
        Ok(team)
    }

    /// Update a team from raw form input. Fields the form carries with an empty
    /// value are sent as `""` so the stored value is cleared.
    pub async fn update_team<L: FieldLookup + ?Sized>(
        &self,
        id: &str,
        form: &L,
        attachments: Option<&Attachments>,
    ) -> ApiResult<Record> {
        let fields = team_payload(form, PayloadMode::Update)?;
        let team = self.teams.update(id, &fields, attachments).await?;
        if attachments.is_some_and(|a| !a.is_empty()) {
            self.files.borrow_mut().invalidate(&id.to_string());
        }
        Ok(team)
    }

    /// Attach and remove files without touching any team field.
    pub async fn upload_files(&self, id: &str, attachments: &Attachments) -> ApiResult<Record> {
        let team = self.teams.update(id, &Map::new(), Some(attachments)).await?;
        self.files.borrow_mut().invalidate(&id.to_string());
        tracing::info!(
            team_id = id,
            added = attachments.to_add.len(),
            removed = attachments.to_remove.len(),
            "team files changed"
        );
        Ok(team)
    }

    pub async fn delete_team(&self, id: &str) -> ApiResult<()> {
        self.teams.remove(id).await?;
        self.files.borrow_mut().invalidate(&id.to_string());
        Ok(())
    }

    /// Files attached to a team, served from cache while fresh.
    pub async fn list_files(&self, team_id: &str) -> ApiResult<Vec<TeamFile>> {
        let key = team_id.to_string();
        let cached = self.files.borrow_mut().get(&key);
        if let Some(files) = cached {
            tracing::debug!(team_id, "team files served from cache");
            return Ok(files);
        }

        let url = format!("{}?action=files", self.teams.item_url(team_id));
        let files = match self.teams.execute(ApiRequest::new(Method::GET, url)).await? {
            Some(body) => {
                serde_json::from_value::<FilesBody>(body)
                    .map_err(|error| {
                        tracing::warn!(team_id, %error, "unreadable team files body");
                        ApiError::MalformedResponse
                    })?
                    .files
            }
            None => Vec::new(),
        };

        self.files.borrow_mut().insert(key, files.clone());
        Ok(files)
    }

    /// A short-lived download URL for a stored file.
    pub async fn download_url(&self, file_key: &str) -> ApiResult<String> {
        let url = format!(
            "{}/download-team-file/{}",
            self.teams.base_url(),
            urlencoding::encode(file_key)
        );
        let body = self
            .teams
            .execute(ApiRequest::new(Method::GET, url))
            .await?
            .ok_or(ApiError::MalformedResponse)?;

        serde_json::from_value::<DownloadBody>(body)
            .map(|b| b.download_url)
            .map_err(|_| ApiError::MalformedResponse)
    }

    /// Delete a stored file and drop the team's cached listing.
    pub async fn delete_file(&self, team_id: &str, file_key: &str) -> ApiResult<()> {
        let url = format!("{}/delete-team-file", self.teams.base_url());
        let request = ApiRequest::new(Method::DELETE, url)
            .with_body(RequestBody::Json(json!({ "key": file_key })));
        self.teams.execute(request).await?;

        self.files.borrow_mut().invalidate(&team_id.to_string());
        tracing::info!(team_id, file_key, "team file deleted");
        Ok(())
    }
}

/// Resolve, validate and encode a team form.
fn team_payload<L: FieldLookup + ?Sized>(
    form: &L,
    mode: PayloadMode,
) -> ApiResult<Map<String, Value>> {
    let report = validate_team(&resolve_form(TEAM_FORM_FIELDS, form));
    if !report.is_valid() {
        return Err(ApiError::Validation(report.errors));
    }

    Ok(form_entries(TEAM_FORM_FIELDS, form, mode)
        .into_iter()
        .map(|(name, value)| (name.to_string(), Value::String(value)))
        .collect())
}
