//! Generic CRUD client for one backend collection.

use admin_core::{ListPage, ListQuery, ListShape, Record, Resource, unwrap_record};
use reqwest::Method;
use serde_json::{Map, Value};

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::response::interpret;
use crate::transport::{ApiRequest, HttpTransport, MultipartPart, RequestBody, Transport};

/// A file to upload alongside an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl BinaryFile {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }
}

/// File changes that accompany an update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attachments {
    /// Files to upload. A non-empty list switches the request to multipart.
    pub to_add: Vec<BinaryFile>,
    /// Storage keys of existing files to remove.
    pub to_remove: Vec<String>,
}

impl Attachments {
    pub fn add(mut self, file: BinaryFile) -> Self {
        self.to_add.push(file);
        self
    }

    pub fn remove(mut self, key: impl Into<String>) -> Self {
        self.to_remove.push(key.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}

/// CRUD access to one collection of the backend.
///
/// Every operation returns an [`ApiResult`]; transport failures, error statuses
/// and unreadable bodies all come back as [`ApiError`] values.
#[derive(Debug, Clone)]
pub struct ResourceClient<T = HttpTransport> {
    transport: T,
    base_url: String,
    resource: Resource,
}

impl ResourceClient<HttpTransport> {
    pub fn new(config: &ClientConfig, resource: Resource) -> Self {
        Self::with_transport(HttpTransport::default(), config, resource)
    }
}

impl<T: Transport> ResourceClient<T> {
    pub fn with_transport(transport: T, config: &ClientConfig, resource: Resource) -> Self {
        Self {
            transport,
            base_url: config.base_url().to_string(),
            resource,
        }
    }

    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, self.resource.path)
    }

    pub fn item_url(&self, id: &str) -> String {
        format!("{}/{}", self.collection_url(), urlencoding::encode(id))
    }

    /// List the collection. Blank query values are not sent.
    pub async fn list(&self, query: &ListQuery) -> ApiResult<ListPage> {
        let mut url = self.collection_url();
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query.to_query_string());
        }

        let Some(body) = self.execute(ApiRequest::new(Method::GET, url)).await? else {
            return Ok(ListPage::default());
        };

        ListShape::detect(body)
            .and_then(|shape| shape.into_page(&self.resource))
            .map_err(|error| {
                tracing::warn!(resource = self.resource.path, %error, "unrecognized list body");
                ApiError::MalformedResponse
            })
    }

    pub async fn get(&self, id: &str) -> ApiResult<Record> {
        let body = self
            .execute(ApiRequest::new(Method::GET, self.item_url(id)))
            .await?;
        self.record_or(body, id, || Record::with_id(id))
    }

    /// Create an entity from `fields`.
    ///
    /// An empty success body yields a record with the submitted fields and an
    /// empty id.
    pub async fn create(&self, fields: &Map<String, Value>) -> ApiResult<Record> {
        let request = ApiRequest::new(Method::POST, self.collection_url())
            .with_body(RequestBody::Json(Value::Object(fields.clone())));
        let body = self.execute(request).await?;
        self.record_or(body, "", || Record {
            fields: fields.clone(),
            ..Default::default()
        })
    }

    /// Update an entity in place.
    ///
    /// Identity and timestamp keys in `fields` are never sent. With files to
    /// upload the request is multipart (`fields`, `removed_files`, then one
    /// `files` part per file); otherwise it is JSON with `removed_files` folded
    /// in when there is anything to remove.
    pub async fn update(
        &self,
        id: &str,
        fields: &Map<String, Value>,
        attachments: Option<&Attachments>,
    ) -> ApiResult<Record> {
        let mut delta = fields.clone();
        for key in self.resource.server_owned_keys() {
            delta.remove(key);
        }

        let body = match attachments {
            Some(attachments) if !attachments.to_add.is_empty() => {
                RequestBody::Multipart(multipart_update(delta, attachments))
            }
            Some(attachments) => {
                if !attachments.to_remove.is_empty() {
                    delta.insert(
                        "removed_files".to_string(),
                        Value::from(attachments.to_remove.clone()),
                    );
                }
                RequestBody::Json(Value::Object(delta))
            }
            None => RequestBody::Json(Value::Object(delta)),
        };

        let request = ApiRequest::new(Method::PUT, self.item_url(id)).with_body(body);
        let body = self.execute(request).await?;
        let body = body.filter(|value| value.as_object().is_none_or(|map| !map.is_empty()));
        self.record_or(body, id, || Record::with_id(id))
    }

    pub async fn remove(&self, id: &str) -> ApiResult<()> {
        self.execute(ApiRequest::new(Method::DELETE, self.item_url(id)))
            .await
            .map(|_| ())
    }

    /// Send a request and apply the shared response policy.
    pub(crate) async fn execute(&self, request: ApiRequest) -> ApiResult<Option<Value>> {
        tracing::debug!(method = %request.method, url = %request.url, "sending request");
        let raw = self.transport.send(request).await?;
        interpret(raw)
    }

    /// Read a single-entity body, or synthesize one when the body was empty.
    /// A record that comes back without an id keeps the id the caller used.
    fn record_or(
        &self,
        body: Option<Value>,
        id: &str,
        empty: impl FnOnce() -> Record,
    ) -> ApiResult<Record> {
        let Some(body) = body else {
            return Ok(empty());
        };

        let mut record = Record::from_value(unwrap_record(body, &self.resource), &self.resource)
            .map_err(|error| {
                tracing::warn!(resource = self.resource.path, %error, "unreadable record body");
                ApiError::MalformedResponse
            })?;
        if record.id.is_empty() {
            record.id = id.to_string();
        }
        Ok(record)
    }
}

fn multipart_update(fields: Map<String, Value>, attachments: &Attachments) -> Vec<MultipartPart> {
    let mut parts = vec![
        MultipartPart::Text {
            name: "fields".to_string(),
            value: Value::Object(fields).to_string(),
        },
        MultipartPart::Text {
            name: "removed_files".to_string(),
            value: Value::from(attachments.to_remove.clone()).to_string(),
        },
    ];

    parts.extend(attachments.to_add.iter().map(|file| MultipartPart::File {
        name: "files".to_string(),
        file_name: file.file_name.clone(),
        content_type: file.content_type.clone(),
        bytes: file.bytes.clone(),
    }));
    parts
}
