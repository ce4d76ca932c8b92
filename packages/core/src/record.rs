//! Record entities and the response shapes the backend returns them in.
//!
//! The backend does not commit to one envelope: collections arrive as a bare
//! array or wrapped under `items`, `teams`, or `data`, and single entities may be
//! wrapped under `data`, `item`, or the singular resource name. Both are resolved
//! here, once, into `ListPage` and `Record`.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::Resource;
use crate::fields::value_text;

/// Errors raised when a response body does not match any recognized shape.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShapeError {
    #[error("expected a JSON object for a single record, got {0}")]
    NotAnObject(&'static str),
    #[error("unrecognized list response shape")]
    UnrecognizedList,
}

/// Pagination metadata attached to list responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageInfo {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_items: u64,
    pub items_per_page: u64,
}

impl PageInfo {
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }
}

/// A single job or team entity as seen by the client.
///
/// The identifier and timestamps are lifted out of the payload; everything else
/// stays in `fields` untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    #[serde(default)]
    pub fields: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Record {
    /// A record carrying only an identifier.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Read a record from a backend JSON object.
    pub fn from_value(value: Value, resource: &Resource) -> Result<Self, ShapeError> {
        let mut map = match value {
            Value::Object(map) => map,
            other => return Err(ShapeError::NotAnObject(json_kind(&other))),
        };

        let id = take_text(&mut map, "id")
            .or_else(|| take_text(&mut map, resource.id_field))
            .unwrap_or_default();
        map.remove(resource.id_field);

        let created_at = take_timestamp(&mut map, "created_at", "createdAt");
        let updated_at = take_timestamp(&mut map, "updated_at", "updatedAt");

        Ok(Self {
            id,
            fields: map,
            created_at,
            updated_at,
        })
    }

    /// Render back to the backend's flat JSON form.
    pub fn to_value(&self, resource: &Resource) -> Value {
        let mut map = self.fields.clone();
        map.insert(resource.id_field.to_string(), Value::String(self.id.clone()));
        if let Some(created_at) = self.created_at {
            map.insert("created_at".to_string(), Value::String(created_at.to_rfc3339()));
        }
        if let Some(updated_at) = self.updated_at {
            map.insert("updated_at".to_string(), Value::String(updated_at.to_rfc3339()));
        }
        Value::Object(map)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// A field rendered as display text, or `""` when absent.
    pub fn text(&self, field: &str) -> String {
        self.fields
            .get(field)
            .and_then(value_text)
            .unwrap_or_default()
    }

    /// A numeric field, accepting numbers and numeric strings.
    pub fn number(&self, field: &str) -> Option<f64> {
        match self.fields.get(field)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// One page of a collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListPage {
    pub items: Vec<Record>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PageInfo>,
}

impl ListPage {
    /// Total item count, falling back to the page length when the backend sent none.
    pub fn total_items(&self) -> u64 {
        self.pagination
            .map(|p| p.total_items)
            .unwrap_or(self.items.len() as u64)
    }
}

/// The closed set of list envelopes the backend is known to produce.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ListShape {
    /// `[ ... ]`
    Bare(Vec<Value>),
    /// `{ "items": [ ... ], "pagination": { ... } }`
    Items {
        items: Vec<Value>,
        #[serde(default)]
        pagination: Option<Value>,
    },
    /// `{ "teams": [ ... ], "count": n }`
    Teams { teams: Vec<Value> },
    /// `{ "data": [ ... ], "pagination": { ... } }`
    Data {
        data: Vec<Value>,
        #[serde(default)]
        pagination: Option<Value>,
    },
}

impl ListShape {
    /// Classify a decoded response body.
    pub fn detect(value: Value) -> Result<Self, ShapeError> {
        serde_json::from_value(value).map_err(|_| ShapeError::UnrecognizedList)
    }

    /// Normalize into a `ListPage`, reading each element as a record.
    pub fn into_page(self, resource: &Resource) -> Result<ListPage, ShapeError> {
        let (raw, pagination) = match self {
            ListShape::Bare(items) => (items, None),
            ListShape::Items { items, pagination } => (items, pagination),
            ListShape::Teams { teams } => (teams, None),
            ListShape::Data { data, pagination } => (data, pagination),
        };

        let items = raw
            .into_iter()
            .map(|item| Record::from_value(item, resource))
            .collect::<Result<Vec<_>, _>>()?;

        // Pagination is advisory; a malformed block is dropped rather than failing the page.
        let pagination = pagination
            .filter(|p| p.is_object())
            .and_then(|p| serde_json::from_value(p).ok());

        Ok(ListPage { items, pagination })
    }
}

/// Strip a single-entity envelope if one is present.
pub fn unwrap_record(value: Value, resource: &Resource) -> Value {
    let mut map = match value {
        Value::Object(map) => map,
        other => return other,
    };

    for key in ["data", "item", resource.singular] {
        if map.get(key).is_some_and(Value::is_object)
            && let Some(inner) = map.remove(key)
        {
            return inner;
        }
    }

    Value::Object(map)
}

fn take_text(map: &mut Map<String, Value>, key: &str) -> Option<String> {
    let text = map.get(key).and_then(value_text).filter(|s| !s.is_empty())?;
    map.remove(key);
    Some(text)
}

fn take_timestamp(map: &mut Map<String, Value>, snake: &str, camel: &str) -> Option<DateTime<Utc>> {
    let raw = map.remove(snake).or_else(|| map.remove(camel))?;
    raw.as_str().and_then(parse_timestamp)
}

/// Parse an RFC 3339 timestamp, or a naive ISO 8601 one interpreted as UTC.
pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::disallowed_methods)]

    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::{JOBS, TEAMS};

    fn team(id: &str, name: &str) -> Value {
        json!({"team_id": id, "team_name": name, "created_at": "2025-06-12T10:00:00Z"})
    }

    #[rstest]
    #[case::bare(json!([team("AC-EN-CO", "Core"), team("AC-EN-OP", "Ops")]))]
    #[case::items(json!({"items": [team("AC-EN-CO", "Core"), team("AC-EN-OP", "Ops")]}))]
    #[case::teams(json!({"teams": [team("AC-EN-CO", "Core"), team("AC-EN-OP", "Ops")], "count": 2}))]
    #[case::data(json!({"data": [team("AC-EN-CO", "Core"), team("AC-EN-OP", "Ops")]}))]
    fn list_shapes_normalize_to_the_same_items(#[case] body: Value) {
        let page = ListShape::detect(body).unwrap().into_page(&TEAMS).unwrap();
        let ids: Vec<_> = page.items.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["AC-EN-CO", "AC-EN-OP"]);
        assert_eq!(page.items[0].text("team_name"), "Core");
    }

    #[test]
    fn pagination_is_carried_through() {
        let body = json!({
            "message": "ok",
            "data": [{"job_id": "AC-EN-CO-1a2b3c4d", "job_title": "Engineer"}],
            "pagination": {"current_page": 1, "total_pages": 3, "total_items": 25, "items_per_page": 10}
        });
        let page = ListShape::detect(body).unwrap().into_page(&JOBS).unwrap();
        let pagination = page.pagination.unwrap();
        assert_eq!(pagination.total_items, 25);
        assert!(pagination.has_next());
        assert!(!pagination.has_previous());
        assert_eq!(page.total_items(), 25);
    }

    #[test]
    fn malformed_pagination_is_dropped() {
        let body = json!({"items": [], "pagination": "n/a"});
        let page = ListShape::detect(body).unwrap().into_page(&JOBS).unwrap();
        assert_eq!(page.pagination, None);
    }

    #[rstest]
    #[case(json!({}))]
    #[case(json!({"data": {"job_id": "x"}}))]
    #[case(json!("nope"))]
    fn unknown_shapes_are_rejected(#[case] body: Value) {
        assert_eq!(ListShape::detect(body), Err(ShapeError::UnrecognizedList));
    }

    #[test]
    fn record_lifts_id_and_timestamps() {
        let record = Record::from_value(team("AC-EN-CO", "Core"), &TEAMS).unwrap();
        assert_eq!(record.id, "AC-EN-CO");
        assert!(record.created_at.is_some());
        assert!(!record.fields.contains_key("team_id"));
        assert!(!record.fields.contains_key("created_at"));

        let back = record.to_value(&TEAMS);
        assert_eq!(back["team_id"], "AC-EN-CO");
    }

    #[test]
    fn naive_timestamps_are_read_as_utc() {
        let parsed = parse_timestamp("2025-06-12T10:00:00.123456").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2025-06-12T10:00:00.123456+00:00");
    }

    #[test]
    fn plain_id_wins_over_resource_id_field() {
        let record = Record::from_value(json!({"id": "1", "job_id": "2"}), &JOBS).unwrap();
        assert_eq!(record.id, "1");
        assert!(!record.fields.contains_key("job_id"));
    }

    #[test]
    fn envelopes_are_unwrapped() {
        let wrapped = json!({"message": "職缺建立成功", "job_id": "J-1", "data": {"job_id": "J-1"}});
        assert_eq!(unwrap_record(wrapped, &JOBS), json!({"job_id": "J-1"}));

        let bare = json!({"team_id": "T-1", "team_name": "Core"});
        assert_eq!(unwrap_record(bare.clone(), &TEAMS), bare);
    }

    #[test]
    fn non_object_record_is_rejected() {
        let err = Record::from_value(json!([1, 2]), &TEAMS).unwrap_err();
        assert_eq!(err, ShapeError::NotAnObject("an array"));
    }
}
