//! Query parameters for collection listing.

use std::collections::BTreeMap;

/// Query parameters for a `list` call.
///
/// Values that are absent, empty, or whitespace-only are dropped when the query
/// string is rendered, so callers can pass raw filter inputs straight through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    params: BTreeMap<String, Option<String>>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), Some(value.into()));
        self
    }

    /// Add a parameter that may be absent.
    pub fn opt_param(mut self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        self.params.insert(key.into(), value.map(Into::into));
        self
    }

    /// Set or clear a parameter in place.
    pub fn set(&mut self, key: impl Into<String>, value: Option<String>) {
        self.params.insert(key.into(), value);
    }

    /// Merge another query into this one; keys in `other` win.
    pub fn merge(mut self, other: ListQuery) -> Self {
        self.params.extend(other.params);
        self
    }

    /// Parameters that will actually be sent.
    pub fn effective(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().filter_map(|(key, value)| {
            value
                .as_deref()
                .filter(|v| !v.trim().is_empty())
                .map(|v| (key.as_str(), v))
        })
    }

    /// Whether no parameter survives filtering.
    pub fn is_empty(&self) -> bool {
        self.effective().next().is_none()
    }

    /// Render as an `application/x-www-form-urlencoded` string without the leading `?`.
    pub fn to_query_string(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.effective() {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}

impl<K, V> FromIterator<(K, Option<V>)> for ListQuery
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        Self {
            params: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.map(Into::into)))
                .collect(),
        }
    }
}
