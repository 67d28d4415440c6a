//! Request descriptors for the CKMT API.

use serde::{Serialize, Serializer};
use std::fmt;

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Text(String),
    Integer(i64),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(n) => write!(f, "{}", n),
        }
    }
}

impl Serialize for QueryValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(s) => serializer.serialize_str(s),
            Self::Integer(n) => serializer.serialize_i64(*n),
        }
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&i64> for QueryValue {
    fn from(value: &i64) -> Self {
        Self::Integer(*value)
    }
}

/// Ordered query parameters for one request.
///
/// Keys appear at most once and in insertion order. Absent optional values
/// are skipped entirely, never sent as empty or null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QueryParams(Vec<(String, QueryValue)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` unconditionally, replacing any previous value.
    pub fn required(mut self, key: &str, value: impl Into<QueryValue>) -> Self {
        self.insert(key, value.into());
        self
    }

    /// Set `key` only when `value` is present.
    pub fn optional<V: Into<QueryValue>>(mut self, key: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.insert(key, value.into());
        }
        self
    }

    fn insert(&mut self, key: &str, value: QueryValue) {
        match self.0.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key.to_string(), value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Parameter names in insertion order.
    pub fn keys(&self) -> Vec<&str> {
        self.0.iter().map(|(k, _)| k.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// One outbound GET: an endpoint path plus its query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub endpoint: String,
    pub query: QueryParams,
}

impl ApiRequest {
    /// Create a request for `endpoint`, which must start with `/`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        debug_assert!(endpoint.starts_with('/'), "endpoint must start with '/'");
        Self {
            endpoint,
            query: QueryParams::new(),
        }
    }

    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_skips_absent_values() {
        let query = QueryParams::new()
            .optional("query", Some("nginx"))
            .optional::<&str>("country", None)
            .optional("port", Some(443i64))
            .optional::<i64>("http_status", None);

        assert_eq!(query.keys(), vec!["query", "port"]);
        assert!(!query.contains_key("country"));
        assert!(!query.contains_key("http_status"));
    }

    #[test]
    fn test_required_replaces_existing_key() {
        let query = QueryParams::new()
            .required("size", 10i64)
            .required("size", 25i64);

        assert_eq!(query.len(), 1);
        assert_eq!(query.get("size"), Some(&QueryValue::Integer(25)));
    }

    #[test]
    fn test_empty_string_is_still_present() {
        let query = QueryParams::new().optional("query", Some(""));
        assert_eq!(query.get("query"), Some(&QueryValue::Text(String::new())));
    }

    #[test]
    fn test_serializes_as_plain_pairs() {
        let query = QueryParams::new()
            .required("facets", "country,port")
            .required("page", 2i64);
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value, serde_json::json!([["facets", "country,port"], ["page", 2]]));
    }

    #[test]
    fn test_query_value_display() {
        assert_eq!(QueryValue::from("tls").to_string(), "tls");
        assert_eq!(QueryValue::from(8080i64).to_string(), "8080");
    }
}
