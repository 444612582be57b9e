//! The request descriptor produced by every builder in `methods`.
//!
//! # Design
//! A `Request` is the remote method name plus a JSON object holding only the
//! parameters that are present. Absent optional parameters never appear in
//! the body, not even as `null`. Builders assemble the body from required
//! values with `with` and from a per-method options struct with
//! `with_options`; options structs skip their `None` fields when serialized,
//! so the wire names come from a single serde annotation per field.

use serde::Serialize;
use serde_json::{Map, Value};

/// A remote method call described as plain data.
///
/// The caller serializes `body` (as JSON, or as multipart form fields when an
/// upload placeholder is present) and POSTs it to `.../bot<token>/<method>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: &'static str,
    pub body: Map<String, Value>,
}

impl Request {
    pub(crate) fn new(method: &'static str) -> Self {
        Self {
            method,
            body: Map::new(),
        }
    }

    /// Add a required parameter under its wire name.
    pub(crate) fn with(mut self, key: &str, value: impl Serialize) -> Self {
        match serde_json::to_value(value) {
            Ok(Value::Null) => {}
            Ok(value) => {
                self.body.insert(key.to_string(), value);
            }
            Err(err) => tracing::warn!(method = self.method, key, %err, "dropping unserializable parameter"),
        }
        self
    }

    /// Merge every present field of an options struct into the body.
    pub(crate) fn with_options(mut self, options: impl Serialize) -> Self {
        match serde_json::to_value(options) {
            Ok(Value::Object(fields)) => {
                self.body.extend(fields.into_iter().filter(|(_, v)| !v.is_null()));
            }
            Ok(other) => tracing::warn!(method = self.method, kind = ?other, "options did not encode as an object"),
            Err(err) => tracing::warn!(method = self.method, %err, "dropping unserializable options"),
        }
        self
    }

    /// Wire names of the parameters present in the body, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.body.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Look up a parameter by its wire name.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.body.get(key)
    }
}
