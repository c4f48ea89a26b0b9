// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Request parameter storage
//!
//! Header, query and body fields are three independent namespaces, each a
//! [`RawMap`]. Path parameters are plain fields on the params types and are
//! checked with [`required_path_param`] before a request is built.

use crate::error::ModelError;
use crate::json::scalar_text;
use crate::raw::RawMap;
use serde_json::Value;

/// Raw storage for one request's header, query and body fields
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ParamParts {
    pub header: RawMap,
    pub query: RawMap,
    pub body: RawMap,
}

impl ParamParts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Query string pairs in insertion order.
    ///
    /// Arrays repeat the key, objects expand to `key[member]`, nulls are
    /// dropped.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for (key, value) in self.query.iter() {
            push_query_pairs(&mut pairs, key.to_string(), value);
        }
        pairs
    }

    /// Header name/value pairs in insertion order.
    ///
    /// Arrays are comma-joined, objects are sent as compact JSON, nulls are
    /// dropped.
    pub fn header_pairs(&self) -> Vec<(String, String)> {
        self.header
            .iter()
            .filter_map(|(name, value)| header_text(value).map(|text| (name.to_string(), text)))
            .collect()
    }

    /// JSON body, or `None` when no body field was set
    pub fn body_value(&self) -> Option<Value> {
        if self.body.is_empty() {
            None
        } else {
            Some(self.body.to_value())
        }
    }
}

/// Access to a params type's raw parts
pub trait Params: Clone {
    fn parts(&self) -> &ParamParts;

    /// Copy these params and apply `edit` to the copy. The copy starts
    /// unfrozen even when `self` has been read.
    fn with<F>(&self, edit: F) -> Result<Self, ModelError>
    where
        F: FnOnce(&mut Self) -> Result<&mut Self, ModelError>,
    {
        let mut copy = self.clone();
        edit(&mut copy)?;
        Ok(copy)
    }
}

/// Fail fast when a path parameter is missing or empty
pub fn required_path_param<'a>(name: &str, value: Option<&'a str>) -> Result<&'a str, ModelError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ModelError::invalid(format!(
            "path parameter '{}' is required",
            name
        ))),
    }
}

fn push_query_pairs(pairs: &mut Vec<(String, String)>, key: String, value: &Value) {
    match value {
        Value::Null => {}
        Value::Array(items) => {
            for item in items {
                push_query_pairs(pairs, key.clone(), item);
            }
        }
        Value::Object(members) => {
            for (member, inner) in members {
                push_query_pairs(pairs, format!("{}[{}]", key, member), inner);
            }
        }
        scalar => {
            if let Some(text) = scalar_text(scalar) {
                pairs.push((key, text));
            }
        }
    }
}

fn header_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(scalar_text).collect();
            Some(parts.join(","))
        }
        Value::Object(_) => Some(value.to_string()),
        scalar => scalar_text(scalar),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_query_pairs_follow_insertion_order() {
        let mut parts = ParamParts::new();
        parts.query.set("month", Some(3)).unwrap();
        parts.query.set("year", Some(2024)).unwrap();
        assert_eq!(parts.query_pairs(), pairs(&[("month", "3"), ("year", "2024")]));
    }

    #[test]
    fn test_query_pairs_expand_arrays_and_objects() {
        let mut parts = ParamParts::new();
        parts.query.set("tag", Some(json!(["a", "b"]))).unwrap();
        parts
            .query
            .set("filter", Some(json!({"status": "active", "archived": false})))
            .unwrap();
        parts.query.set_nullable::<String>("cursor", None).unwrap();
        assert_eq!(
            parts.query_pairs(),
            pairs(&[
                ("tag", "a"),
                ("tag", "b"),
                ("filter[status]", "active"),
                ("filter[archived]", "false"),
            ])
        );
    }

    #[test]
    fn test_header_pairs() {
        let mut parts = ParamParts::new();
        parts.header.set("Idempotency-Key", Some("abc")).unwrap();
        parts.header.set("X-Tags", Some(json!(["a", 1]))).unwrap();
        assert_eq!(
            parts.header_pairs(),
            pairs(&[("Idempotency-Key", "abc"), ("X-Tags", "a,1")])
        );
    }

    #[test]
    fn test_namespaces_are_independent() {
        let mut parts = ParamParts::new();
        parts.query.set("id", Some("q")).unwrap();
        parts.body.set("id", Some("b")).unwrap();
        assert_eq!(parts.query_pairs(), pairs(&[("id", "q")]));
        assert_eq!(parts.body_value(), Some(json!({"id": "b"})));
        assert!(parts.header_pairs().is_empty());
    }

    #[test]
    fn test_empty_body_is_none() {
        assert_eq!(ParamParts::new().body_value(), None);
    }

    #[test]
    fn test_required_path_param() {
        assert_eq!(required_path_param("id", Some("abc")).unwrap(), "abc");
        assert!(required_path_param("id", None).unwrap_err().is_invalid_data());
        assert!(required_path_param("id", Some("")).unwrap_err().is_invalid_data());
    }
}
