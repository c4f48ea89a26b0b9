// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Ordered raw value map backing every model
//!
//! A [`RawMap`] stores wire field names and untyped JSON values in insertion
//! order. Typed accessors deserialize on read. The first typed read freezes
//! the map; writes after that point are rejected so a typed view can never
//! drift from the stored data.
//!
//! Field states:
//!
//! | state         | map                   | `get`         |
//! |---------------|-----------------------|---------------|
//! | absent        | key missing           | `Ok(None)`    |
//! | explicit null | key -> `Value::Null`  | `Ok(None)`    |
//! | value         | key -> value          | `Ok(Some(v))` |

use crate::error::ModelError;
use crate::json::{hash_value, kind};
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicBool, Ordering};

/// Order-preserving map of wire field name to raw JSON value
#[derive(Default)]
pub struct RawMap {
    entries: IndexMap<String, Value>,
    frozen: AtomicBool,
}

impl RawMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap existing entries. The result is not frozen.
    pub fn from_entries(entries: IndexMap<String, Value>) -> Self {
        Self {
            entries,
            frozen: AtomicBool::new(false),
        }
    }

    /// Build from a JSON value, which must be an object
    pub fn from_value(value: Value) -> Result<Self, ModelError> {
        match value {
            Value::Object(map) => Ok(Self::from_entries(map.into_iter().collect())),
            other => Err(ModelError::invalid(format!(
                "expected object, found {}",
                kind(&other)
            ))),
        }
    }

    /// Mark the map read-only. Idempotent.
    pub fn freeze(&self) {
        self.frozen.store(true, Ordering::Release);
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen.load(Ordering::Acquire)
    }

    /// Typed read of an optional field. Freezes the map.
    ///
    /// Missing keys and explicit nulls both yield `Ok(None)`. A stored value
    /// that does not decode as `T` yields [`ModelError::InvalidData`].
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ModelError> {
        self.freeze();
        match self.entries.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => T::deserialize(value).map(Some).map_err(|e| {
                ModelError::invalid(format!(
                    "field '{}' holds {} that does not match the expected type: {}",
                    key,
                    kind(value),
                    e
                ))
            }),
        }
    }

    /// Typed read of a required field. Freezes the map.
    pub fn get_required<T: DeserializeOwned>(&self, key: &str) -> Result<T, ModelError> {
        self.get(key)?.ok_or_else(|| {
            ModelError::invalid(format!("required field '{}' is absent or null", key))
        })
    }

    /// Write an optional, non-nullable field.
    ///
    /// `None`, or a value that serializes to null, removes the key.
    pub fn set<T: Serialize>(&mut self, key: &str, value: Option<T>) -> Result<(), ModelError> {
        self.ensure_writable(key)?;
        let raw = match value {
            Some(v) => serde_json::to_value(v)?,
            None => Value::Null,
        };
        if raw.is_null() {
            self.entries.shift_remove(key);
        } else {
            self.entries.insert(key.to_string(), raw);
        }
        Ok(())
    }

    /// Write a nullable field. `None` stores a literal null.
    pub fn set_nullable<T: Serialize>(
        &mut self,
        key: &str,
        value: Option<T>,
    ) -> Result<(), ModelError> {
        self.ensure_writable(key)?;
        let raw = match value {
            Some(v) => serde_json::to_value(v)?,
            None => Value::Null,
        };
        self.entries.insert(key.to_string(), raw);
        Ok(())
    }

    /// Store a raw value verbatim
    pub fn set_raw(&mut self, key: &str, value: Value) -> Result<(), ModelError> {
        self.ensure_writable(key)?;
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    /// Remove a key. Removing a missing key is a no-op.
    pub fn remove(&mut self, key: &str) -> Result<(), ModelError> {
        self.ensure_writable(key)?;
        self.entries.shift_remove(key);
        Ok(())
    }

    /// Raw stored value, without decoding or freezing
    pub fn get_raw(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copy of the entries as a JSON object, in insertion order
    pub fn to_value(&self) -> Value {
        Value::Object(
            self.entries
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }

    pub fn into_entries(self) -> IndexMap<String, Value> {
        self.entries
    }

    fn ensure_writable(&self, key: &str) -> Result<(), ModelError> {
        if self.is_frozen() {
            return Err(ModelError::Frozen {
                key: key.to_string(),
            });
        }
        Ok(())
    }
}

/// Deep copy. The copy starts unfrozen regardless of the source's state.
impl Clone for RawMap {
    fn clone(&self) -> Self {
        Self::from_entries(self.entries.clone())
    }
}

impl PartialEq for RawMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for RawMap {}

impl Hash for RawMap {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.entries.len().hash(state);
        let mut keys: Vec<&String> = self.entries.keys().collect();
        keys.sort();
        for key in keys {
            key.hash(state);
            if let Some(value) = self.entries.get(key) {
                hash_value(value, state);
            }
        }
    }
}

impl fmt::Debug for RawMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawMap")
            .field("entries", &self.entries)
            .field("frozen", &self.is_frozen())
            .finish()
    }
}

impl Serialize for RawMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter())
    }
}

impl<'de> Deserialize<'de> for RawMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        IndexMap::<String, Value>::deserialize(deserializer).map(Self::from_entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_absent_field_reads_none() {
        let map = RawMap::new();
        assert_eq!(map.get::<String>("name").unwrap(), None);
    }

    #[test]
    fn test_read_freezes_and_blocks_writes() {
        let mut map = RawMap::new();
        map.set("name", Some("a")).unwrap();
        assert!(!map.is_frozen());

        assert_eq!(map.get::<String>("name").unwrap().as_deref(), Some("a"));
        assert!(map.is_frozen());

        let err = map.set("name", Some("b")).unwrap_err();
        assert!(matches!(err, ModelError::Frozen { ref key } if key == "name"));
        let err = map.remove("name").unwrap_err();
        assert!(matches!(err, ModelError::Frozen { .. }));
    }

    #[test]
    fn test_freeze_is_idempotent() {
        let map = RawMap::new();
        map.freeze();
        map.freeze();
        assert!(map.is_frozen());
    }

    #[test]
    fn test_set_none_removes_key() {
        let mut map = RawMap::new();
        map.set("limit", Some(10)).unwrap();
        map.set::<i64>("limit", None).unwrap();
        assert!(!map.contains_key("limit"));

        // Removing an unset key is a no-op
        map.set::<i64>("limit", None).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_set_null_value_on_optional_field_removes_key() {
        let mut map = RawMap::new();
        map.set("note", Some("x")).unwrap();
        map.set("note", Some(Value::Null)).unwrap();
        assert!(!map.contains_key("note"));
    }

    #[test]
    fn test_set_nullable_keeps_null() {
        let mut map = RawMap::new();
        map.set_nullable::<String>("description", None).unwrap();
        assert!(map.contains_key("description"));
        assert_eq!(map.get_raw("description"), Some(&Value::Null));
        assert_eq!(map.get::<String>("description").unwrap(), None);
        assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"description":null}"#);
    }

    #[test]
    fn test_shape_mismatch_is_invalid_data() {
        let map: RawMap = serde_json::from_value(json!({"count": "three"})).unwrap();
        let err = map.get::<i64>("count").unwrap_err();
        assert!(err.is_invalid_data());
    }

    #[test]
    fn test_required_missing_is_invalid_data() {
        let map = RawMap::new();
        let err = map.get_required::<String>("id").unwrap_err();
        assert!(err.is_invalid_data());
        assert!(err.to_string().contains("'id'"));
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut map = RawMap::new();
        map.set("zeta", Some(1)).unwrap();
        map.set("alpha", Some(2)).unwrap();
        map.set("mid", Some(3)).unwrap();
        assert_eq!(
            serde_json::to_string(&map).unwrap(),
            r#"{"zeta":1,"alpha":2,"mid":3}"#
        );

        let parsed: RawMap = serde_json::from_str(r#"{"b":1,"a":{"y":1,"x":2}}"#).unwrap();
        assert_eq!(
            serde_json::to_string(&parsed).unwrap(),
            r#"{"b":1,"a":{"y":1,"x":2}}"#
        );
    }

    #[test]
    fn test_clone_is_unfrozen_deep_copy() {
        let mut original = RawMap::new();
        original.set("name", Some("a")).unwrap();
        original.freeze();

        let mut copy = original.clone();
        assert!(!copy.is_frozen());
        assert_eq!(copy, original);

        copy.set("name", Some("b")).unwrap();
        assert_ne!(copy, original);
        assert_eq!(original.get::<String>("name").unwrap().as_deref(), Some("a"));
    }

    #[test]
    fn test_equality_ignores_order_and_latch() {
        let a: RawMap = serde_json::from_str(r#"{"a":1,"b":2}"#).unwrap();
        let b: RawMap = serde_json::from_str(r#"{"b":2,"a":1}"#).unwrap();
        b.freeze();
        assert_eq!(a, b);

        use std::collections::HashSet;
        let set: HashSet<RawMap> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_signed_zero_records_share_a_hash_slot() {
        use std::collections::HashSet;
        let a: RawMap = serde_json::from_str(r#"{"id":"p","score":0.0}"#).unwrap();
        let b: RawMap = serde_json::from_str(r#"{"id":"p","score":-0.0}"#).unwrap();
        assert_eq!(a, b);
        let set: HashSet<RawMap> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_from_value_rejects_non_object() {
        assert!(RawMap::from_value(json!([1, 2])).unwrap_err().is_invalid_data());
        assert!(serde_json::from_str::<RawMap>("42").is_err());
    }

    #[test]
    fn test_concurrent_first_reads_agree() {
        let map: RawMap = serde_json::from_str(r#"{"n":7}"#).unwrap();
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| assert_eq!(map.get::<i64>("n").unwrap(), Some(7)));
            }
        });
        assert!(map.is_frozen());
    }
}
