// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Helpers over raw `serde_json::Value`s

use serde_json::{Number, Value};
use std::hash::{Hash, Hasher};

/// Feed a JSON value into a hasher.
///
/// Object members are hashed in sorted key order so the result agrees with
/// `Value`'s equality, which ignores member order.
pub fn hash_value<H: Hasher>(value: &Value, state: &mut H) {
    match value {
        Value::Null => 0u8.hash(state),
        Value::Bool(b) => {
            1u8.hash(state);
            b.hash(state);
        }
        Value::Number(n) => {
            2u8.hash(state);
            hash_number(n, state);
        }
        Value::String(s) => {
            3u8.hash(state);
            s.hash(state);
        }
        Value::Array(items) => {
            4u8.hash(state);
            items.len().hash(state);
            for item in items {
                hash_value(item, state);
            }
        }
        Value::Object(map) => {
            5u8.hash(state);
            map.len().hash(state);
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            for key in keys {
                key.hash(state);
                if let Some(v) = map.get(key) {
                    hash_value(v, state);
                }
            }
        }
    }
}

// Integers and floats never compare equal to each other, so each gets its
// own tag. Floats hash by bit pattern with -0.0 folded into 0.0.
fn hash_number<H: Hasher>(n: &Number, state: &mut H) {
    if let Some(u) = n.as_u64() {
        0u8.hash(state);
        u.hash(state);
    } else if let Some(i) = n.as_i64() {
        1u8.hash(state);
        i.hash(state);
    } else if let Some(f) = n.as_f64() {
        2u8.hash(state);
        let f = if f == 0.0 { 0.0 } else { f };
        f.to_bits().hash(state);
    }
}

/// Render a scalar JSON value as it appears in a query string or header.
///
/// Returns `None` for null, arrays and objects; callers expand those.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Short type name used in error messages
pub(crate) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
