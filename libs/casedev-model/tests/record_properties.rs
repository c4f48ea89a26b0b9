// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Property tests for the raw record
//!
//! Random sequences of set / set-null / clear writes must survive a
//! serialize/deserialize cycle, and the three field states must stay
//! distinguishable afterwards.

#![allow(clippy::unwrap_used)]

use casedev_model::RawMap;
use quickcheck::{Arbitrary, Gen, quickcheck};
use serde_json::{Value, json};
use std::collections::HashMap;

const KEYS: &[&str] = &["id", "name", "limit", "enabled", "tags", "extra"];

#[derive(Clone, Debug)]
enum Write {
    Value(&'static str, Value),
    Null(&'static str),
    Clear(&'static str),
}

impl Arbitrary for Write {
    fn arbitrary(g: &mut Gen) -> Write {
        let key = *g.choose(KEYS).unwrap_or(&"id");
        match u8::arbitrary(g) % 6 {
            0 => Write::Value(key, json!(String::arbitrary(g))),
            1 => Write::Value(key, json!(i32::arbitrary(g))),
            2 => Write::Value(key, json!(bool::arbitrary(g))),
            3 => Write::Value(key, json!([u8::arbitrary(g), String::arbitrary(g)])),
            4 => Write::Null(key),
            _ => Write::Clear(key),
        }
    }
}

#[derive(Debug, PartialEq)]
enum State {
    Absent,
    Null,
    Set(Value),
}

fn apply(writes: &[Write]) -> (RawMap, HashMap<&'static str, State>) {
    let mut map = RawMap::new();
    let mut expected = HashMap::new();
    for write in writes {
        match write {
            Write::Value(key, value) => {
                map.set(key, Some(value)).unwrap();
                expected.insert(*key, State::Set(value.clone()));
            }
            Write::Null(key) => {
                map.set_nullable::<Value>(key, None).unwrap();
                expected.insert(*key, State::Null);
            }
            Write::Clear(key) => {
                map.set::<Value>(key, None).unwrap();
                expected.insert(*key, State::Absent);
            }
        }
    }
    (map, expected)
}

fn observed(map: &RawMap, key: &str) -> State {
    match map.get_raw(key) {
        None => State::Absent,
        Some(Value::Null) => State::Null,
        Some(v) => State::Set(v.clone()),
    }
}

quickcheck! {
    fn prop_serialization_round_trip(writes: Vec<Write>) -> bool {
        let (map, _) = apply(&writes);
        let text = serde_json::to_string(&map).unwrap();
        let back: RawMap = serde_json::from_str(&text).unwrap();
        back == map && serde_json::to_string(&back).unwrap() == text
    }

    fn prop_field_states_survive_round_trip(writes: Vec<Write>) -> bool {
        let (map, expected) = apply(&writes);
        let back: RawMap = serde_json::from_value(serde_json::to_value(&map).unwrap()).unwrap();
        KEYS.iter().all(|key| {
            let want = match expected.get(key) {
                None | Some(State::Absent) => State::Absent,
                Some(State::Null) => State::Null,
                Some(State::Set(v)) => State::Set(v.clone()),
            };
            observed(&back, key) == want
        })
    }

    fn prop_clone_is_independent(writes: Vec<Write>) -> bool {
        let (map, _) = apply(&writes);
        map.freeze();
        let mut copy = map.clone();
        let before = map.clone();
        copy.set("extra", Some("changed-by-copy")).unwrap();
        map == before && !copy.is_frozen() && map.is_frozen()
    }
}
