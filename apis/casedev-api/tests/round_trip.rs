// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Wire compatibility tests across resource models

#![allow(clippy::unwrap_used)]

use casedev_api::{
    ApiEnum, ChargeStatus, ChatRole, EnvironmentStatus, Model, Project, ProjectStatus,
    SearchMethod, Validate,
};
use quickcheck::{Arbitrary, Gen, quickcheck};
use serde_json::{Value, json};
use strum::IntoEnumIterator;
use test_case::test_case;

#[derive(Clone, Debug)]
struct WireProject(Value);

impl Arbitrary for WireProject {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut obj = serde_json::Map::new();
        obj.insert("id".into(), json!(String::arbitrary(g)));
        obj.insert("name".into(), json!(String::arbitrary(g)));
        let status = *g
            .choose(&["active", "archived", "frozen", ""])
            .unwrap_or(&"active");
        obj.insert("status".into(), json!(status));
        match u8::arbitrary(g) % 3 {
            0 => {}
            1 => {
                obj.insert("description".into(), Value::Null);
            }
            _ => {
                obj.insert("description".into(), json!(String::arbitrary(g)));
            }
        }
        if bool::arbitrary(g) {
            obj.insert("x-extra".into(), json!({"n": i32::arbitrary(g)}));
        }
        WireProject(Value::Object(obj))
    }
}

quickcheck! {
    fn prop_project_wire_round_trip(wire: WireProject) -> bool {
        let text = serde_json::to_string(&wire.0).unwrap();
        let project: Project = serde_json::from_str(&text).unwrap();
        serde_json::to_string(&project).unwrap() == text
    }

    fn prop_project_validation_tracks_status(wire: WireProject) -> bool {
        let project = Project::from_json(wire.0.clone()).unwrap();
        let known = matches!(wire.0["status"].as_str(), Some("active" | "archived"));
        project.validate().is_ok() == known
    }
}

#[test]
fn test_every_known_variant_is_recognized() {
    for status in ProjectStatus::iter() {
        let wire = serde_json::to_value(ApiEnum::from(status)).unwrap();
        let back: ApiEnum<ProjectStatus> = serde_json::from_value(wire).unwrap();
        assert_eq!(back.value().unwrap(), status);
    }
    for status in EnvironmentStatus::iter() {
        assert!(ApiEnum::from(status).is_known());
    }
    for status in ChargeStatus::iter() {
        assert!(ApiEnum::from(status).is_known());
    }
    for method in SearchMethod::iter() {
        assert!(ApiEnum::from(method).is_known());
    }
}

#[test_case(json!("system"), true ; "system role")]
#[test_case(json!("assistant"), true ; "assistant role")]
#[test_case(json!("Assistant"), false ; "wrong case")]
#[test_case(json!("developer"), false ; "newer role")]
#[test_case(json!(3), false ; "number")]
fn test_chat_role_recognition(raw: Value, known: bool) {
    let role: ApiEnum<ChatRole> = serde_json::from_value(raw.clone()).unwrap();
    assert_eq!(role.is_known(), known);
    assert_eq!(serde_json::to_value(&role).unwrap(), raw);
}

#[test]
fn test_field_order_does_not_affect_equality() {
    let a = Project::from_json_str(r#"{"id":"p","name":"n","status":"active"}"#).unwrap();
    let b = Project::from_json_str(r#"{"status":"active","id":"p","name":"n"}"#).unwrap();
    assert_eq!(a, b);
    assert_ne!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}
