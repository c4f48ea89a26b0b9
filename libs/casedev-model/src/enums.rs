// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Closed enums that tolerate unknown wire values
//!
//! [`ApiEnum`] keeps the raw wire value it was built from. Decoding never
//! fails; a value outside the known set is kept verbatim and re-emitted on
//! serialization. Only [`ApiEnum::value`] and [`Validate::validate`] report it.
//!
//! Known sets are plain enums deriving `strum::IntoStaticStr` and
//! `strum::EnumString`:
//!
//! ```ignore
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, strum::IntoStaticStr, strum::EnumString)]
//! #[strum(serialize_all = "snake_case")]
//! pub enum ProjectStatus { Active, Archived }
//!
//! let status: ApiEnum<ProjectStatus> = ProjectStatus::Active.into();
//! ```

use crate::error::ModelError;
use crate::json::hash_value;
use crate::model::Validate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

/// Wire value paired with the closed set it is expected to belong to
pub struct ApiEnum<E> {
    raw: Value,
    _known: PhantomData<fn() -> E>,
}

impl<E> ApiEnum<E>
where
    E: Copy + Into<&'static str> + FromStr,
{
    /// Wrap any wire value. Always succeeds.
    pub fn from_raw(raw: Value) -> Self {
        Self {
            raw,
            _known: PhantomData,
        }
    }

    /// The known variant, if the raw value is one
    pub fn known(&self) -> Option<E> {
        self.raw.as_str().and_then(|s| s.parse().ok())
    }

    /// The known variant, or [`ModelError::InvalidData`]
    pub fn value(&self) -> Result<E, ModelError> {
        self.known().ok_or_else(|| {
            ModelError::invalid(format!(
                "{} is not a known {} value",
                self.raw,
                short_type_name::<E>()
            ))
        })
    }

    pub fn is_known(&self) -> bool {
        self.known().is_some()
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

impl<E> From<E> for ApiEnum<E>
where
    E: Copy + Into<&'static str> + FromStr,
{
    fn from(value: E) -> Self {
        let wire: &'static str = value.into();
        Self::from_raw(Value::String(wire.to_string()))
    }
}

impl<E> Validate for ApiEnum<E>
where
    E: Copy + Into<&'static str> + FromStr,
{
    fn validate(&self) -> Result<(), ModelError> {
        self.value().map(|_| ())
    }
}

impl<E> PartialEq<E> for ApiEnum<E>
where
    E: Copy + Into<&'static str> + FromStr,
{
    fn eq(&self, other: &E) -> bool {
        let wire: &'static str = (*other).into();
        self.raw.as_str() == Some(wire)
    }
}

impl<E> Clone for ApiEnum<E> {
    fn clone(&self) -> Self {
        Self {
            raw: self.raw.clone(),
            _known: PhantomData,
        }
    }
}

impl<E> PartialEq for ApiEnum<E> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<E> Eq for ApiEnum<E> {}

impl<E> Hash for ApiEnum<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_value(&self.raw, state);
    }
}

impl<E> fmt::Debug for ApiEnum<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(short_type_name::<E>()).field(&self.raw).finish()
    }
}

impl<E> Serialize for ApiEnum<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

impl<'de, E> Deserialize<'de> for ApiEnum<E> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(|raw| Self {
            raw,
            _known: PhantomData,
        })
    }
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
