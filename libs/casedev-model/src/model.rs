// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Record and validation traits

use crate::error::ModelError;
use crate::raw::RawMap;
use serde_json::Value;

/// Explicit, opt-in validation.
///
/// Deserialization never validates. Callers decide when a payload has to be
/// strictly well formed.
pub trait Validate {
    fn validate(&self) -> Result<(), ModelError>;
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Result<(), ModelError> {
        self.iter().try_for_each(Validate::validate)
    }
}

impl<T: Validate> Validate for Option<T> {
    fn validate(&self) -> Result<(), ModelError> {
        match self {
            Some(inner) => inner.validate(),
            None => Ok(()),
        }
    }
}

/// A typed view over exactly one [`RawMap`].
///
/// Implementors are newtypes that serialize transparently as their map, so
/// unknown wire fields survive a decode/encode cycle.
pub trait Model: Sized {
    fn raw(&self) -> &RawMap;

    fn raw_mut(&mut self) -> &mut RawMap;

    fn from_raw(raw: RawMap) -> Self;

    fn into_raw(self) -> RawMap;

    /// Wrap a JSON object without reading any field
    fn from_json(value: Value) -> Result<Self, ModelError> {
        RawMap::from_value(value).map(Self::from_raw)
    }

    /// Parse JSON text without reading any field
    fn from_json_str(text: &str) -> Result<Self, ModelError> {
        let raw: RawMap = serde_json::from_str(text)?;
        Ok(Self::from_raw(raw))
    }

    fn to_json(&self) -> Value {
        self.raw().to_value()
    }

    fn is_frozen(&self) -> bool {
        self.raw().is_frozen()
    }
}
