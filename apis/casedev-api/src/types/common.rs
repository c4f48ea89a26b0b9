// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Common types used across the Casedev API

use casedev_model::{ModelError, RawMap, Validate};
use serde::{Deserialize, Serialize};

/// RFC3339 timestamp
pub type Timestamp = String;

/// Arbitrary key-value metadata
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// Implements [`casedev_model::Model`] for newtypes over a `raw: RawMap` field
macro_rules! impl_model {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl casedev_model::Model for $ty {
                fn raw(&self) -> &casedev_model::RawMap {
                    &self.raw
                }

                fn raw_mut(&mut self) -> &mut casedev_model::RawMap {
                    &mut self.raw
                }

                fn from_raw(raw: casedev_model::RawMap) -> Self {
                    Self { raw }
                }

                fn into_raw(self) -> casedev_model::RawMap {
                    self.raw
                }
            }
        )+
    };
}

pub(crate) use impl_model;

/// Implements [`casedev_model::Params`] for types with a `parts: ParamParts` field
macro_rules! impl_params {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl casedev_model::Params for $ty {
                fn parts(&self) -> &casedev_model::ParamParts {
                    &self.parts
                }
            }
        )+
    };
}

pub(crate) use impl_params;

/// Result of a delete call
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeleteResponse {
    raw: RawMap,
}

impl_model!(DeleteResponse);

impl DeleteResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifier of the deleted resource
    pub fn id(&self) -> Result<Option<String>, ModelError> {
        self.raw.get("id")
    }

    pub fn set_id(&mut self, value: impl Into<Option<String>>) -> Result<&mut Self, ModelError> {
        self.raw.set("id", value.into())?;
        Ok(self)
    }

    pub fn deleted(&self) -> Result<bool, ModelError> {
        self.raw.get_required("deleted")
    }

    pub fn set_deleted(&mut self, value: bool) -> Result<&mut Self, ModelError> {
        self.raw.set("deleted", Some(value))?;
        Ok(self)
    }
}

impl Validate for DeleteResponse {
    fn validate(&self) -> Result<(), ModelError> {
        self.id()?;
        self.deleted()?;
        Ok(())
    }
}
