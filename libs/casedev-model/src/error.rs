// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Error types for casedev-model

use thiserror::Error;

/// Errors raised while reading, writing or validating model data
#[derive(Error, Debug)]
pub enum ModelError {
    /// Stored data does not have the expected shape, a required value is
    /// missing, or an enum/union carries a value outside its known set
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// A write was attempted after the record had been read
    #[error("Record is frozen; cannot write field '{key}'")]
    Frozen { key: String },

    /// Malformed JSON text
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ModelError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        ModelError::InvalidData(msg.into())
    }

    /// True for [`ModelError::InvalidData`]
    pub fn is_invalid_data(&self) -> bool {
        matches!(self, ModelError::InvalidData(_))
    }
}
