// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Client error types

use casedev_model::ModelError;
use http::StatusCode;
use thiserror::Error;

/// Errors returned by the Casedev client
#[derive(Debug, Error)]
pub enum Error {
    /// Params or response data did not fit the model
    #[error("invalid data: {0}")]
    InvalidData(#[from] ModelError),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("API returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("malformed JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Status code of a non-success response
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Status { status, .. } => Some(*status),
            Error::Transport(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    pub fn is_invalid_data(&self) -> bool {
        matches!(self, Error::InvalidData(e) if e.is_invalid_data())
    }
}

/// Result alias for client operations
pub type Result<T, E = Error> = std::result::Result<T, E>;
