// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Raw responses with on-demand typed bodies

use crate::error::Result;
use crate::transport::HttpResponse;
use bytes::Bytes;
use casedev_model::Validate;
use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;
use std::fmt;
use std::marker::PhantomData;

/// A successful response whose body has not been decoded yet
///
/// The body is parsed by [`ApiResponse::deserialize`], so a malformed
/// payload only fails when the caller asks for the typed value.
pub struct ApiResponse<T> {
    response: HttpResponse,
    validate: bool,
    _body: PhantomData<fn() -> T>,
}

impl<T> ApiResponse<T> {
    pub(crate) fn new(response: HttpResponse, validate: bool) -> Self {
        Self {
            response,
            validate,
            _body: PhantomData,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.response.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.response.headers
    }

    /// Value of the `x-request-id` header, if present
    pub fn request_id(&self) -> Option<&str> {
        self.response
            .headers
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
    }

    pub fn body(&self) -> &Bytes {
        &self.response.body
    }

    pub fn into_inner(self) -> HttpResponse {
        self.response
    }
}

impl<T: DeserializeOwned + Validate> ApiResponse<T> {
    /// Decode the body, validating it when the client has response
    /// validation turned on
    pub fn deserialize(&self) -> Result<T> {
        let value: T = serde_json::from_slice(&self.response.body)?;
        if self.validate {
            tracing::trace!("validating response body");
            value.validate()?;
        }
        Ok(value)
    }
}

impl<T> fmt::Debug for ApiResponse<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiResponse")
            .field("status", &self.response.status)
            .field("body_len", &self.response.body.len())
            .field("validate", &self.validate)
            .finish()
    }
}
