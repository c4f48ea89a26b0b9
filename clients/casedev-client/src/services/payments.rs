// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Payments service

use crate::client::Client;
use crate::error::Result;
use crate::response::ApiResponse;
use casedev_api::{Charge, ChargeCreateParams, ChargeList, ChargeListParams, ChargeRetrieveParams};
use casedev_model::{Params, required_path_param};
use http::Method;

#[derive(Clone, Copy, Debug)]
pub struct PaymentsService<'a> {
    client: &'a Client,
}

impl<'a> PaymentsService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub fn with_raw_response(&self) -> PaymentsServiceWithRawResponse<'a> {
        PaymentsServiceWithRawResponse {
            client: self.client,
        }
    }

    pub fn charges(&self) -> ChargesService<'a> {
        ChargesService {
            client: self.client,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct PaymentsServiceWithRawResponse<'a> {
    client: &'a Client,
}

impl<'a> PaymentsServiceWithRawResponse<'a> {
    pub fn charges(&self) -> ChargesServiceWithRawResponse<'a> {
        ChargesServiceWithRawResponse {
            client: self.client,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ChargesService<'a> {
    client: &'a Client,
}

impl<'a> ChargesService<'a> {
    pub fn with_raw_response(&self) -> ChargesServiceWithRawResponse<'a> {
        ChargesServiceWithRawResponse {
            client: self.client,
        }
    }

    /// Create a charge. Set an idempotency key on `params` to make retries safe.
    pub async fn create(&self, params: ChargeCreateParams) -> Result<Charge> {
        self.with_raw_response().create(params).await?.deserialize()
    }

    pub async fn retrieve(&self, params: ChargeRetrieveParams) -> Result<Charge> {
        self.with_raw_response().retrieve(params).await?.deserialize()
    }

    pub async fn list(&self, params: ChargeListParams) -> Result<ChargeList> {
        self.with_raw_response().list(params).await?.deserialize()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ChargesServiceWithRawResponse<'a> {
    client: &'a Client,
}

impl ChargesServiceWithRawResponse<'_> {
    pub async fn create(&self, params: ChargeCreateParams) -> Result<ApiResponse<Charge>> {
        let request = self.client.build_request(
            Method::POST,
            &["payments", "v1", "charges"],
            Some(params.parts()),
        )?;
        self.client.send(request).await
    }

    pub async fn retrieve(&self, params: ChargeRetrieveParams) -> Result<ApiResponse<Charge>> {
        let id = required_path_param("id", params.id.as_deref())?;
        let request = self.client.build_request(
            Method::GET,
            &["payments", "v1", "charges", id],
            Some(params.parts()),
        )?;
        self.client.send(request).await
    }

    pub async fn list(&self, params: ChargeListParams) -> Result<ApiResponse<ChargeList>> {
        let request = self.client.build_request(
            Method::GET,
            &["payments", "v1", "charges"],
            Some(params.parts()),
        )?;
        self.client.send(request).await
    }
}
