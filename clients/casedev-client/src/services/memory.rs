// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Memory service

use crate::client::Client;
use crate::error::Result;
use crate::response::ApiResponse;
use casedev_api::{
    DeleteResponse, MemoryAddParams, MemoryDeleteParams, MemoryItem, MemorySearchParams,
    MemorySearchResponse,
};
use casedev_model::{Params, required_path_param};
use http::Method;

#[derive(Clone, Copy, Debug)]
pub struct MemoryService<'a> {
    client: &'a Client,
}

impl<'a> MemoryService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub fn with_raw_response(&self) -> MemoryServiceWithRawResponse<'a> {
        MemoryServiceWithRawResponse {
            client: self.client,
        }
    }

    pub async fn add(&self, params: MemoryAddParams) -> Result<MemoryItem> {
        self.with_raw_response().add(params).await?.deserialize()
    }

    pub async fn search(&self, params: MemorySearchParams) -> Result<MemorySearchResponse> {
        self.with_raw_response().search(params).await?.deserialize()
    }

    pub async fn delete(&self, params: MemoryDeleteParams) -> Result<DeleteResponse> {
        self.with_raw_response().delete(params).await?.deserialize()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct MemoryServiceWithRawResponse<'a> {
    client: &'a Client,
}

impl MemoryServiceWithRawResponse<'_> {
    pub async fn add(&self, params: MemoryAddParams) -> Result<ApiResponse<MemoryItem>> {
        let request = self.client.build_request(
            Method::POST,
            &["memory", "v1"],
            Some(params.parts()),
        )?;
        self.client.send(request).await
    }

    pub async fn search(
        &self,
        params: MemorySearchParams,
    ) -> Result<ApiResponse<MemorySearchResponse>> {
        let request = self.client.build_request(
            Method::POST,
            &["memory", "v1", "search"],
            Some(params.parts()),
        )?;
        self.client.send(request).await
    }

    pub async fn delete(&self, params: MemoryDeleteParams) -> Result<ApiResponse<DeleteResponse>> {
        let id = required_path_param("id", params.id.as_deref())?;
        let request = self.client.build_request(
            Method::DELETE,
            &["memory", "v1", id],
            Some(params.parts()),
        )?;
        self.client.send(request).await
    }
}
