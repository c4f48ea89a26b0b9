// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Vault service

use crate::client::Client;
use crate::error::Result;
use crate::response::ApiResponse;
use casedev_api::{
    Vault, VaultCreateParams, VaultList, VaultRetrieveParams, VaultSearchParams,
    VaultSearchResponse,
};
use casedev_model::{Params, required_path_param};
use http::Method;

#[derive(Clone, Copy, Debug)]
pub struct VaultService<'a> {
    client: &'a Client,
}

impl<'a> VaultService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub fn with_raw_response(&self) -> VaultServiceWithRawResponse<'a> {
        VaultServiceWithRawResponse {
            client: self.client,
        }
    }

    pub async fn create(&self, params: VaultCreateParams) -> Result<Vault> {
        self.with_raw_response().create(params).await?.deserialize()
    }

    pub async fn list(&self) -> Result<VaultList> {
        self.with_raw_response().list().await?.deserialize()
    }

    pub async fn retrieve(&self, params: VaultRetrieveParams) -> Result<Vault> {
        self.with_raw_response().retrieve(params).await?.deserialize()
    }

    /// Semantic, keyword or hybrid search over one vault
    pub async fn search(&self, params: VaultSearchParams) -> Result<VaultSearchResponse> {
        self.with_raw_response().search(params).await?.deserialize()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct VaultServiceWithRawResponse<'a> {
    client: &'a Client,
}

impl VaultServiceWithRawResponse<'_> {
    pub async fn create(&self, params: VaultCreateParams) -> Result<ApiResponse<Vault>> {
        let request = self.client.build_request(
            Method::POST,
            &["vault", "v1"],
            Some(params.parts()),
        )?;
        self.client.send(request).await
    }

    pub async fn list(&self) -> Result<ApiResponse<VaultList>> {
        let request = self.client.build_request(Method::GET, &["vault", "v1"], None)?;
        self.client.send(request).await
    }

    pub async fn retrieve(&self, params: VaultRetrieveParams) -> Result<ApiResponse<Vault>> {
        let id = required_path_param("id", params.id.as_deref())?;
        let request = self.client.build_request(
            Method::GET,
            &["vault", "v1", id],
            Some(params.parts()),
        )?;
        self.client.send(request).await
    }

    pub async fn search(
        &self,
        params: VaultSearchParams,
    ) -> Result<ApiResponse<VaultSearchResponse>> {
        let id = required_path_param("id", params.id.as_deref())?;
        let request = self.client.build_request(
            Method::POST,
            &["vault", "v1", id, "search"],
            Some(params.parts()),
        )?;
        self.client.send(request).await
    }
}
