// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Compute service: usage reports and environments

use crate::client::Client;
use crate::error::Result;
use crate::response::ApiResponse;
use casedev_api::{
    ComputeUsage, ComputeUsageParams, DeleteResponse, Environment, EnvironmentCreateParams,
    EnvironmentDeleteParams, EnvironmentList,
};
use casedev_model::{Params, required_path_param};
use http::Method;

#[derive(Clone, Copy, Debug)]
pub struct ComputeService<'a> {
    client: &'a Client,
}

impl<'a> ComputeService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub fn with_raw_response(&self) -> ComputeServiceWithRawResponse<'a> {
        ComputeServiceWithRawResponse {
            client: self.client,
        }
    }

    pub fn environments(&self) -> EnvironmentsService<'a> {
        EnvironmentsService {
            client: self.client,
        }
    }

    /// Usage and cost for one month
    pub async fn usage(&self, params: ComputeUsageParams) -> Result<ComputeUsage> {
        self.with_raw_response().usage(params).await?.deserialize()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ComputeServiceWithRawResponse<'a> {
    client: &'a Client,
}

impl<'a> ComputeServiceWithRawResponse<'a> {
    pub fn environments(&self) -> EnvironmentsServiceWithRawResponse<'a> {
        EnvironmentsServiceWithRawResponse {
            client: self.client,
        }
    }

    pub async fn usage(&self, params: ComputeUsageParams) -> Result<ApiResponse<ComputeUsage>> {
        let request = self.client.build_request(
            Method::GET,
            &["compute", "v1", "usage"],
            Some(params.parts()),
        )?;
        self.client.send(request).await
    }
}

/// Environments are addressed by name
#[derive(Clone, Copy, Debug)]
pub struct EnvironmentsService<'a> {
    client: &'a Client,
}

impl<'a> EnvironmentsService<'a> {
    pub fn with_raw_response(&self) -> EnvironmentsServiceWithRawResponse<'a> {
        EnvironmentsServiceWithRawResponse {
            client: self.client,
        }
    }

    pub async fn list(&self) -> Result<EnvironmentList> {
        self.with_raw_response().list().await?.deserialize()
    }

    pub async fn create(&self, params: EnvironmentCreateParams) -> Result<Environment> {
        self.with_raw_response().create(params).await?.deserialize()
    }

    pub async fn delete(&self, params: EnvironmentDeleteParams) -> Result<DeleteResponse> {
        self.with_raw_response().delete(params).await?.deserialize()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct EnvironmentsServiceWithRawResponse<'a> {
    client: &'a Client,
}

impl EnvironmentsServiceWithRawResponse<'_> {
    pub async fn list(&self) -> Result<ApiResponse<EnvironmentList>> {
        let request = self.client.build_request(
            Method::GET,
            &["compute", "v1", "environments"],
            None,
        )?;
        self.client.send(request).await
    }

    pub async fn create(
        &self,
        params: EnvironmentCreateParams,
    ) -> Result<ApiResponse<Environment>> {
        let request = self.client.build_request(
            Method::POST,
            &["compute", "v1", "environments"],
            Some(params.parts()),
        )?;
        self.client.send(request).await
    }

    pub async fn delete(
        &self,
        params: EnvironmentDeleteParams,
    ) -> Result<ApiResponse<DeleteResponse>> {
        let name = required_path_param("name", params.name.as_deref())?;
        let request = self.client.build_request(
            Method::DELETE,
            &["compute", "v1", "environments", name],
            Some(params.parts()),
        )?;
        self.client.send(request).await
    }
}
