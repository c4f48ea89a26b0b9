// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Projects service

use crate::client::Client;
use crate::error::Result;
use crate::response::ApiResponse;
use casedev_api::{
    DeleteResponse, Project, ProjectCreateParams, ProjectDeleteParams, ProjectList,
    ProjectListParams, ProjectRetrieveParams, ProjectUpdateParams,
};
use casedev_model::{Params, required_path_param};
use http::Method;

#[derive(Clone, Copy, Debug)]
pub struct ProjectsService<'a> {
    client: &'a Client,
}

impl<'a> ProjectsService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub fn with_raw_response(&self) -> ProjectsServiceWithRawResponse<'a> {
        ProjectsServiceWithRawResponse {
            client: self.client,
        }
    }

    pub async fn list(&self, params: ProjectListParams) -> Result<ProjectList> {
        self.with_raw_response().list(params).await?.deserialize()
    }

    pub async fn create(&self, params: ProjectCreateParams) -> Result<Project> {
        self.with_raw_response().create(params).await?.deserialize()
    }

    pub async fn retrieve(&self, params: ProjectRetrieveParams) -> Result<Project> {
        self.with_raw_response().retrieve(params).await?.deserialize()
    }

    pub async fn update(&self, params: ProjectUpdateParams) -> Result<Project> {
        self.with_raw_response().update(params).await?.deserialize()
    }

    pub async fn delete(&self, params: ProjectDeleteParams) -> Result<DeleteResponse> {
        self.with_raw_response().delete(params).await?.deserialize()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ProjectsServiceWithRawResponse<'a> {
    client: &'a Client,
}

impl ProjectsServiceWithRawResponse<'_> {
    pub async fn list(&self, params: ProjectListParams) -> Result<ApiResponse<ProjectList>> {
        let request = self.client.build_request(
            Method::GET,
            &["projects", "v1"],
            Some(params.parts()),
        )?;
        self.client.send(request).await
    }

    pub async fn create(&self, params: ProjectCreateParams) -> Result<ApiResponse<Project>> {
        let request = self.client.build_request(
            Method::POST,
            &["projects", "v1"],
            Some(params.parts()),
        )?;
        self.client.send(request).await
    }

    pub async fn retrieve(&self, params: ProjectRetrieveParams) -> Result<ApiResponse<Project>> {
        let id = required_path_param("id", params.id.as_deref())?;
        let request = self.client.build_request(
            Method::GET,
            &["projects", "v1", id],
            Some(params.parts()),
        )?;
        self.client.send(request).await
    }

    pub async fn update(&self, params: ProjectUpdateParams) -> Result<ApiResponse<Project>> {
        let id = required_path_param("id", params.id.as_deref())?;
        let request = self.client.build_request(
            Method::PATCH,
            &["projects", "v1", id],
            Some(params.parts()),
        )?;
        self.client.send(request).await
    }

    pub async fn delete(&self, params: ProjectDeleteParams) -> Result<ApiResponse<DeleteResponse>> {
        let id = required_path_param("id", params.id.as_deref())?;
        let request = self.client.build_request(
            Method::DELETE,
            &["projects", "v1", id],
            Some(params.parts()),
        )?;
        self.client.send(request).await
    }
}
