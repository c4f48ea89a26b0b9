// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! LLM gateway service

use crate::client::Client;
use crate::error::Result;
use crate::response::ApiResponse;
use casedev_api::{ChatCompletion, ChatCompletionParams, ModelList};
use casedev_model::Params;
use http::Method;

#[derive(Clone, Copy, Debug)]
pub struct LlmService<'a> {
    client: &'a Client,
}

impl<'a> LlmService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub fn with_raw_response(&self) -> LlmServiceWithRawResponse<'a> {
        LlmServiceWithRawResponse {
            client: self.client,
        }
    }

    pub fn chat(&self) -> ChatService<'a> {
        ChatService {
            client: self.client,
        }
    }

    /// Models available through the gateway
    pub async fn models(&self) -> Result<ModelList> {
        self.with_raw_response().models().await?.deserialize()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct LlmServiceWithRawResponse<'a> {
    client: &'a Client,
}

impl<'a> LlmServiceWithRawResponse<'a> {
    pub fn chat(&self) -> ChatServiceWithRawResponse<'a> {
        ChatServiceWithRawResponse {
            client: self.client,
        }
    }

    pub async fn models(&self) -> Result<ApiResponse<ModelList>> {
        let request = self
            .client
            .build_request(Method::GET, &["llm", "v1", "models"], None)?;
        self.client.send(request).await
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ChatService<'a> {
    client: &'a Client,
}

impl<'a> ChatService<'a> {
    pub fn with_raw_response(&self) -> ChatServiceWithRawResponse<'a> {
        ChatServiceWithRawResponse {
            client: self.client,
        }
    }

    pub async fn create(&self, params: ChatCompletionParams) -> Result<ChatCompletion> {
        self.with_raw_response().create(params).await?.deserialize()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ChatServiceWithRawResponse<'a> {
    client: &'a Client,
}

impl ChatServiceWithRawResponse<'_> {
    pub async fn create(
        &self,
        params: ChatCompletionParams,
    ) -> Result<ApiResponse<ChatCompletion>> {
        let request = self.client.build_request(
            Method::POST,
            &["llm", "v1", "chat", "completions"],
            Some(params.parts()),
        )?;
        self.client.send(request).await
    }
}
