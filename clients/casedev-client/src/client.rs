// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! The Casedev client and request construction

use crate::error::{Error, Result};
use crate::options::ClientOptions;
use crate::response::ApiResponse;
use crate::services::{
    ComputeService, LlmService, MemoryService, PaymentsService, ProjectsService, VaultService,
};
use crate::transport::{HttpExecutor, HttpRequest, ReqwestExecutor};
use casedev_model::ParamParts;
use http::Method;
use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderName, HeaderValue, USER_AGENT};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Entry point to the Casedev API
///
/// Cheap to clone; clones share one executor and connection pool.
///
/// ```ignore
/// use casedev_client::{Client, ClientOptions};
/// use casedev_api::ProjectListParams;
///
/// let client = Client::new(ClientOptions::from_env()?)?;
/// let projects = client.projects().list(ProjectListParams::new()).await?;
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    options: ClientOptions,
    executor: Arc<dyn HttpExecutor>,
}

impl Client {
    /// Client backed by [`ReqwestExecutor`]
    pub fn new(options: ClientOptions) -> Result<Self> {
        let executor = ReqwestExecutor::new(options.get_timeout())?;
        Ok(Self::with_executor(options, executor))
    }

    /// Client configured from `CASEDEV_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(ClientOptions::from_env()?)
    }

    /// Client sending requests through a caller-supplied executor
    pub fn with_executor(options: ClientOptions, executor: impl HttpExecutor + 'static) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                options,
                executor: Arc::new(executor),
            }),
        }
    }

    pub fn options(&self) -> &ClientOptions {
        &self.inner.options
    }

    pub fn compute(&self) -> ComputeService<'_> {
        ComputeService::new(self)
    }

    pub fn memory(&self) -> MemoryService<'_> {
        MemoryService::new(self)
    }

    pub fn projects(&self) -> ProjectsService<'_> {
        ProjectsService::new(self)
    }

    pub fn vault(&self) -> VaultService<'_> {
        VaultService::new(self)
    }

    pub fn llm(&self) -> LlmService<'_> {
        LlmService::new(self)
    }

    pub fn payments(&self) -> PaymentsService<'_> {
        PaymentsService::new(self)
    }

    /// Build a request for `segments` under the base URL.
    ///
    /// Every segment is percent-encoded. Header, query and body fields come
    /// from `parts`.
    pub(crate) fn build_request(
        &self,
        method: Method,
        segments: &[&str],
        parts: Option<&ParamParts>,
    ) -> Result<HttpRequest> {
        let options = &self.inner.options;

        let mut url = options.get_base_url().clone();
        let encoded: Vec<String> = segments
            .iter()
            .map(|s| urlencoding::encode(s).into_owned())
            .collect();
        let path = format!("{}/{}", url.path().trim_end_matches('/'), encoded.join("/"));
        url.set_path(&path);

        if let Some(parts) = parts {
            let pairs = parts.query_pairs();
            if !pairs.is_empty() {
                url.query_pairs_mut().extend_pairs(pairs);
            }
        }

        let mut headers = options.get_default_headers().clone();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, header_value(options.get_user_agent())?);
        if let Some(token) = options.bearer_token() {
            let mut auth = header_value(&format!("Bearer {}", token))?;
            auth.set_sensitive(true);
            headers.insert(AUTHORIZATION, auth);
        }

        let mut body = None;
        if let Some(parts) = parts {
            for (name, value) in parts.header_pairs() {
                let header = HeaderName::from_bytes(name.as_bytes())
                    .map_err(|e| Error::InvalidHeader(format!("{}: {}", name, e)))?;
                headers.insert(header, header_value(&value)?);
            }
            body = parts.body_value();
        }
        if body.is_some() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        Ok(HttpRequest {
            method,
            url,
            headers,
            body,
        })
    }

    /// Send a request and keep the body for later decoding.
    ///
    /// Non-success statuses become [`Error::Status`].
    pub(crate) async fn send<T>(&self, request: HttpRequest) -> Result<ApiResponse<T>> {
        let method = request.method.clone();
        let url = request.url.clone();
        debug!(%method, %url, "sending request");

        let response = self.inner.executor.execute(request).await?;
        debug!(%method, %url, status = %response.status, "received response");

        if !response.is_success() {
            warn!(%method, %url, status = %response.status, "request failed");
            return Err(Error::Status {
                status: response.status,
                body: response.text(),
            });
        }

        Ok(ApiResponse::new(
            response,
            self.inner.options.validates_responses(),
        ))
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("options", &self.inner.options)
            .finish_non_exhaustive()
    }
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| Error::InvalidHeader(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::HttpResponse;
    use async_trait::async_trait;
    use casedev_model::RawMap;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    struct Unreachable;

    #[async_trait]
    impl HttpExecutor for Unreachable {
        async fn execute(&self, _request: HttpRequest) -> Result<HttpResponse> {
            Err(Error::Config("no network in unit tests".to_string()))
        }
    }

    fn client(base: &str) -> Client {
        let options = ClientOptions::new("sk_test").base_url(base).unwrap();
        Client::with_executor(options, Unreachable)
    }

    #[test]
    fn test_path_segments_are_encoded() {
        let c = client("https://api.case.dev");
        let req = c
            .build_request(Method::GET, &["projects", "v1", "a b/c"], None)
            .unwrap();
        assert_eq!(req.url.as_str(), "https://api.case.dev/projects/v1/a%20b%2Fc");
        assert_eq!(req.body, None);
    }

    #[test]
    fn test_base_path_prefix_is_kept() {
        let c = client("http://localhost:9000/gateway/");
        let req = c
            .build_request(Method::GET, &["vault", "v1"], None)
            .unwrap();
        assert_eq!(req.url.as_str(), "http://localhost:9000/gateway/vault/v1");
    }

    #[test]
    fn test_auth_and_body_headers() {
        let c = client("https://api.case.dev");
        let mut parts = ParamParts::new();
        parts.body = RawMap::from_value(json!({"name": "x"})).unwrap();
        let req = c
            .build_request(Method::POST, &["projects", "v1"], Some(&parts))
            .unwrap();
        assert_eq!(req.headers[AUTHORIZATION], "Bearer sk_test");
        assert!(req.headers[AUTHORIZATION].is_sensitive());
        assert_eq!(req.headers[CONTENT_TYPE], "application/json");
        assert_eq!(req.body, Some(json!({"name": "x"})));
    }

    #[test]
    fn test_bad_header_param_is_rejected() {
        let c = client("https://api.case.dev");
        let mut parts = ParamParts::new();
        parts.header.set("X-Note", Some("line\nbreak")).unwrap();
        let err = c
            .build_request(Method::GET, &["llm", "v1", "models"], Some(&parts))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidHeader(_)));
    }
}
