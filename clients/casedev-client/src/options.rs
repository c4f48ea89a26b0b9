// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Client configuration

use crate::error::{Error, Result};
use http::header::{HeaderMap, HeaderName, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.case.dev";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
pub const DEFAULT_USER_AGENT: &str = concat!("casedev-rust/", env!("CARGO_PKG_VERSION"));

pub const ENV_API_KEY: &str = "CASEDEV_API_KEY";
pub const ENV_BASE_URL: &str = "CASEDEV_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "CASEDEV_TIMEOUT_SECS";
pub const ENV_RESPONSE_VALIDATION: &str = "CASEDEV_RESPONSE_VALIDATION";

/// Settings shared by every request a [`crate::Client`] makes
#[derive(Debug)]
pub struct ClientOptions {
    base_url: Url,
    api_key: Option<SecretString>,
    timeout: Duration,
    response_validation: bool,
    default_headers: HeaderMap,
    user_agent: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
            response_validation: false,
            default_headers: HeaderMap::new(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

// DEFAULT_BASE_URL is a constant and `test_defaults` parses it.
#[allow(clippy::unwrap_used)]
fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).unwrap()
}

impl ClientOptions {
    /// Options for the production API with the given key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::default().api_key(api_key)
    }

    /// Build options from `CASEDEV_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build options from any variable source
    ///
    /// `CASEDEV_API_KEY` is required. The others fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(ENV_API_KEY)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| Error::Config(format!("{} must be set", ENV_API_KEY)))?;
        let mut options = Self::new(api_key);

        if let Some(url) = lookup(ENV_BASE_URL) {
            options = options.base_url(&url)?;
        }

        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                Error::Config(format!(
                    "{} must be a whole number of seconds, got {:?}",
                    ENV_TIMEOUT_SECS, secs
                ))
            })?;
            options = options.timeout(Duration::from_secs(secs));
        }

        if let Some(flag) = lookup(ENV_RESPONSE_VALIDATION) {
            options = options.response_validation(flag == "1" || flag.to_lowercase() == "true");
        }

        Ok(options)
    }

    pub fn base_url(mut self, url: &str) -> Result<Self> {
        let parsed = Url::parse(url)?;
        if parsed.cannot_be_a_base() {
            return Err(Error::Config(format!("{} cannot be used as a base URL", url)));
        }
        self.base_url = parsed;
        Ok(self)
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(key.into()));
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validate every typed response body after deserializing it
    pub fn response_validation(mut self, enabled: bool) -> Self {
        self.response_validation = enabled;
        self
    }

    /// Add a header sent with every request
    pub fn default_header(mut self, name: &str, value: &str) -> Result<Self> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| Error::InvalidHeader(format!("{}: {}", name, e)))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| Error::InvalidHeader(format!("{}: {}", name, e)))?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn get_base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub(crate) fn bearer_token(&self) -> Option<&str> {
        self.api_key.as_ref().map(|k| k.expose_secret())
    }

    pub fn get_timeout(&self) -> Duration {
        self.timeout
    }

    pub fn validates_responses(&self) -> bool {
        self.response_validation
    }

    pub fn get_default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    pub fn get_user_agent(&self) -> &str {
        &self.user_agent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let options = ClientOptions::default();
        assert_eq!(options.get_base_url().as_str(), "https://api.case.dev/");
        assert_eq!(options.get_timeout(), Duration::from_secs(60));
        assert!(!options.validates_responses());
        assert!(!options.has_api_key());
    }

    #[test]
    fn test_from_lookup_requires_key() {
        let err = ClientOptions::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = ClientOptions::from_lookup(lookup(&[(ENV_API_KEY, "")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_from_lookup_reads_overrides() {
        let options = ClientOptions::from_lookup(lookup(&[
            (ENV_API_KEY, "sk_test"),
            (ENV_BASE_URL, "http://localhost:8080"),
            (ENV_TIMEOUT_SECS, "5"),
            (ENV_RESPONSE_VALIDATION, "TRUE"),
        ]))
        .unwrap();
        assert_eq!(options.bearer_token(), Some("sk_test"));
        assert_eq!(options.get_base_url().as_str(), "http://localhost:8080/");
        assert_eq!(options.get_timeout(), Duration::from_secs(5));
        assert!(options.validates_responses());
    }

    #[test]
    fn test_from_lookup_rejects_bad_timeout() {
        let err = ClientOptions::from_lookup(lookup(&[
            (ENV_API_KEY, "sk_test"),
            (ENV_TIMEOUT_SECS, "soon"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains(ENV_TIMEOUT_SECS));
    }

    #[test]
    fn test_debug_hides_key() {
        let options = ClientOptions::new("sk_live_secret");
        assert!(!format!("{:?}", options).contains("sk_live_secret"));
    }

    #[test]
    fn test_default_header_rejects_bad_name() {
        let result = ClientOptions::default().default_header("bad header", "x");
        assert!(matches!(result, Err(Error::InvalidHeader(_))));
    }
}
