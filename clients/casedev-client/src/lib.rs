// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Casedev API client library
//!
//! Typed async access to the Casedev REST API.
//!
//! ## Usage
//!
//! ```ignore
//! use casedev_client::{Client, ClientOptions};
//! use casedev_api::{ComputeUsageParams, ProjectCreateParams};
//!
//! let client = Client::new(ClientOptions::new("sk_live_...").response_validation(true))?;
//!
//! let mut usage = ComputeUsageParams::new();
//! usage.set_month(3)?.set_year(2024)?;
//! let report = client.compute().usage(usage).await?;
//!
//! // Status and headers alongside the body
//! let raw = client
//!     .projects()
//!     .with_raw_response()
//!     .create(ProjectCreateParams::new("Discovery")?)
//!     .await?;
//! println!("{} {:?}", raw.status(), raw.request_id());
//! let project = raw.deserialize()?;
//! ```
//!
//! Requests go through an [`HttpExecutor`]. [`Client::new`] uses
//! [`ReqwestExecutor`]; [`Client::with_executor`] accepts any other.

pub mod client;
pub mod error;
pub mod options;
pub mod response;
pub mod services;
pub mod transport;

pub use client::Client;
pub use error::{Error, Result};
pub use options::ClientOptions;
pub use response::ApiResponse;
pub use transport::{HttpExecutor, HttpRequest, HttpResponse, ReqwestExecutor};

// Re-export the model crates so callers need a single dependency
pub use casedev_api;
pub use casedev_model;
