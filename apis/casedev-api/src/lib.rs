// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Casedev API types
//!
//! Request parameters and response models for the Casedev REST API, grouped
//! by resource: compute, memory, projects, vault, LLM gateway and payments.
//!
//! Response models wrap a [`casedev_model::RawMap`], so fields the SDK does
//! not know about are kept and re-serialized. Params types split their
//! fields into header, query and body namespaces through
//! [`casedev_model::ParamParts`]; path parameters are plain `Option<String>`
//! fields checked when the request is built.

pub mod types;
pub use types::*;

pub use casedev_model::{ApiEnum, Model, ModelError, Params, Union, Validate};
