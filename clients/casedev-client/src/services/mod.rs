// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Per-resource service façades
//!
//! Each resource has a service returning decoded models and a
//! `...WithRawResponse` twin, reached through `with_raw_response()`, that
//! returns [`crate::ApiResponse`] instead.

pub mod compute;
pub mod llm;
pub mod memory;
pub mod payments;
pub mod projects;
pub mod vault;

pub use compute::*;
pub use llm::*;
pub use memory::*;
pub use payments::*;
pub use projects::*;
pub use vault::*;
