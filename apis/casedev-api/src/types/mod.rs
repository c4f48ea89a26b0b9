// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Casedev API type definitions

pub mod common;
pub mod compute;
pub mod llm;
pub mod memory;
pub mod payments;
pub mod projects;
pub mod vault;

pub use common::*;
pub use compute::*;
pub use llm::*;
pub use memory::*;
pub use payments::*;
pub use projects::*;
pub use vault::*;
