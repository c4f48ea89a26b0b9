// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! CLI command implementations

pub mod compute;
pub mod llm;
pub mod projects;
pub mod vault;

pub use compute::ComputeCommand;
pub use llm::LlmCommand;
pub use projects::ProjectsCommand;
pub use vault::VaultCommand;
