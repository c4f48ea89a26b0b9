// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! LLM gateway commands

use anyhow::{Context, Result};
use casedev_client::Client;
use clap::Subcommand;

use crate::output::json;
use crate::output::table::{create_table, opt_cell, print_table};

#[derive(Subcommand, Clone)]
pub enum LlmCommand {
    /// List available models
    Models,
}

impl LlmCommand {
    pub async fn run(self, client: &Client, use_json: bool) -> Result<()> {
        match self {
            Self::Models => models(client, use_json).await,
        }
    }
}

async fn models(client: &Client, use_json: bool) -> Result<()> {
    let models = client
        .llm()
        .models()
        .await
        .context("failed to list models")?;

    if use_json {
        return json::print_json(&models);
    }

    let mut table = create_table(&["ID", "OWNER", "CONTEXT"]);
    for model in models.data()? {
        table.add_row(vec![
            model.id()?,
            opt_cell(model.owned_by()?),
            opt_cell(model.context_window()?),
        ]);
    }
    print_table(table);
    Ok(())
}
