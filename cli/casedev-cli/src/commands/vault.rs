// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Vault commands

use anyhow::{Context, Result};
use casedev_api::{SearchMethod, VaultSearchParams};
use casedev_client::Client;
use casedev_model::ApiEnum;
use clap::Subcommand;
use serde_json::Value;

use crate::output::json;
use crate::output::table::{create_table, opt_cell, print_table};

#[derive(Subcommand, Clone)]
pub enum VaultCommand {
    /// List vaults
    #[command(alias = "ls")]
    List,
    /// Search one vault
    Search {
        /// Vault ID
        id: String,
        /// Search query
        query: String,
        /// Number of chunks to return
        #[arg(long)]
        top_k: Option<i64>,
        /// Retrieval method (vector, keyword or hybrid)
        #[arg(long)]
        method: Option<String>,
    },
}

impl VaultCommand {
    pub async fn run(self, client: &Client, use_json: bool) -> Result<()> {
        match self {
            Self::List => list(client, use_json).await,
            Self::Search {
                id,
                query,
                top_k,
                method,
            } => search(client, id, query, top_k, method).await,
        }
    }
}

async fn list(client: &Client, use_json: bool) -> Result<()> {
    let list = client
        .vault()
        .list()
        .await
        .context("failed to list vaults")?;

    if use_json {
        return json::print_json(&list);
    }

    let mut table = create_table(&["ID", "NAME", "DOCUMENTS"]);
    for vault in list.vaults()? {
        table.add_row(vec![
            vault.id()?,
            vault.name()?,
            opt_cell(vault.document_count()?),
        ]);
    }
    print_table(table);
    Ok(())
}

async fn search(
    client: &Client,
    id: String,
    query: String,
    top_k: Option<i64>,
    method: Option<String>,
) -> Result<()> {
    let mut params = VaultSearchParams::new(id, query)?;
    let method = method.map(|m| ApiEnum::<SearchMethod>::from_raw(Value::String(m)));
    params.set_top_k(top_k)?.set_method(method)?;

    let results = client
        .vault()
        .search(params)
        .await
        .context("vault search failed")?;
    json::print_json(&results)
}
