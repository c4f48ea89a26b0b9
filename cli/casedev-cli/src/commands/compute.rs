// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Compute commands

use anyhow::{Context, Result};
use casedev_api::ComputeUsageParams;
use casedev_client::Client;
use clap::Subcommand;

use crate::output::json;
use crate::output::table::{create_table, enum_cell, opt_cell, print_table};

#[derive(Subcommand, Clone)]
pub enum ComputeCommand {
    /// Show usage and cost for a month
    Usage {
        /// Month number (1-12)
        #[arg(long)]
        month: Option<i64>,
        /// Four-digit year
        #[arg(long)]
        year: Option<i64>,
    },
    /// List compute environments
    #[command(alias = "envs")]
    Environments,
}

impl ComputeCommand {
    pub async fn run(self, client: &Client, use_json: bool) -> Result<()> {
        match self {
            Self::Usage { month, year } => usage(client, month, year).await,
            Self::Environments => environments(client, use_json).await,
        }
    }
}

async fn usage(client: &Client, month: Option<i64>, year: Option<i64>) -> Result<()> {
    let mut params = ComputeUsageParams::new();
    params.set_month(month)?.set_year(year)?;

    let usage = client
        .compute()
        .usage(params)
        .await
        .context("failed to fetch compute usage")?;
    json::print_json(&usage)
}

async fn environments(client: &Client, use_json: bool) -> Result<()> {
    let list = client
        .compute()
        .environments()
        .list()
        .await
        .context("failed to list environments")?;

    if use_json {
        return json::print_json(&list);
    }

    let mut table = create_table(&["NAME", "STATUS", "DEFAULT", "DOMAIN"]);
    for env in list.environments()? {
        table.add_row(vec![
            env.name()?,
            enum_cell(&env.status()?),
            opt_cell(env.is_default()?),
            opt_cell(env.domain()?),
        ]);
    }
    print_table(table);
    Ok(())
}
