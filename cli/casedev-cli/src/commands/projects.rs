// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Project commands

use anyhow::{Context, Result};
use casedev_api::{
    ProjectCreateParams, ProjectDeleteParams, ProjectListParams, ProjectRetrieveParams,
    ProjectStatus,
};
use casedev_client::Client;
use casedev_model::ApiEnum;
use clap::{Args, Subcommand};
use serde_json::Value;

use crate::output::json;
use crate::output::table::{create_table, enum_cell, opt_cell, print_table};

#[derive(Subcommand, Clone)]
pub enum ProjectsCommand {
    /// List projects
    #[command(alias = "ls")]
    List(ProjectListArgs),
    /// Get one project
    Get {
        /// Project ID
        id: String,
    },
    /// Create a project
    Create {
        /// Project name
        name: String,
        /// Free-form description
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a project
    #[command(alias = "rm")]
    Delete {
        /// Project ID
        id: String,
    },
}

#[derive(Args, Clone)]
pub struct ProjectListArgs {
    /// Only projects in this state (e.g. active, archived)
    #[arg(long)]
    pub status: Option<String>,
    /// Maximum number of projects to return
    #[arg(long)]
    pub limit: Option<i64>,
}

impl ProjectsCommand {
    pub async fn run(self, client: &Client, use_json: bool) -> Result<()> {
        match self {
            Self::List(args) => list(client, args, use_json).await,
            Self::Get { id } => get(client, id).await,
            Self::Create { name, description } => create(client, name, description).await,
            Self::Delete { id } => delete(client, id).await,
        }
    }
}

async fn list(client: &Client, args: ProjectListArgs, use_json: bool) -> Result<()> {
    let mut params = ProjectListParams::new();
    // Passed through verbatim so states newer than this CLI still filter
    let status = args
        .status
        .map(|s| ApiEnum::<ProjectStatus>::from_raw(Value::String(s)));
    params.set_status(status)?.set_limit(args.limit)?;

    let list = client
        .projects()
        .list(params)
        .await
        .context("failed to list projects")?;

    if use_json {
        return json::print_json(&list);
    }

    let mut table = create_table(&["ID", "NAME", "STATUS", "CREATED"]);
    for project in list.projects()? {
        table.add_row(vec![
            project.id()?,
            project.name()?,
            enum_cell(&project.status()?),
            opt_cell(project.created_at()?),
        ]);
    }
    print_table(table);
    Ok(())
}

async fn get(client: &Client, id: String) -> Result<()> {
    let project = client
        .projects()
        .retrieve(ProjectRetrieveParams::new(&id))
        .await
        .with_context(|| format!("failed to get project {}", id))?;
    json::print_json(&project)
}

async fn create(client: &Client, name: String, description: Option<String>) -> Result<()> {
    let mut params = ProjectCreateParams::new(name)?;
    if description.is_some() {
        params.set_description(description)?;
    }

    let project = client
        .projects()
        .create(params)
        .await
        .context("failed to create project")?;
    json::print_json(&project)
}

async fn delete(client: &Client, id: String) -> Result<()> {
    let resp = client
        .projects()
        .delete(ProjectDeleteParams::new(&id))
        .await
        .with_context(|| format!("failed to delete project {}", id))?;
    json::print_json(&resp)
}
