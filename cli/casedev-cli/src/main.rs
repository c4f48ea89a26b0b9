// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Casedev CLI - command-line access to the Casedev API

use anyhow::{Context, Result};
use casedev_client::{Client, ClientOptions};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::{ComputeCommand, LlmCommand, ProjectsCommand, VaultCommand};

#[derive(Parser)]
#[command(name = "casedev", version, about = "Command-line interface for the Casedev API")]
struct Cli {
    /// API base URL
    #[arg(long, global = true, env = "CASEDEV_BASE_URL")]
    base_url: Option<String>,

    /// API key
    #[arg(long, global = true, env = "CASEDEV_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Validate response bodies against their models
    #[arg(long, global = true)]
    validate: bool,

    /// Output as JSON instead of tables
    #[arg(short, long, global = true)]
    json: bool,

    /// Log requests to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute usage and environments
    Compute {
        #[command(subcommand)]
        command: ComputeCommand,
    },
    /// Manage projects
    Projects {
        #[command(subcommand)]
        command: ProjectsCommand,
    },
    /// Document vaults
    Vault {
        #[command(subcommand)]
        command: VaultCommand,
    },
    /// LLM gateway
    Llm {
        #[command(subcommand)]
        command: LlmCommand,
    },
}

impl Cli {
    fn build_client(&self) -> Result<Client> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .context("no API key: pass --api-key or set CASEDEV_API_KEY")?;

        let mut options = ClientOptions::new(api_key).response_validation(self.validate);
        if let Some(url) = &self.base_url {
            options = options
                .base_url(url)
                .with_context(|| format!("invalid base URL {}", url))?;
        }

        tracing::debug!(base_url = %options.get_base_url(), "using API endpoint");
        Client::new(options).context("failed to create HTTP client")
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("casedev=debug,casedev_client=debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let client = cli.build_client()?;
    match cli.command {
        Commands::Compute { command } => command.run(&client, cli.json).await,
        Commands::Projects { command } => command.run(&client, cli.json).await,
        Commands::Vault { command } => command.run(&client, cli.json).await,
        Commands::Llm { command } => command.run(&client, cli.json).await,
    }
}
