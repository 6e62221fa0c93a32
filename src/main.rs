// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use clap::Parser;
use kube::Client;
use tracing::info;

use extract_composition::cli::Cli;
use extract_composition::config::Config;
use extract_composition::extract::Extractor;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    // Clap rejects a missing composition name here, before anything is
    // written to disk
    let args = Cli::parse();

    let config = Config::from_env()?;

    // Client construction failure (no kubeconfig, unreachable server)
    // is fatal before any filesystem side effect
    let client = Client::try_default()
        .await
        .context("Failed to build a Kubernetes client from the environment")?;
    info!("Connected to Kubernetes cluster");

    let extractor = Extractor::new(client, config);
    let summary = extractor.run(&args).await?;
    summary.print();

    Ok(())
}
