//! studyplan CLI application
//!
//! Command-line interface for the studyplan generator and tracker.

mod args;
mod cli;
mod renderer;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use studyplan_core::{GenerationConfig, HttpGenerationClient, PlannerBuilder};
use Commands::*;

/// Environment variable holding the optional bearer token for the
/// generation service.
const API_TOKEN_ENV: &str = "STUDYPLAN_API_TOKEN";

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        store_file,
        no_color,
        endpoint,
        model,
        timeout_secs,
        command,
    } = Args::parse();

    let client = HttpGenerationClient::from_config(GenerationConfig {
        base_url: endpoint,
        model,
        api_token: std::env::var(API_TOKEN_ENV).ok(),
        timeout: Duration::from_secs(timeout_secs),
    })
    .context("Failed to initialize generation client")?;

    let planner = PlannerBuilder::new()
        .with_store_path(store_file)
        .with_client(Arc::new(client))
        .build()
        .await
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("studyplan started");

    let cli = Cli::new(planner, renderer);
    match command {
        Some(Generate(generate_args)) => cli.generate(generate_args).await,
        Some(Check(toggle_args)) => cli.toggle(toggle_args, true).await,
        Some(Uncheck(toggle_args)) => cli.toggle(toggle_args, false).await,
        Some(Save) => cli.save().await,
        Some(Show) | None => cli.show(),
    }
}
