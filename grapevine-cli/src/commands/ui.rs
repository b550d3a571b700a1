//! Terminal UI command

use anyhow::{Context, Result};
use clap::Parser;

use crate::client::PostsClient;
use crate::config::GrapevineConfig;
use crate::tui;

#[derive(Parser, Debug)]
pub struct UiArgs {
    /// API endpoint (default: http://127.0.0.1:3000)
    #[arg(long, env = "GRAPEVINE_ENDPOINT")]
    pub endpoint: Option<String>,
}

pub async fn run_ui(args: UiArgs, config: &GrapevineConfig) -> Result<()> {
    let client =
        PostsClient::new(config.endpoint(args.endpoint)).context("Failed to build HTTP client")?;
    tracing::info!(endpoint = client.endpoint(), "starting terminal UI");

    tui::run(&client).await
}
