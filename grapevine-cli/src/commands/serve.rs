//! HTTP server command
//!
//! Runs the posts API against Postgres, or against the in-memory store with
//! `--memory`.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use grapevine_server::db::{self, create_pool, PostRepo};
use grapevine_server::http::{run_server, ServerConfig};
use grapevine_server::{MemoryStore, PostStore};

use crate::config::GrapevineConfig;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:3000)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (overrides config file, ignored with --memory)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Keep posts in memory instead of Postgres (lost on exit)
    #[arg(long)]
    pub memory: bool,

    /// Insert the starter quotes if the store is empty
    #[arg(long)]
    pub seed: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, config: &GrapevineConfig) -> Result<()> {
    let store: Arc<dyn PostStore> = if args.memory {
        Arc::new(MemoryStore::new())
    } else {
        let database_url = config.database_url(args.database_url).context(
            "DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or [server].database_url in ~/.grapevine/config.toml (or use --memory)",
        )?;

        let pool = create_pool(&database_url)
            .await
            .context("Failed to create database pool")?;

        db::migrations::run(&pool)
            .await
            .context("Failed to run migrations")?;

        Arc::new(PostRepo::new(pool))
    };

    if args.seed {
        db::seed::run(store.as_ref(), true)
            .await
            .context("Failed to seed posts")?;
    }

    let server_config = ServerConfig {
        bind_addr: config.bind(args.bind),
        cors_permissive: config.cors_permissive(args.cors_permissive),
    };

    tracing::info!("Starting grapevine server on {}", server_config.bind_addr);

    // Blocks until shutdown
    run_server(store, server_config)
        .await
        .context("Server error")?;

    Ok(())
}
