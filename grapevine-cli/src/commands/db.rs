//! Database maintenance commands: `migrate` and `seed`

use anyhow::{Context, Result};
use clap::Parser;

use grapevine_server::db::{self, create_pool, PostRepo};

use crate::config::GrapevineConfig;

#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (overrides config file)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

#[derive(Parser, Debug)]
pub struct SeedArgs {
    /// Database URL (overrides config file)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Skip seeding when posts already exist
    #[arg(long)]
    pub if_empty: bool,
}

async fn connect(config: &GrapevineConfig, flag: Option<String>) -> Result<PostRepo> {
    let database_url = config.database_url(flag).context(
        "DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or [server].database_url in ~/.grapevine/config.toml",
    )?;

    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;

    db::migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    Ok(PostRepo::new(pool))
}

/// Create the posts table
pub async fn run_migrate(args: MigrateArgs, config: &GrapevineConfig) -> Result<()> {
    connect(config, args.database_url).await?;
    println!("posts table ready");
    Ok(())
}

/// Insert the starter quotes
pub async fn run_seed(args: SeedArgs, config: &GrapevineConfig) -> Result<()> {
    let repo = connect(config, args.database_url).await?;
    let inserted = db::seed::run(&repo, args.if_empty)
        .await
        .context("Failed to seed posts")?;

    if inserted.is_empty() {
        println!("posts already present, nothing seeded");
    } else {
        println!("seeded {} posts", inserted.len());
    }
    Ok(())
}
