//! grapevine CLI - post a quote, hear it through the grapevine
//!
//! This is the main entry point for the `grapevine` command-line tool:
//! - Run the posts API server (`serve`, with `server` feature)
//! - Create the schema and insert starter quotes (`migrate`, `seed`)
//! - One-shot post commands against a running server (`posts`)
//! - Terminal client for browsing and editing posts (`ui`)

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

mod client;
mod commands;
mod config;
mod tracing_setup;
mod tui;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "grapevine",
    author,
    version,
    about = "Post a quote and hear what everyone said",
    long_about = "Run the grapevine posts API, manage its database, and read or write \
                  posts from the command line or the terminal UI."
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Export traces via OpenTelemetry (requires the `telemetry` feature)
    #[arg(long, global = true)]
    otel: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run HTTP API server
    #[cfg(feature = "server")]
    Serve(commands::serve::ServeArgs),
    /// Create the posts table
    #[cfg(feature = "server")]
    Migrate(commands::db::MigrateArgs),
    /// Insert the starter quotes
    #[cfg(feature = "server")]
    Seed(commands::db::SeedArgs),
    /// List, show, create, update or delete posts
    Posts(commands::posts::PostsArgs),
    /// Open the terminal UI
    Ui(commands::ui::UiArgs),
    /// Inspect grapevine configuration (path, show)
    Config(config::ConfigArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)] // PowerShell is a proper noun, not a suffix
enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[tokio::main]
async fn main() -> Result<()> {
    config::load_env();
    let cli = Cli::parse();

    // The terminal UI owns the screen, so its log goes to a file
    let log_file = match cli.command {
        Commands::Ui(_) => Some(config::ui_log_path()?),
        _ => None,
    };

    let tracing_config = TracingConfig {
        debug: cli.debug,
        otel: cli.otel,
        log_file,
    };
    if let Err(e) = tracing_setup::init(&tracing_config) {
        eprintln!("warning: failed to initialize logging: {e}");
    }

    let settings = config::GrapevineConfig::load()?;

    let result = match cli.command {
        #[cfg(feature = "server")]
        Commands::Serve(args) => commands::run_serve(args, &settings).await,
        #[cfg(feature = "server")]
        Commands::Migrate(args) => commands::run_migrate(args, &settings).await,
        #[cfg(feature = "server")]
        Commands::Seed(args) => commands::run_seed(args, &settings).await,
        Commands::Posts(args) => commands::run_posts(args, &settings).await,
        Commands::Ui(args) => commands::run_ui(args, &settings).await,
        Commands::Config(args) => config::run_config(args, &settings),
        Commands::Completions(args) => run_completions(args),
    };

    tracing_setup::shutdown_otel();
    result
}

fn run_completions(args: CompletionsArgs) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell as CompletionShell};
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    let shell = match args.shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    };

    generate(shell, &mut cmd, bin_name, &mut io::stdout());

    Ok(())
}
