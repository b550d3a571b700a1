//! Configuration for the grapevine CLI
//!
//! Values come from, in priority order: command-line flags (and their env
//! fallbacks), `~/.grapevine/config.toml`, then built-in defaults. `.env`
//! files are loaded from the working directory and from `~/.grapevine/.env`.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

/// Endpoint used by `posts` and `ui` when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:3000";

/// Default bind address for `serve`
pub const DEFAULT_BIND: ([u8; 4], u16) = ([127, 0, 0, 1], 3000);

/// Contents of `~/.grapevine/config.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrapevineConfig {
    pub server: ServerSection,
    pub client: ClientSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bind: Option<SocketAddr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_url: Option<String>,
    pub cors_permissive: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

/// `~/.grapevine`
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".grapevine"))
}

/// `~/.grapevine/config.toml`
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// `~/.grapevine/ui.log`, creating the directory if needed
pub fn ui_log_path() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    Ok(dir.join("ui.log"))
}

/// Load `.env` files. Existing environment variables always win.
pub fn load_env() {
    dotenvy::dotenv().ok();

    if let Ok(dir) = config_dir() {
        let env_file = dir.join(".env");
        if env_file.exists() {
            dotenvy::from_path(&env_file).ok();
        }
    }
}

impl GrapevineConfig {
    /// Load from `~/.grapevine/config.toml`; a missing file yields defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn bind(&self, flag: Option<SocketAddr>) -> SocketAddr {
        flag.or(self.server.bind)
            .unwrap_or_else(|| SocketAddr::from(DEFAULT_BIND))
    }

    pub fn database_url(&self, flag: Option<String>) -> Option<String> {
        flag.or_else(|| self.server.database_url.clone())
    }

    pub fn cors_permissive(&self, flag: bool) -> bool {
        flag || self.server.cors_permissive
    }

    pub fn endpoint(&self, flag: Option<String>) -> String {
        let endpoint = flag
            .or_else(|| self.client.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        endpoint.trim_end_matches('/').to_string()
    }

    /// Every setting after flags/env and defaults are applied
    pub fn resolved(&self) -> Self {
        Self {
            server: ServerSection {
                bind: Some(self.bind(None)),
                database_url: self.database_url(std::env::var("DATABASE_URL").ok()),
                cors_permissive: self.server.cors_permissive,
            },
            client: ClientSection {
                endpoint: Some(self.endpoint(std::env::var("GRAPEVINE_ENDPOINT").ok())),
            },
        }
    }
}

// ============================================================================
// `grapevine config`
// ============================================================================

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show config file path
    Path,
    /// Show the effective configuration as TOML
    Show,
}

pub fn run_config(args: ConfigArgs, config: &GrapevineConfig) -> Result<()> {
    match args.command {
        ConfigCommands::Path => {
            println!("{}", config_path()?.display());
        }
        ConfigCommands::Show => {
            let toml_str = toml::to_string_pretty(&config.resolved())
                .context("Failed to serialize config to TOML")?;
            println!("{}", toml_str);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GrapevineConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, GrapevineConfig::default());
    }

    #[test]
    fn parses_both_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[server]
bind = "0.0.0.0:8080"
database_url = "postgres://localhost/grapevine_development"
cors_permissive = true

[client]
endpoint = "http://quotes.local:8080/"
"#,
        )
        .unwrap();

        let config = GrapevineConfig::load_from(&path).unwrap();
        assert_eq!(config.bind(None).port(), 8080);
        assert_eq!(
            config.database_url(None).as_deref(),
            Some("postgres://localhost/grapevine_development")
        );
        assert!(config.cors_permissive(false));
        assert_eq!(config.endpoint(None), "http://quotes.local:8080");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[client]\nendpoint = \"http://box:3000\"\n").unwrap();

        let config = GrapevineConfig::load_from(&path).unwrap();
        assert_eq!(config.bind(None), SocketAddr::from(DEFAULT_BIND));
        assert!(config.database_url(None).is_none());
        assert!(!config.cors_permissive(false));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server\nbind = ").unwrap();

        assert!(GrapevineConfig::load_from(&path).is_err());
    }

    #[test]
    fn flags_beat_file_beat_defaults() {
        let mut config = GrapevineConfig::default();
        assert_eq!(config.endpoint(None), DEFAULT_ENDPOINT);

        config.client.endpoint = Some("http://from-file:3000".to_string());
        assert_eq!(config.endpoint(None), "http://from-file:3000");
        assert_eq!(
            config.endpoint(Some("http://from-flag:3000".to_string())),
            "http://from-flag:3000"
        );

        config.server.bind = Some("127.0.0.1:4000".parse().unwrap());
        let flag: SocketAddr = "127.0.0.1:5000".parse().unwrap();
        assert_eq!(config.bind(Some(flag)), flag);
    }

    #[test]
    fn resolved_config_serializes() {
        let config = GrapevineConfig::default().resolved();
        let rendered = toml::to_string_pretty(&config).unwrap();
        assert!(rendered.contains("[server]"));
        assert!(rendered.contains("[client]"));
    }
}
