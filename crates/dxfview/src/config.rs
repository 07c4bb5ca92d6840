//! Launcher configuration: dxfview.toml plus command-line overrides.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;

use crate::Cli;

/// Configuration file structure (dxfview.toml).
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    server: ServerSection,
}

#[derive(Debug, Deserialize)]
struct ServerSection {
    #[serde(default = "default_dir")]
    dir: String,
    #[serde(default = "default_port")]
    port: u16,
    #[serde(default = "default_host")]
    host: String,
    /// Page opened in the browser on startup
    page: Option<String>,
    #[serde(default = "default_open")]
    open: bool,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            port: default_port(),
            host: default_host(),
            page: None,
            open: default_open(),
        }
    }
}

fn default_dir() -> String {
    ".".to_string()
}
fn default_port() -> u16 {
    8000
}
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_open() -> bool {
    true
}

/// Fully resolved launch options.
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    pub dir: PathBuf,
    pub port: u16,
    pub host: String,
    pub page: Option<String>,
    pub open: bool,
}

/// Load configuration from dxfview.toml if it exists.
/// Returns an error if the config file exists but is malformed.
fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

/// Resolve launch options: CLI flag > config file > built-in default.
pub fn resolve(cli: &Cli) -> Result<LaunchOptions> {
    let file = load_config(&cli.config)?;

    Ok(LaunchOptions {
        dir: cli
            .dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(&file.server.dir)),
        port: cli.port.unwrap_or(file.server.port),
        host: file.server.host,
        page: cli.page.clone().or(file.server.page),
        open: !cli.no_open && file.server.open,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("dxfview").chain(args.iter().copied()))
    }

    #[test]
    fn defaults_when_config_file_is_absent() {
        let temp = tempfile::tempdir().unwrap();
        let config_path = temp.path().join("dxfview.toml");

        let cli = cli(&["--config", config_path.to_str().unwrap()]);
        let options = resolve(&cli).unwrap();

        assert_eq!(options.port, 8000);
        assert_eq!(options.host, "0.0.0.0");
        assert_eq!(options.dir, PathBuf::from("."));
        assert_eq!(options.page, None);
        assert!(options.open);
    }

    #[test]
    fn reads_values_from_config_file() {
        let temp = tempfile::tempdir().unwrap();
        let config_path = temp.path().join("dxfview.toml");
        fs::write(
            &config_path,
            r#"
[server]
dir = "viewer"
port = 9000
page = "index-mvp.html"
open = false
"#,
        )
        .unwrap();

        let cli = cli(&["--config", config_path.to_str().unwrap()]);
        let options = resolve(&cli).unwrap();

        assert_eq!(options.dir, PathBuf::from("viewer"));
        assert_eq!(options.port, 9000);
        assert_eq!(options.page.as_deref(), Some("index-mvp.html"));
        assert!(!options.open);
    }

    #[test]
    fn cli_flags_override_config_file() {
        let temp = tempfile::tempdir().unwrap();
        let config_path = temp.path().join("dxfview.toml");
        fs::write(
            &config_path,
            r#"
[server]
port = 9000
page = "index-mvp.html"
"#,
        )
        .unwrap();

        let cli = cli(&[
            "--config",
            config_path.to_str().unwrap(),
            "--port",
            "4321",
            "--page",
            "index.html",
            "--no-open",
        ]);
        let options = resolve(&cli).unwrap();

        assert_eq!(options.port, 4321);
        assert_eq!(options.page.as_deref(), Some("index.html"));
        assert!(!options.open);
    }

    #[test]
    fn malformed_config_file_is_an_error() {
        let temp = tempfile::tempdir().unwrap();
        let config_path = temp.path().join("dxfview.toml");
        fs::write(&config_path, "[server\nport = ").unwrap();

        let cli = cli(&["--config", config_path.to_str().unwrap()]);

        assert!(resolve(&cli).is_err());
    }
}
