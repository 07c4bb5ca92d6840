//! dxfview CLI - development server launcher for the STEP to DXF web viewer.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod banner;
mod config;
mod launcher;

#[derive(Parser)]
#[command(name = "dxfview")]
#[command(about = "Development server for the STEP to DXF web viewer")]
#[command(version)]
pub struct Cli {
    /// Path to dxfview.toml config file
    #[arg(short, long, default_value = "dxfview.toml")]
    config: PathBuf,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory to serve
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Page to open in the browser, relative to the served directory
    #[arg(long)]
    page: Option<String>,

    /// Do not open browser
    #[arg(long)]
    no_open: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    let options = config::resolve(&cli)?;
    launcher::run(options).await
}
