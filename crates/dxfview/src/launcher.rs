//! Dev server launch sequence: bind, banner, browser, wait for interrupt.

use anyhow::{Context, Result};
use dxfview_server::{DevServer, ServerConfig};

use crate::banner;
use crate::config::LaunchOptions;

/// Tool name shown in the startup banner.
const TITLE: &str = "STEP to DXF Web Viewer - Development Server";

/// Run the launcher until the user interrupts it.
pub async fn run(options: LaunchOptions) -> Result<()> {
    if !options.dir.exists() {
        anyhow::bail!("Directory not found: {}", options.dir.display());
    }

    let config = ServerConfig {
        root: options.dir.clone(),
        host: options.host.clone(),
        port: options.port,
    };

    let server = DevServer::new(config).bind().await?;

    let server_url = format!("http://localhost:{}/", server.local_addr().port());
    let open_url = match &options.page {
        Some(page) => format!("{server_url}{page}"),
        None => server_url.clone(),
    };

    tracing::info!(
        "Serving {} at http://{}",
        options.dir.display(),
        server.local_addr()
    );

    println!("{}", banner::render(TITLE, &server_url, &open_url));

    // Best-effort: serving continues whether or not a browser opened
    if options.open {
        let _ = open::that(&open_url);
    }

    tokio::signal::ctrl_c()
        .await
        .context("Failed to wait for interrupt signal")?;

    server.stop().await?;
    println!("\nServer stopped.");

    Ok(())
}
