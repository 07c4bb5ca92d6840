//! Static file server implementation.

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower_http::services::ServeDir;

/// Configuration for the development server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Directory whose files are exposed over HTTP
    pub root: PathBuf,

    /// Host to bind to
    pub host: String,

    /// Port to listen on (0 picks a free port)
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Server root not found: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("Invalid listen address {0}: {1}")]
    InvalidAddr(String, String),

    #[error("Failed to bind to {0}: {1}")]
    Bind(SocketAddr, String),

    #[error("Serve loop failed: {0}")]
    Serve(String),
}

/// Development server.
pub struct DevServer {
    config: ServerConfig,
}

impl DevServer {
    /// Create a new development server.
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Bind the listener and start serving in the background.
    ///
    /// Request paths resolve against the canonicalized root, so serving does
    /// not depend on the process working directory. The returned handle
    /// reports the actual bound address and stops the server on demand.
    pub async fn bind(self) -> Result<RunningServer, ServerError> {
        let root = self
            .config
            .root
            .canonicalize()
            .map_err(|_| ServerError::RootNotFound(self.config.root.clone()))?;

        let requested = format!("{}:{}", self.config.host, self.config.port);
        let addr: SocketAddr = requested
            .parse()
            .map_err(|e: std::net::AddrParseError| {
                ServerError::InvalidAddr(requested.clone(), e.to_string())
            })?;

        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::Bind(addr, e.to_string()))?;

        let addr = listener
            .local_addr()
            .map_err(|e| ServerError::Bind(addr, e.to_string()))?;

        // Directory index fallback, MIME inference and not-found responses
        // are ServeDir's stock behavior.
        let app = Router::new().fallback_service(ServeDir::new(&root));

        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        tracing::info!("Starting dev server at http://{}", addr);

        let task = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
        });

        Ok(RunningServer {
            addr,
            shutdown: shutdown_tx,
            task,
        })
    }
}

/// Handle to a running server.
///
/// The listening socket is held by a background task and released once
/// [`RunningServer::stop`] completes.
pub struct RunningServer {
    addr: SocketAddr,
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<std::io::Result<()>>,
}

impl RunningServer {
    /// The address the listener is actually bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Stop serving and wait for the listening socket to be released.
    pub async fn stop(self) -> Result<(), ServerError> {
        let _ = self.shutdown.send(());

        match self.task.await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => Err(ServerError::Serve(e.to_string())),
            Err(e) => Err(ServerError::Serve(e.to_string())),
        }
    }
}
