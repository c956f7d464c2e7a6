//! # Gamma Server
//!
//! Host application of the back-office: composes every enabled domain package into a
//! manifest, wires the shared GraphQL client, and serves both over HTTP.
//!
//! ## Example
//! ```no_run
//! use gamma_server::Server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Server::builder().port(3080).build()?.run().await
//! }
//! ```

mod router;
mod state;

pub use crate::state::{AppState, AppStateInner};

use anyhow::{Context, Result};
use axum::Router;
use axum_server::Handle;
use gamma::domain::config::AppConfig;
use gamma::graphql::{FileTokenStore, GraphqlClient, init_client};
use gamma::stores::honorifics::{self, HonorificsStore};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tracing::{error, info};

/// File under `storage.data_dir` holding persisted client state.
pub const SESSION_FILE: &str = "session.json";

const SHUTDOWN_GRACE: Duration = Duration::from_secs(30);

/// A fluent builder for configuring and initializing the [`Server`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct ServerBuilder {
    cfg: AppConfig,
    honorifics: Option<&'static HonorificsStore>,
}

impl ServerBuilder {
    pub fn config(mut self, cfg: AppConfig) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.cfg.server.port = port;
        self
    }

    /// Serves this store instead of the process-wide one.
    pub fn honorifics(mut self, store: &'static HonorificsStore) -> Self {
        self.honorifics = Some(store);
        self
    }

    /// Consumes the builder and prepares the server.
    ///
    /// 1. Initializes the shared GraphQL client from `graphql.*`, persisting the auth
    ///    token under `storage.data_dir`. A client that already exists is kept.
    /// 2. Composes the enabled domain packages using `registry.merge_policy`.
    ///
    /// # Errors
    /// Returns an error if two domain packages register colliding routes under the
    /// `strict` merge policy.
    pub fn build(self) -> Result<Server> {
        let address = SocketAddr::new(self.cfg.server.address, self.cfg.server.port);
        info!(address = %address, "Initializing server");

        let graphql = self.cfg.graphql.clone();
        let session = self.cfg.storage.data_dir.join(SESSION_FILE);
        let client = init_client(move || {
            let tokens = FileTokenStore::with_key(session, graphql.token_key.clone());
            GraphqlClient::builder().config(&graphql).token_store(Arc::new(tokens))
        });

        let manifest = gamma::bootstrap(&self.cfg).context("Domain composition failed")?;

        let state = AppState::new(AppStateInner {
            config: self.cfg,
            manifest,
            client,
            honorifics: self.honorifics.unwrap_or_else(honorifics::global),
        });

        Ok(Server { state })
    }
}

/// A fully initialized server instance ready to run.
#[must_use = "call .run().await to start the server"]
#[derive(Debug)]
pub struct Server {
    state: AppState,
}

impl Server {
    pub fn builder() -> ServerBuilder {
        ServerBuilder::default()
    }

    /// The HTTP routes, without binding a socket.
    pub fn router(&self) -> Router {
        router::init(self.state.clone())
    }

    /// Binds the configured address and serves until Ctrl+C or SIGTERM.
    ///
    /// # Errors
    /// Returns an error if the address cannot be bound.
    pub async fn run(self) -> Result<()> {
        let address = SocketAddr::new(self.state.config.server.address, self.state.config.server.port);
        let app = self.router();

        let handle = Handle::<SocketAddr>::new();
        let shutdown_handle = handle.clone();

        tokio::spawn(async move {
            if let Err(e) = shutdown_signal().await {
                error!("Error while waiting for shutdown signal: {e}");
                return;
            }
            info!("Shutdown signal received, starting graceful shutdown...");
            shutdown_handle.graceful_shutdown(Some(SHUTDOWN_GRACE));
        });

        info!(
            address = %address,
            graphql = %self.state.client.endpoint(),
            routes = self.state.manifest.routes.len(),
            "Starting HTTP server on http://{address}"
        );

        axum_server::bind(address)
            .handle(handle)
            .serve(app.into_make_service())
            .await
            .context("HTTP server failed")?;

        info!("Server shutdown complete");
        Ok(())
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
async fn shutdown_signal() -> Result<()> {
    let ctrl_c = async { signal::ctrl_c().await.context("Failed to install Ctrl+C handler") };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("Failed to install SIGTERM handler")?
            .recv()
            .await;
        Ok::<_, anyhow::Error>(())
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<()>>();

    tokio::select! {
        res = ctrl_c => res,
        res = terminate => res,
    }
}
