//! HTTP server initialization and runtime setup.
//!
//! Handles backend selection, schema initialization, metrics recorder setup,
//! and the Axum server lifecycle including graceful shutdown.

use crate::config::{Config, StorageConfig};
use crate::domain::repositories::UrlRepository;
use crate::infrastructure::persistence::{PgUrlRepository, SqliteUrlRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use metrics_exporter_prometheus::PrometheusBuilder;
use sqlx::postgres::PgPoolOptions;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tokio::sync::watch;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The configured storage backend (PostgreSQL or embedded SQLite)
/// - The `url` table, if absent
/// - The Prometheus metrics recorder
/// - The Axum HTTP server with signal-driven graceful shutdown
///
/// On SIGINT/SIGTERM the listener stops accepting and in-flight requests get
/// `config.shutdown_grace` seconds to finish; the database pool is released
/// only after the server has stopped.
///
/// # Errors
///
/// Returns an error if the backend connection, schema initialization, or
/// server bind fails, or on a server runtime error.
pub async fn run(config: Config) -> Result<()> {
    let repository = connect_storage(&config).await?;

    let metrics = PrometheusBuilder::new().install_recorder()?;

    let state = AppState::new(repository, metrics);
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    // One signal watcher fans out to the graceful-shutdown trigger and the
    // grace-period watchdog.
    let (shutdown_tx, shutdown_rx) = watch::channel(());
    tokio::spawn(async move {
        shutdown_signal().await;
        let _ = shutdown_tx.send(());
    });

    let mut server_rx = shutdown_rx.clone();
    let server = axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(async move {
            let _ = server_rx.changed().await;
        });

    let mut grace_rx = shutdown_rx;
    let grace = Duration::from_secs(config.shutdown_grace);
    tokio::select! {
        res = server => res?,
        _ = async {
            let _ = grace_rx.changed().await;
            tokio::time::sleep(grace).await;
        } => {
            tracing::warn!(
                grace_seconds = config.shutdown_grace,
                "shutdown grace period expired, abandoning in-flight requests"
            );
        }
    }

    tracing::info!("Server stopped");
    Ok(())
}

/// Connects the backend selected by the configuration and ensures its schema.
async fn connect_storage(config: &Config) -> Result<Arc<dyn UrlRepository>> {
    match &config.storage {
        StorageConfig::Postgres { url } => {
            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .connect(url)
                .await?;
            let repository = PgUrlRepository::new(Arc::new(pool));
            repository.init_schema().await?;
            tracing::info!("Connected to PostgreSQL");
            Ok(Arc::new(repository))
        }
        StorageConfig::Sqlite { path } => {
            let options = SqliteConnectOptions::new()
                .filename(path)
                .create_if_missing(true);
            let pool = SqlitePoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .connect_with(options)
                .await?;
            let repository = SqliteUrlRepository::new(Arc::new(pool));
            repository.init_schema().await?;
            tracing::info!(%path, "Opened SQLite database");
            Ok(Arc::new(repository))
        }
    }
}

/// Completes on the first SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
