//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, migrations, service wiring and the Axum server
//! lifecycle.

use crate::application::services::ShortenerService;
use crate::config::Config;
use crate::infrastructure::persistence::{MIGRATOR, SqliteUrlMappingRepository};
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::code_generator::RandomCodeGenerator;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Opens the store described by `config` and applies pending migrations.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or a migration fails.
pub async fn open_repository(config: &Config) -> Result<SqliteUrlMappingRepository> {
    let repository = SqliteUrlMappingRepository::connect(&config.storage)
        .await
        .context("Failed to open database")?;
    tracing::info!("Connected to database");

    MIGRATOR
        .run(repository.pool())
        .await
        .context("Failed to apply migrations")?;
    tracing::info!("Migrations applied");

    Ok(repository)
}

/// Builds the shortener service with the configured code length and attempt bound.
pub fn build_shortener(
    config: &Config,
    repository: SqliteUrlMappingRepository,
) -> ShortenerService<SqliteUrlMappingRepository> {
    ShortenerService::with_generator(
        Arc::new(repository),
        Arc::new(RandomCodeGenerator::new(config.code_length)),
        config.code_max_attempts,
    )
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool
/// - Apply migrations
/// - Shortener service
/// - Axum HTTP server with graceful shutdown on Ctrl-C
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = open_repository(&config).await?;
    let shortener = Arc::new(build_shortener(&config, repository));

    let state = AppState::new(shortener, config.base_url.clone());
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}
