//! HTTP server initialization and runtime setup.
//!
//! Handles store selection, cache setup, and Axum server lifecycle.

use crate::application::services::{AuthService, EmployeeService};
use crate::config::{Config, mask_connection_string};
use crate::domain::repositories::EmployeeRepository;
use crate::infrastructure::cache::{EmployeeCache, InMemoryEmployeeCache, NullCache};
use crate::infrastructure::persistence::{InMemoryEmployeeRepository, PgEmployeeRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

/// Opens the PostgreSQL pool, retrying with exponential backoff.
///
/// # Errors
///
/// Returns the last connection error once `config.db_connect_retries` retries are
/// exhausted.
pub async fn connect_database(config: &Config, database_url: &str) -> Result<PgPool> {
    let strategy = ExponentialBackoff::from_millis(100)
        .max_delay(Duration::from_secs(5))
        .map(jitter)
        .take(config.db_connect_retries);

    let pool = Retry::spawn(strategy, || async {
        PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
            .idle_timeout(Duration::from_secs(config.db_idle_timeout))
            .max_lifetime(Duration::from_secs(config.db_max_lifetime))
            .connect(database_url)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Database connection attempt failed"))
    })
    .await
    .with_context(|| format!("Failed to connect to {}", mask_connection_string(database_url)))?;

    Ok(pool)
}

/// Builds the application state from configuration.
///
/// Selects the PostgreSQL store when a database is configured (running pending
/// migrations), otherwise the in-memory store, and the in-memory or no-op cache per
/// `CACHE_ENABLED`.
///
/// # Errors
///
/// Returns an error if the database is unreachable or migrations fail.
pub async fn build_state(config: &Config) -> Result<AppState> {
    let (repository, db): (Arc<dyn EmployeeRepository>, Option<Arc<PgPool>>) =
        match &config.database_url {
            Some(database_url) => {
                let pool = connect_database(config, database_url).await?;
                tracing::info!("Connected to database");

                sqlx::migrate!("./migrations")
                    .run(&pool)
                    .await
                    .context("Failed to migrate")?;

                let pool = Arc::new(pool);
                let repository: Arc<dyn EmployeeRepository> =
                    Arc::new(PgEmployeeRepository::new(pool.clone()));
                (repository, Some(pool))
            }
            None => {
                tracing::warn!("No database configured, employees are kept in memory");
                let repository: Arc<dyn EmployeeRepository> =
                    Arc::new(InMemoryEmployeeRepository::new());
                (repository, None)
            }
        };

    let cache: Arc<dyn EmployeeCache> = if config.cache_enabled {
        tracing::info!("Cache enabled (in-memory)");
        Arc::new(InMemoryEmployeeCache::new())
    } else {
        tracing::info!("Cache disabled (NullCache)");
        Arc::new(NullCache::new())
    };

    let employee_service = Arc::new(EmployeeService::new(repository, cache));
    let auth_service = Arc::new(AuthService::new(
        config.auth_username.clone(),
        &config.auth_password,
    ));

    Ok(AppState::new(employee_service, auth_service, db))
}

/// Runs the HTTP server with the given configuration until Ctrl-C.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config).await?;

    let app = app_router(
        state,
        config.rate_limit_per_second,
        config.rate_limit_burst,
    );

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
