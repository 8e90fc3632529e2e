//! Database connection and pool management
//!
//! PostgreSQL pool creation, embedded migrations, the readiness probe query
//! and helpers for classifying database errors.

use crate::config::DatabaseConfig;
use anyhow::Result;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

/// Postgres SQLSTATE for `unique_violation`
const UNIQUE_VIOLATION: &str = "23505";
/// Postgres SQLSTATE for `foreign_key_violation`
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Pool tuning
pub struct DbConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: 10,
            min_connections: 1,
            acquire_timeout_secs: 10,
            idle_timeout_secs: 600,      // 10 minutes
            max_lifetime_secs: 1800,     // 30 minutes
        }
    }
}

impl From<&DatabaseConfig> for DbConfig {
    fn from(config: &DatabaseConfig) -> Self {
        Self {
            url: config.url.clone(),
            max_connections: config.max_connections,
            ..Default::default()
        }
    }
}

/// Create the connection pool from application config
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool> {
    create_pool_with_config(&DbConfig::from(config)).await
}

/// Create a PostgreSQL connection pool with custom configuration
pub async fn create_pool_with_config(config: &DbConfig) -> Result<PgPool> {
    let connect_options = PgConnectOptions::from_str(&config.url)?
        .application_name("lifestyle-hub");

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .test_before_acquire(true)
        .connect_with(connect_options)
        .await?;

    info!(
        max = config.max_connections,
        min = config.min_connections,
        "Database pool created"
    );

    Ok(pool)
}

/// Run embedded migrations (users, workouts, recipes)
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database migrations completed successfully");
    Ok(())
}

/// Check database health
pub async fn health_check(pool: &PgPool) -> Result<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map(|_| ())
        .map_err(|e| {
            warn!("Database health check failed: {}", e);
            e.into()
        })
}

fn has_sqlstate(err: &sqlx::Error, code: &str) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some(code),
        _ => false,
    }
}

/// True if the error is a unique-constraint violation
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    has_sqlstate(err, UNIQUE_VIOLATION)
}

/// Same check through an `anyhow` chain
pub fn is_unique_violation_any(err: &anyhow::Error) -> bool {
    err.downcast_ref::<sqlx::Error>()
        .map(is_unique_violation)
        .unwrap_or(false)
}

/// True if the error is a foreign-key violation, e.g. an insert for a
/// user that no longer exists
pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    has_sqlstate(err, FOREIGN_KEY_VIOLATION)
}

/// Same check through an `anyhow` chain
pub fn is_foreign_key_violation_any(err: &anyhow::Error) -> bool {
    err.downcast_ref::<sqlx::Error>()
        .map(is_foreign_key_violation)
        .unwrap_or(false)
}
