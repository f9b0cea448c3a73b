//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. TLS is required unless
//! the configuration relaxes it.

use std::str::FromStr;
use std::time::Duration;

use pms_core::{DatabaseConfig, SslMode};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;

/// Pool settings resolved from configuration.
#[derive(Debug, Clone)]
pub struct PoolSettings {
    pub database_url: String,
    pub ssl_mode: SslMode,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl PoolSettings {
    pub fn from_config(database_url: &str, config: &DatabaseConfig) -> Self {
        Self {
            database_url: database_url.to_owned(),
            ssl_mode: config.ssl_mode,
            max_connections: config.max_connections,
            acquire_timeout: Duration::from_secs(config.acquire_timeout_secs),
        }
    }

    /// Parse the URL and force the configured TLS mode over any `sslmode` in it.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        let options = PgConnectOptions::from_str(&self.database_url)?;
        Ok(options.ssl_mode(pg_ssl_mode(self.ssl_mode)))
    }

    fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.acquire_timeout)
    }
}

fn pg_ssl_mode(mode: SslMode) -> PgSslMode {
    match mode {
        SslMode::Disable => PgSslMode::Disable,
        SslMode::Prefer => PgSslMode::Prefer,
        SslMode::Require => PgSslMode::Require,
    }
}

/// Create a PostgreSQL connection pool and verify it can connect.
///
/// # Errors
///
/// Returns an error if the URL is invalid or the first connection fails.
///
/// # Example
///
/// ```ignore
/// let settings = PoolSettings::from_config(&url, &config.database);
/// let pool = create_pool(&settings).await?;
/// ```
pub async fn create_pool(settings: &PoolSettings) -> Result<PgPool, sqlx::Error> {
    let options = settings.connect_options()?;
    tracing::debug!(
        max_connections = settings.max_connections,
        ssl_mode = %settings.ssl_mode,
        "connecting to database"
    );
    settings.pool_options().connect_with(options).await
}

/// Create a pool that connects on first use.
pub fn create_lazy_pool(settings: &PoolSettings) -> Result<PgPool, sqlx::Error> {
    let options = settings.connect_options()?;
    Ok(settings.pool_options().connect_lazy_with(options))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(url: &str, ssl_mode: SslMode) -> PoolSettings {
        PoolSettings {
            database_url: url.to_owned(),
            ssl_mode,
            max_connections: 2,
            acquire_timeout: Duration::from_millis(200),
        }
    }

    #[test]
    fn configured_mode_overrides_url() {
        let s = settings("postgres://pms@localhost/pms?sslmode=disable", SslMode::Require);
        let options = s.connect_options().unwrap();
        assert!(matches!(options.get_ssl_mode(), PgSslMode::Require));
    }

    #[test]
    fn rejects_garbage_url() {
        let s = settings("not a url", SslMode::Require);
        assert!(s.connect_options().is_err());
    }

    #[test]
    fn from_config_copies_limits() {
        let config = DatabaseConfig {
            max_connections: 9,
            acquire_timeout_secs: 3,
            ..Default::default()
        };
        let s = PoolSettings::from_config("postgres://localhost/pms", &config);
        assert_eq!(s.max_connections, 9);
        assert_eq!(s.acquire_timeout, Duration::from_secs(3));
        assert_eq!(s.ssl_mode, SslMode::Require);
    }

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p pms-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&settings(&url, SslMode::Prefer))
            .await
            .expect("pool creation failed");

        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }
}
