//! Database migration commands.
//!
//! # Usage
//!
//! ```bash
//! catalog-cli migrate
//! ```
//!
//! # Environment Variables
//!
//! Same resolution as the store: `CATALOG_DATABASE_URL`, then `DATABASE_URL`,
//! then `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`.
//!
//! # Migration Files
//!
//! `crates/store/migrations/`, embedded at compile time.

use catalog_store::config::{ConfigError, database_url};
use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::migrate::Migrator;
use thiserror::Error;

/// Migrations for the `catalog` schema.
pub static MIGRATOR: Migrator = sqlx::migrate!("../store/migrations");

/// Errors that can occur while migrating.
#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Run pending catalog migrations.
///
/// # Errors
///
/// Returns `MigrationError` if the database location is not configured, the
/// database is unreachable, or a migration fails.
pub async fn run() -> Result<(), MigrationError> {
    dotenvy::dotenv().ok();
    let database_url = database_url(|key| std::env::var(key).ok())?;

    tracing::info!("Connecting to catalog database...");
    let pool = PgPool::connect(database_url.expose_secret()).await?;

    tracing::info!(
        migrations = MIGRATOR.iter().count(),
        "Running catalog migrations..."
    );
    MIGRATOR.run(&pool).await?;
    pool.close().await;

    tracing::info!("Catalog migrations complete!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_products_migration_is_embedded() {
        assert!(
            MIGRATOR
                .iter()
                .any(|migration| migration.description.contains("create products"))
        );
    }

    #[test]
    fn test_missing_database_url_is_reported() {
        let err = MigrationError::from(ConfigError::MissingEnvVar(
            "CATALOG_DATABASE_URL".to_string(),
        ));
        assert_eq!(
            err.to_string(),
            "Configuration error: Missing environment variable: CATALOG_DATABASE_URL"
        );
    }
}
