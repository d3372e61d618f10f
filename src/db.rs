//! Database connection pool management

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::{config::DatabaseConfig, error::Result};

/// Create a read-only SQLite connection pool over the dataset file
///
/// The dataset is an external fixed contract this service queries but never
/// writes; the connection is opened read-only so a misrouted statement fails
/// at the driver rather than mutating the file.
pub async fn create_pool(config: &DatabaseConfig) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .filename(&config.path)
        .read_only(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.connection_timeout())
        .connect_with(options)
        .await
        .map_err(|e| {
            tracing::error!(
                path = %config.path.display(),
                "Failed to open dataset: {}",
                e
            );
            e
        })?;

    tracing::info!(
        "Database pool created: path={}, max={}",
        config.path.display(),
        config.max_connections
    );

    Ok(pool)
}
