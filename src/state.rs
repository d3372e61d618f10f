//! Shared application state

use sqlx::sqlite::SqlitePool;

/// Application state handed to every handler
///
/// Cheap to clone; the pool is internally reference-counted.
#[derive(Clone)]
pub struct AppState {
    pool: SqlitePool,
}

impl AppState {
    /// Create application state over a connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// The dataset connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
