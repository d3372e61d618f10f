//! Tournament row model

use serde::Serialize;
use sqlx::FromRow;

/// One row of the `tournaments` table
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Tournament {
    pub tournament_id: String,
    pub tournament_name: String,
    pub year: i64,
    pub host_country: String,
    pub winner: String,
}
