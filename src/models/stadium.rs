//! Stadium row model

use serde::Serialize;
use sqlx::FromRow;

/// One row of the `stadiums` table
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Stadium {
    pub stadium_id: String,
    pub stadium_name: String,
    pub city_name: String,
    pub country_name: String,
    pub stadium_capacity: i64,
}
