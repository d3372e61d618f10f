//! Team row model

use serde::Serialize;
use sqlx::FromRow;

/// One row of the `teams` table
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Team {
    pub team_id: String,
    pub team_name: String,
    pub team_code: String,
    pub confederation: String,
    pub mens_team: bool,
    pub womens_team: bool,
}
