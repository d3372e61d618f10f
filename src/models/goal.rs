//! Goal row model

use serde::Serialize;
use sqlx::FromRow;

/// One row of the `goals` table
///
/// `minute_regulation` is absent for shootout goals.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Goal {
    pub goal_id: String,
    pub tournament_id: String,
    pub match_id: String,
    pub team_id: String,
    pub player_id: String,
    pub minute_regulation: Option<i64>,
    pub own_goal: bool,
    pub penalty: bool,
}
