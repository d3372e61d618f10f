//! Appearance row model

use serde::Serialize;
use sqlx::FromRow;

/// One row of the `appearances` table, one player's participation in one
/// match
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Appearance {
    pub tournament_id: String,
    pub match_id: String,
    pub team_id: String,
    pub player_id: String,
    pub position_code: String,
    pub starter: bool,
    pub substitute: bool,
}
