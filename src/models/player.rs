//! Player row model

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// One row of the `players` table
///
/// A player's positions are four independent flag columns; a utility player
/// may carry more than one.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Player {
    pub player_id: String,
    pub family_name: String,
    pub given_name: String,
    pub birth_date: Option<NaiveDate>,
    pub female: bool,
    pub goal_keeper: bool,
    pub defender: bool,
    pub midfielder: bool,
    pub forward: bool,
}
