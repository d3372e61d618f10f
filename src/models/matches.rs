//! Match row model

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// One row of the `matches` table
///
/// `result` holds the dataset's fixed vocabulary: "home team win",
/// "away team win", or "draw".
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Match {
    pub match_id: String,
    pub tournament_id: String,
    pub match_name: String,
    pub stage: String,
    pub match_date: NaiveDate,
    pub stadium_id: String,
    pub home_team_id: String,
    pub away_team_id: String,
    pub home_team_score: i64,
    pub away_team_score: i64,
    pub result: String,
}
