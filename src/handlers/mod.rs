//! HTTP handlers and route assembly
//!
//! One module per resource, each a thin composition of the shared query
//! core: parse the page window, validate and apply filters, translate sort
//! parameters, paginate. A list whose filters match nothing is a 404; a page
//! past the end of a non-empty result is an empty 200.

pub mod appearances;
pub mod goals;
pub mod health;
pub mod matches;
pub mod players;
pub mod stadiums;
pub mod teams;
pub mod tournaments;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Assemble the service router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .route("/v1/players", get(players::list_players))
        .route("/v1/players/{id}", get(players::get_player))
        .route("/v1/teams", get(teams::list_teams))
        .route("/v1/teams/{id}", get(teams::get_team))
        .route("/v1/tournaments", get(tournaments::list_tournaments))
        .route("/v1/tournaments/{id}", get(tournaments::get_tournament))
        .route("/v1/matches", get(matches::list_matches))
        .route("/v1/matches/{id}", get(matches::get_match))
        .route("/v1/stadiums", get(stadiums::list_stadiums))
        .route("/v1/stadiums/{id}", get(stadiums::get_stadium))
        .route("/v1/goals", get(goals::list_goals))
        .route("/v1/appearances", get(appearances::list_appearances))
        .with_state(state)
}
