//! Appearance endpoints
//!
//! Appearances are the player/match participation rows; list-only, like
//! goals.

use axum::{
    extract::{Query, State},
    Json,
};
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::models::Appearance;
use crate::query::{
    apply_filters, apply_sort, paginate, FilterKind, FilterSpec, IdPattern, PageRequest,
    PageResult, SortSpec, SqlFragment,
};
use crate::state::AppState;

const BASE: &str = "SELECT tournament_id, match_id, team_id, player_id, position_code, \
     starter, substitute FROM appearances WHERE 1 = 1";

const FILTERS: &[FilterSpec] = &[
    FilterSpec {
        key: "tournament_id",
        kind: FilterKind::Id(IdPattern::Tournament, "tournament_id = :tournament_id"),
    },
    FilterSpec {
        key: "match_id",
        kind: FilterKind::Id(IdPattern::Match, "match_id = :match_id"),
    },
    FilterSpec {
        key: "team_id",
        kind: FilterKind::Id(IdPattern::Team, "team_id = :team_id"),
    },
    FilterSpec {
        key: "player_id",
        kind: FilterKind::Id(IdPattern::Player, "player_id = :player_id"),
    },
];

const SORT: SortSpec = SortSpec {
    allowed: &[("match_id", "match_id"), ("player_id", "player_id")],
    default_column: "match_id",
};

/// List appearances matching the requested filters, one page at a time
pub async fn list_appearances(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<PageResult<Appearance>>> {
    let page = PageRequest::from_query(&params)?;
    let mut fragment = SqlFragment::new(BASE);
    apply_filters(&mut fragment, FILTERS, &params)?;
    apply_sort(
        &mut fragment,
        &SORT,
        params.get("sort_by").map(String::as_str),
        params.get("sort_order").map(String::as_str),
    );

    let result = paginate::<Appearance>(state.pool(), fragment, page).await?;
    if result.total_records == 0 {
        return Err(Error::NotFound(
            "no appearances matched the requested filters".to_string(),
        ));
    }
    Ok(Json(result))
}
