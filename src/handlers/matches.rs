//! Match endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::models::Match;
use crate::query::{
    apply_filters, apply_sort, fetch_optional, paginate, validate_id, FilterKind, FilterSpec,
    IdPattern, PageRequest, PageResult, SortSpec, SqlFragment,
};
use crate::state::AppState;

const BASE: &str = "SELECT match_id, tournament_id, match_name, stage, match_date, stadium_id, \
     home_team_id, away_team_id, home_team_score, away_team_score, result \
     FROM matches WHERE 1 = 1";

const FILTERS: &[FilterSpec] = &[
    FilterSpec {
        key: "tournament_id",
        kind: FilterKind::Id(IdPattern::Tournament, "tournament_id = :tournament_id"),
    },
    FilterSpec {
        key: "team_id",
        // A team's matches, on either side of the fixture
        kind: FilterKind::Id(
            IdPattern::Team,
            "(home_team_id = :team_id OR away_team_id = :team_id)",
        ),
    },
    FilterSpec {
        key: "stadium_id",
        kind: FilterKind::Id(IdPattern::Stadium, "stadium_id = :stadium_id"),
    },
    FilterSpec {
        key: "played_after",
        kind: FilterKind::OnOrAfter("match_date"),
    },
    FilterSpec {
        key: "played_before",
        kind: FilterKind::OnOrBefore("match_date"),
    },
    FilterSpec {
        key: "result",
        kind: FilterKind::OneOf("result", &["home team win", "away team win", "draw"]),
    },
];

const SORT: SortSpec = SortSpec {
    allowed: &[("date", "match_date"), ("match_id", "match_id")],
    default_column: "match_date",
};

/// List matches matching the requested filters, one page at a time
pub async fn list_matches(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<PageResult<Match>>> {
    let page = PageRequest::from_query(&params)?;
    let mut fragment = SqlFragment::new(BASE);
    apply_filters(&mut fragment, FILTERS, &params)?;
    apply_sort(
        &mut fragment,
        &SORT,
        params.get("sort_by").map(String::as_str),
        params.get("sort_order").map(String::as_str),
    );

    let result = paginate::<Match>(state.pool(), fragment, page).await?;
    if result.total_records == 0 {
        return Err(Error::NotFound(
            "no matches matched the requested filters".to_string(),
        ));
    }
    Ok(Json(result))
}

/// Look up a single match by id
pub async fn get_match(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Match>> {
    let id = validate_id(IdPattern::Match, "match_id", &id)?;
    let mut fragment = SqlFragment::new(BASE);
    fragment.push_predicate("match_id = :match_id", "match_id", id.clone())?;

    fetch_optional::<Match>(state.pool(), fragment.sql(), fragment.params())
        .await?
        .map(Json)
        .ok_or_else(|| Error::NotFound(format!("match {id} not found")))
}
