//! Player endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::models::Player;
use crate::query::{
    apply_filters, apply_sort, fetch_optional, paginate, validate_id, FilterKind, FilterSpec,
    IdPattern, PageRequest, PageResult, SortSpec, SqlFragment,
};
use crate::state::AppState;

const BASE: &str = "SELECT player_id, family_name, given_name, birth_date, female, \
     goal_keeper, defender, midfielder, forward FROM players WHERE 1 = 1";

const FILTERS: &[FilterSpec] = &[
    FilterSpec {
        key: "name",
        kind: FilterKind::Prefix("family_name"),
    },
    FilterSpec {
        key: "given_name",
        kind: FilterKind::Prefix("given_name"),
    },
    FilterSpec {
        key: "position",
        kind: FilterKind::Flag(&[
            ("goalkeeper", "goal_keeper = 1"),
            ("defender", "defender = 1"),
            ("midfielder", "midfielder = 1"),
            ("forward", "forward = 1"),
        ]),
    },
    FilterSpec {
        key: "gender",
        kind: FilterKind::Flag(&[("male", "female = 0"), ("female", "female = 1")]),
    },
    FilterSpec {
        key: "born_after",
        kind: FilterKind::OnOrAfter("birth_date"),
    },
    FilterSpec {
        key: "born_before",
        kind: FilterKind::OnOrBefore("birth_date"),
    },
];

const SORT: SortSpec = SortSpec {
    allowed: &[
        ("name", "family_name"),
        ("given_name", "given_name"),
        ("birth_date", "birth_date"),
    ],
    default_column: "family_name",
};

/// List players matching the requested filters, one page at a time
pub async fn list_players(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<PageResult<Player>>> {
    let page = PageRequest::from_query(&params)?;
    let mut fragment = SqlFragment::new(BASE);
    apply_filters(&mut fragment, FILTERS, &params)?;
    apply_sort(
        &mut fragment,
        &SORT,
        params.get("sort_by").map(String::as_str),
        params.get("sort_order").map(String::as_str),
    );

    let result = paginate::<Player>(state.pool(), fragment, page).await?;
    if result.total_records == 0 {
        return Err(Error::NotFound(
            "no players matched the requested filters".to_string(),
        ));
    }
    Ok(Json(result))
}

/// Look up a single player by id
pub async fn get_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Player>> {
    let id = validate_id(IdPattern::Player, "player_id", &id)?;
    let mut fragment = SqlFragment::new(BASE);
    fragment.push_predicate("player_id = :player_id", "player_id", id.clone())?;

    fetch_optional::<Player>(state.pool(), fragment.sql(), fragment.params())
        .await?
        .map(Json)
        .ok_or_else(|| Error::NotFound(format!("player {id} not found")))
}
