//! Team endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::models::Team;
use crate::query::{
    apply_filters, apply_sort, fetch_optional, paginate, validate_id, FilterKind, FilterSpec,
    IdPattern, PageRequest, PageResult, SortSpec, SqlFragment,
};
use crate::state::AppState;

const BASE: &str = "SELECT team_id, team_name, team_code, confederation, mens_team, womens_team \
     FROM teams WHERE 1 = 1";

const FILTERS: &[FilterSpec] = &[
    FilterSpec {
        key: "name",
        kind: FilterKind::Prefix("team_name"),
    },
    FilterSpec {
        key: "region",
        kind: FilterKind::Substring("confederation"),
    },
    FilterSpec {
        key: "gender",
        kind: FilterKind::Flag(&[("men", "mens_team = 1"), ("women", "womens_team = 1")]),
    },
];

const SORT: SortSpec = SortSpec {
    allowed: &[("name", "team_name"), ("code", "team_code")],
    default_column: "team_name",
};

/// List teams matching the requested filters, one page at a time
pub async fn list_teams(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<PageResult<Team>>> {
    let page = PageRequest::from_query(&params)?;
    let mut fragment = SqlFragment::new(BASE);
    apply_filters(&mut fragment, FILTERS, &params)?;
    apply_sort(
        &mut fragment,
        &SORT,
        params.get("sort_by").map(String::as_str),
        params.get("sort_order").map(String::as_str),
    );

    let result = paginate::<Team>(state.pool(), fragment, page).await?;
    if result.total_records == 0 {
        return Err(Error::NotFound(
            "no teams matched the requested filters".to_string(),
        ));
    }
    Ok(Json(result))
}

/// Look up a single team by id
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Team>> {
    let id = validate_id(IdPattern::Team, "team_id", &id)?;
    let mut fragment = SqlFragment::new(BASE);
    fragment.push_predicate("team_id = :team_id", "team_id", id.clone())?;

    fetch_optional::<Team>(state.pool(), fragment.sql(), fragment.params())
        .await?
        .map(Json)
        .ok_or_else(|| Error::NotFound(format!("team {id} not found")))
}
