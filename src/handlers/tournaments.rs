//! Tournament endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::models::Tournament;
use crate::query::{
    apply_filters, apply_sort, fetch_optional, paginate, validate_id, FilterKind, FilterSpec,
    IdPattern, PageRequest, PageResult, SortSpec, SqlFragment,
};
use crate::state::AppState;

const BASE: &str = "SELECT tournament_id, tournament_name, year, host_country, winner \
     FROM tournaments WHERE 1 = 1";

const FILTERS: &[FilterSpec] = &[
    FilterSpec {
        key: "host",
        kind: FilterKind::Substring("host_country"),
    },
    FilterSpec {
        key: "winner",
        kind: FilterKind::Prefix("winner"),
    },
];

const SORT: SortSpec = SortSpec {
    allowed: &[("year", "year"), ("name", "tournament_name")],
    default_column: "year",
};

/// List tournaments matching the requested filters, one page at a time
pub async fn list_tournaments(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<PageResult<Tournament>>> {
    let page = PageRequest::from_query(&params)?;
    let mut fragment = SqlFragment::new(BASE);
    apply_filters(&mut fragment, FILTERS, &params)?;
    apply_sort(
        &mut fragment,
        &SORT,
        params.get("sort_by").map(String::as_str),
        params.get("sort_order").map(String::as_str),
    );

    let result = paginate::<Tournament>(state.pool(), fragment, page).await?;
    if result.total_records == 0 {
        return Err(Error::NotFound(
            "no tournaments matched the requested filters".to_string(),
        ));
    }
    Ok(Json(result))
}

/// Look up a single tournament by id
pub async fn get_tournament(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Tournament>> {
    let id = validate_id(IdPattern::Tournament, "tournament_id", &id)?;
    let mut fragment = SqlFragment::new(BASE);
    fragment.push_predicate("tournament_id = :tournament_id", "tournament_id", id.clone())?;

    fetch_optional::<Tournament>(state.pool(), fragment.sql(), fragment.params())
        .await?
        .map(Json)
        .ok_or_else(|| Error::NotFound(format!("tournament {id} not found")))
}
