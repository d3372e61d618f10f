//! Stadium endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::models::Stadium;
use crate::query::{
    apply_filters, apply_sort, fetch_optional, paginate, validate_id, FilterKind, FilterSpec,
    IdPattern, PageRequest, PageResult, SortSpec, SqlFragment,
};
use crate::state::AppState;

const BASE: &str = "SELECT stadium_id, stadium_name, city_name, country_name, stadium_capacity \
     FROM stadiums WHERE 1 = 1";

const FILTERS: &[FilterSpec] = &[
    FilterSpec {
        key: "name",
        kind: FilterKind::Prefix("stadium_name"),
    },
    FilterSpec {
        key: "city",
        kind: FilterKind::Substring("city_name"),
    },
    FilterSpec {
        key: "country",
        kind: FilterKind::Substring("country_name"),
    },
    FilterSpec {
        key: "min_capacity",
        kind: FilterKind::GreaterThan("stadium_capacity"),
    },
];

const SORT: SortSpec = SortSpec {
    allowed: &[
        ("name", "stadium_name"),
        ("capacity", "stadium_capacity"),
        ("city", "city_name"),
    ],
    default_column: "stadium_name",
};

/// List stadiums matching the requested filters, one page at a time
pub async fn list_stadiums(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<PageResult<Stadium>>> {
    let page = PageRequest::from_query(&params)?;
    let mut fragment = SqlFragment::new(BASE);
    apply_filters(&mut fragment, FILTERS, &params)?;
    apply_sort(
        &mut fragment,
        &SORT,
        params.get("sort_by").map(String::as_str),
        params.get("sort_order").map(String::as_str),
    );

    let result = paginate::<Stadium>(state.pool(), fragment, page).await?;
    if result.total_records == 0 {
        return Err(Error::NotFound(
            "no stadiums matched the requested filters".to_string(),
        ));
    }
    Ok(Json(result))
}

/// Look up a single stadium by id
pub async fn get_stadium(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Stadium>> {
    let id = validate_id(IdPattern::Stadium, "stadium_id", &id)?;
    let mut fragment = SqlFragment::new(BASE);
    fragment.push_predicate("stadium_id = :stadium_id", "stadium_id", id.clone())?;

    fetch_optional::<Stadium>(state.pool(), fragment.sql(), fragment.params())
        .await?
        .map(Json)
        .ok_or_else(|| Error::NotFound(format!("stadium {id} not found")))
}
