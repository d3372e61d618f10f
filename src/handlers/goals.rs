//! Goal endpoints
//!
//! Goals are event rows; they are listed and filtered but carry no single-
//! resource lookup.

use axum::{
    extract::{Query, State},
    Json,
};
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::models::Goal;
use crate::query::{
    apply_filters, apply_sort, paginate, FilterKind, FilterSpec, IdPattern, PageRequest,
    PageResult, SortSpec, SqlFragment,
};
use crate::state::AppState;

const BASE: &str = "SELECT goal_id, tournament_id, match_id, team_id, player_id, \
     minute_regulation, own_goal, penalty FROM goals WHERE 1 = 1";

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
    allowed: &[("goal_id", "goal_id"), ("match_id", "match_id")],
    default_column: "goal_id",
};

/// List goals matching the requested filters, one page at a time
pub async fn list_goals(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<PageResult<Goal>>> {
    let page = PageRequest::from_query(&params)?;
    let mut fragment = SqlFragment::new(BASE);
    apply_filters(&mut fragment, FILTERS, &params)?;
    apply_sort(
        &mut fragment,
        &SORT,
        params.get("sort_by").map(String::as_str),
        params.get("sort_order").map(String::as_str),
    );

    let result = paginate::<Goal>(state.pool(), fragment, page).await?;
    if result.total_records == 0 {
        return Err(Error::NotFound(
            "no goals matched the requested filters".to_string(),
        ));
    }
    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    fn query(pairs: &[(&str, &str)]) -> Query<HashMap<String, String>> {
        Query(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    async fn state() -> State<AppState> {
        State(AppState::new(testing::seeded_pool().await))
    }

    #[tokio::test]
    async fn test_list_filters_by_scorer() {
        let Json(page) = list_goals(state().await, query(&[("player_id", "P-00012")]))
            .await
            .unwrap();
        assert_eq!(page.total_records, 2);
        assert!(page.data.iter().all(|goal| goal.player_id == "P-00012"));
    }

    #[tokio::test]
    async fn test_list_filters_by_match() {
        let Json(page) = list_goals(state().await, query(&[("match_id", "M-1930-01")]))
            .await
            .unwrap();
        assert_eq!(page.total_records, 3);
    }

    #[tokio::test]
    async fn test_shootout_goal_has_no_regulation_minute() {
        let Json(page) = list_goals(state().await, query(&[("player_id", "P-00007")]))
            .await
            .unwrap();
        assert_eq!(page.total_records, 1);
        assert!(page.data[0].minute_regulation.is_none());
        assert!(page.data[0].penalty);
    }
}
