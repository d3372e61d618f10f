//! Liveness and readiness probes

use axum::{extract::State, Json};
use serde::Serialize;

use crate::error::Result;
use crate::state::AppState;

/// Probe response body
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    /// "ok" for liveness, "ready" once the dataset answers
    pub status: &'static str,
}

/// Liveness probe; answers as long as the process serves requests
pub async fn liveness() -> Json<HealthStatus> {
    Json(HealthStatus { status: "ok" })
}

/// Readiness probe; verifies the dataset answers a trivial query
pub async fn readiness(State(state): State<AppState>) -> Result<Json<HealthStatus>> {
    sqlx::query_scalar::<_, i64>("SELECT 1")
        .fetch_one(state.pool())
        .await?;
    Ok(Json(HealthStatus { status: "ready" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[tokio::test]
    async fn test_liveness_always_ok() {
        let Json(body) = liveness().await;
        assert_eq!(body.status, "ok");
    }

    #[tokio::test]
    async fn test_readiness_with_reachable_dataset() {
        let state = AppState::new(testing::memory_pool().await);
        let Json(body) = readiness(State(state)).await.unwrap();
        assert_eq!(body.status, "ready");
    }
}
