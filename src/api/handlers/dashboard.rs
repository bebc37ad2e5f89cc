//! Dashboard statistics handler

use axum::{extract::State, Json};

use super::AppState;
use crate::api::dto::DashboardStatsDto;
use crate::api::error::ApiError;

/// Aggregate dashboard counters
///
/// Counts cover all non-deleted records; the fee sum and the per-type
/// histogram cover active records only.
#[utoipa::path(
    get,
    path = "/api/services/stats/dashboard",
    tag = "Services",
    responses(
        (status = 200, description = "Aggregate counters", body = DashboardStatsDto),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_dashboard_stats(
    State(state): State<AppState>,
) -> Result<Json<DashboardStatsDto>, ApiError> {
    let stats = state.storage.dashboard_stats().await?;
    Ok(Json(stats.into()))
}
