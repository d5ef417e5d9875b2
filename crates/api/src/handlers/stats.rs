use axum::extract::State;
use axum::Json;
use relief_db::models::stats::DashboardStats;
use relief_db::repositories::StatsRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/stats
pub async fn dashboard(State(state): State<AppState>) -> AppResult<Json<DashboardStats>> {
    let stats = StatsRepo::dashboard(&state.pool).await?;
    Ok(Json(stats))
}
