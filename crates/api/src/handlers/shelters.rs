use axum::extract::State;
use axum::Json;
use relief_db::models::shelter::Shelter;
use relief_db::repositories::ShelterRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/shelters
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Shelter>>> {
    let shelters = ShelterRepo::list(&state.pool).await?;
    Ok(Json(shelters))
}
