use axum::extract::State;
use axum::Json;
use relief_db::models::volunteer::Volunteer;
use relief_db::repositories::VolunteerRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/volunteers
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Volunteer>>> {
    let volunteers = VolunteerRepo::list(&state.pool).await?;
    Ok(Json(volunteers))
}
