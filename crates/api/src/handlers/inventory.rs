use axum::extract::State;
use axum::Json;
use relief_db::models::inventory::InventoryItem;
use relief_db::repositories::InventoryRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/inventory
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<InventoryItem>>> {
    let items = InventoryRepo::list(&state.pool).await?;
    Ok(Json(items))
}
