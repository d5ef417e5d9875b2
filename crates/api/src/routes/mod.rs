pub mod health;

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /stats                 dashboard figures (GET)
/// /incidents             list recent (GET), report (POST)
/// /inventory             list (GET)
/// /volunteers            list (GET)
/// /shelters              list (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/stats", get(handlers::stats::dashboard))
        .route(
            "/incidents",
            get(handlers::incidents::list)
                .post(handlers::incidents::create)
                // Uploads are not size-limited.
                .layer(DefaultBodyLimit::disable()),
        )
        .route("/inventory", get(handlers::inventory::list))
        .route("/volunteers", get(handlers::volunteers::list))
        .route("/shelters", get(handlers::shelters::list))
}

/// Routes serving uploaded media from the media store.
pub fn upload_routes() -> Router<AppState> {
    Router::new().route("/uploads/{filename}", get(handlers::uploads::serve))
}
