//! `GET /health`: whether the database and the upload directory are usable.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Ok,
    Degraded,
}

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: ServiceStatus,
    pub version: &'static str,
    /// `SELECT 1` succeeded.
    pub db_healthy: bool,
    /// The upload root exists and is a directory.
    pub media_ready: bool,
}

/// Always 200; a failing store shows up as `"degraded"` in the body.
async fn report(State(state): State<AppState>) -> Json<HealthReport> {
    let (db, media_ready) = tokio::join!(
        relief_db::health_check(&state.pool),
        state.media.is_ready()
    );
    let db_healthy = db.is_ok();

    if let Err(err) = db {
        tracing::warn!(error = %err, "Health check: database unreachable");
    }
    if !media_ready {
        tracing::warn!(root = %state.media.root().display(), "Health check: upload root missing");
    }

    let status = if db_healthy && media_ready {
        ServiceStatus::Ok
    } else {
        ServiceStatus::Degraded
    };

    Json(HealthReport {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        media_ready,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(report))
}
