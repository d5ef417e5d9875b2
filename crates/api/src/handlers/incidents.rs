//! Handlers for the `/incidents` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use relief_core::types::DbId;
use relief_db::models::incident::{CreateIncident, Incident};
use relief_db::repositories::incident_repo::RECENT_LIMIT;
use relief_db::repositories::IncidentRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::IncidentPayload;
use crate::state::AppState;

/// Body returned by a successful submission.
#[derive(Debug, Serialize)]
pub struct IncidentCreated {
    pub message: &'static str,
    pub id: DbId,
}

/// GET /api/incidents
///
/// The 50 most recent incidents, newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Incident>>> {
    let incidents = IncidentRepo::list_recent(&state.pool, RECENT_LIMIT).await?;
    Ok(Json(incidents))
}

/// POST /api/incidents
///
/// Accepts JSON, a urlencoded form, or a multipart form with an optional
/// `media` file. `type`, `severity` and `location` are required. Fields are
/// validated before the attachment is written or a row inserted.
pub async fn create(
    State(state): State<AppState>,
    payload: IncidentPayload,
) -> AppResult<(StatusCode, Json<IncidentCreated>)> {
    let (fields, media) = payload.into_parts();
    let submission = fields.validate()?;

    let media_path = match media {
        Some(upload) => state.media.save(&upload.filename, &upload.data).await?,
        None => None,
    };

    let incident =
        IncidentRepo::create(&state.pool, &CreateIncident::new(submission, media_path)).await?;

    tracing::info!(
        id = incident.id,
        incident_type = %incident.incident_type,
        severity = %incident.severity,
        has_media = incident.media_path.is_some(),
        "Incident reported"
    );

    Ok((
        StatusCode::CREATED,
        Json(IncidentCreated {
            message: "Incident reported successfully",
            id: incident.id,
        }),
    ))
}
