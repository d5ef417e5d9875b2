//! Incident entity model and DTOs.

use relief_core::incident::IncidentSubmission;
use relief_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `incidents` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Incident {
    pub id: DbId,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub incident_type: String,
    pub severity: String,
    pub location: String,
    pub description: Option<String>,
    /// Sanitised filename of the attachment in the media store.
    pub media_path: Option<String>,
    pub timestamp: Timestamp,
    pub status: String,
}

/// DTO for inserting a new incident. Status and timestamp are defaulted.
#[derive(Debug, Clone)]
pub struct CreateIncident {
    pub incident_type: String,
    pub severity: String,
    pub location: String,
    pub description: Option<String>,
    pub media_path: Option<String>,
}

impl CreateIncident {
    /// Build the insert DTO from a validated submission and the stored
    /// media filename, if any.
    pub fn new(submission: IncidentSubmission, media_path: Option<String>) -> Self {
        Self {
            incident_type: submission.incident_type,
            severity: submission.severity,
            location: submission.location,
            description: submission.description,
            media_path,
        }
    }
}
