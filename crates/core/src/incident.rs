//! Incident lifecycle constants and submission validation.
//!
//! Submissions arrive either as JSON or as a multipart form. Both shapes are
//! collected into [`IncidentFields`] and validated into a single canonical
//! [`IncidentSubmission`] before anything is written.

use serde::Deserialize;

use crate::error::CoreError;

/// Status assigned to every newly reported incident.
pub const STATUS_PENDING: &str = "PENDING";

/// Status of an incident that has been dealt with.
pub const STATUS_RESOLVED: &str = "RESOLVED";

/// Severity value that counts towards the critical-alerts figure.
pub const SEVERITY_CRITICAL: &str = "critical";

/// Raw, unvalidated submission fields as sent by the client.
///
/// Every field is optional here; [`IncidentFields::validate`] enforces
/// presence of the required ones.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IncidentFields {
    #[serde(rename = "type")]
    pub incident_type: Option<String>,
    pub severity: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
}

/// A validated incident submission, ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncidentSubmission {
    pub incident_type: String,
    pub severity: String,
    pub location: String,
    pub description: Option<String>,
}

impl IncidentFields {
    /// Check that `type`, `severity` and `location` are present and
    /// non-blank. Values are trimmed; a blank description becomes `None`.
    pub fn validate(self) -> Result<IncidentSubmission, CoreError> {
        let incident_type = non_blank(self.incident_type);
        let severity = non_blank(self.severity);
        let location = non_blank(self.location);

        match (incident_type, severity, location) {
            (Some(incident_type), Some(severity), Some(location)) => Ok(IncidentSubmission {
                incident_type,
                severity,
                location,
                description: non_blank(self.description),
            }),
            _ => Err(CoreError::Validation("Missing required fields".into())),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
