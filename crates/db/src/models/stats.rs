//! Dashboard statistics model.

use relief_core::stats::{display_volunteers, format_resources};
use serde::Serialize;
use sqlx::FromRow;

/// Raw aggregate counts, read in a single statement.
#[derive(Debug, Clone, FromRow)]
pub struct StatsCounts {
    pub active_incidents: i64,
    pub critical_alerts: i64,
    pub resolved_incidents: i64,
    pub total_resources: i64,
    pub available_volunteers: i64,
    pub camps: i64,
}

/// The `/api/stats` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub volunteers: i64,
    pub camps: i64,
    pub resources: String,
    pub critical_alerts: i64,
    pub active_incidents: i64,
    /// All-time resolved count. Not windowed to 24 hours despite the name.
    pub resolved_24h: i64,
}

impl From<StatsCounts> for DashboardStats {
    fn from(counts: StatsCounts) -> Self {
        Self {
            volunteers: display_volunteers(counts.available_volunteers),
            camps: counts.camps,
            resources: format_resources(counts.total_resources),
            critical_alerts: counts.critical_alerts,
            active_incidents: counts.active_incidents,
            resolved_24h: counts.resolved_incidents,
        }
    }
}
