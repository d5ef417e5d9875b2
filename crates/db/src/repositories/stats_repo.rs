//! Aggregate dashboard statistics across all four tables.

use relief_core::incident::{SEVERITY_CRITICAL, STATUS_PENDING, STATUS_RESOLVED};
use relief_core::stats::VOLUNTEER_AVAILABLE;
use sqlx::SqlitePool;

use crate::models::stats::{DashboardStats, StatsCounts};

pub struct StatsRepo;

impl StatsRepo {
    /// Read every dashboard figure in one statement, so all six values
    /// reflect the same snapshot.
    pub async fn dashboard(pool: &SqlitePool) -> Result<DashboardStats, sqlx::Error> {
        let counts = sqlx::query_as::<_, StatsCounts>(
            "SELECT
                (SELECT COUNT(*) FROM incidents WHERE status = ?1) AS active_incidents,
                (SELECT COUNT(*) FROM incidents WHERE status = ?1 AND severity = ?2) AS critical_alerts,
                (SELECT COUNT(*) FROM incidents WHERE status = ?3) AS resolved_incidents,
                (SELECT COALESCE(SUM(quantity), 0) FROM inventory) AS total_resources,
                (SELECT COUNT(*) FROM volunteers WHERE availability = ?4) AS available_volunteers,
                (SELECT COUNT(*) FROM shelters) AS camps",
        )
        .bind(STATUS_PENDING)
        .bind(SEVERITY_CRITICAL)
        .bind(STATUS_RESOLVED)
        .bind(VOLUNTEER_AVAILABLE)
        .fetch_one(pool)
        .await?;

        Ok(counts.into())
    }
}
