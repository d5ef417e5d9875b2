//! Repository for the `incidents` table.

use relief_core::incident::STATUS_PENDING;
use relief_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::incident::{CreateIncident, Incident};
use crate::TIMESTAMP_FORMAT;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, type, severity, location, description, media_path, timestamp, status";

/// Value expression for the `description` parameter (`?4`).
///
/// Tables created before descriptions became optional declare the column
/// `NOT NULL`; there an absent description is stored as `''`.
const DESCRIPTION_VALUE: &str = "CASE
        WHEN ?4 IS NULL AND (
            SELECT \"notnull\" FROM pragma_table_info('incidents') WHERE name = 'description'
        ) = 1 THEN ''
        ELSE ?4
    END";

/// Maximum number of incidents returned by [`IncidentRepo::list_recent`].
pub const RECENT_LIMIT: i64 = 50;

/// Provides insert and read operations for incidents.
pub struct IncidentRepo;

impl IncidentRepo {
    /// Insert a new incident with status `PENDING` and the current time.
    ///
    /// A missing description is stored as NULL, or as `''` on a legacy
    /// table whose `description` column is `NOT NULL`.
    pub async fn create(pool: &SqlitePool, input: &CreateIncident) -> Result<Incident, sqlx::Error> {
        let now = chrono::Utc::now().format(TIMESTAMP_FORMAT).to_string();
        let query = format!(
            "INSERT INTO incidents (type, severity, location, description, media_path, timestamp, status)
             VALUES (?1, ?2, ?3, {DESCRIPTION_VALUE}, ?5, ?6, ?7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Incident>(&query)
            .bind(&input.incident_type)
            .bind(&input.severity)
            .bind(&input.location)
            .bind(&input.description)
            .bind(&input.media_path)
            .bind(now)
            .bind(STATUS_PENDING)
            .fetch_one(pool)
            .await
    }

    /// Find an incident by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Incident>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM incidents WHERE id = ?");
        sqlx::query_as::<_, Incident>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the most recent incidents, newest first.
    ///
    /// `limit` is clamped to `1..=RECENT_LIMIT`. Rows sharing a timestamp
    /// are ordered by descending id.
    pub async fn list_recent(pool: &SqlitePool, limit: i64) -> Result<Vec<Incident>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM incidents
             ORDER BY timestamp DESC, id DESC
             LIMIT ?"
        );
        sqlx::query_as::<_, Incident>(&query)
            .bind(limit.clamp(1, RECENT_LIMIT))
            .fetch_all(pool)
            .await
    }

    /// Total number of incidents.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM incidents")
            .fetch_one(pool)
            .await
    }

    /// Number of incidents with the given status.
    pub async fn count_by_status(pool: &SqlitePool, status: &str) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM incidents WHERE status = ?")
            .bind(status)
            .fetch_one(pool)
            .await
    }
}
