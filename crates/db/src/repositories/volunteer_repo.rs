//! Repository for the `volunteers` table.

use sqlx::SqlitePool;

use crate::models::volunteer::Volunteer;

const COLUMNS: &str = "id, name, skill, availability, contact";

pub struct VolunteerRepo;

impl VolunteerRepo {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Volunteer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM volunteers ORDER BY id");
        sqlx::query_as::<_, Volunteer>(&query)
            .fetch_all(pool)
            .await
    }

    /// Number of volunteers whose availability matches exactly.
    pub async fn count_by_availability(
        pool: &SqlitePool,
        availability: &str,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM volunteers WHERE availability = ?")
            .bind(availability)
            .fetch_one(pool)
            .await
    }
}
