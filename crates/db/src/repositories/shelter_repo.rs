//! Repository for the `shelters` table.

use sqlx::SqlitePool;

use crate::models::shelter::Shelter;

const COLUMNS: &str = "id, name, location, capacity, occupied";

pub struct ShelterRepo;

impl ShelterRepo {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Shelter>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM shelters ORDER BY id");
        sqlx::query_as::<_, Shelter>(&query).fetch_all(pool).await
    }

    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM shelters")
            .fetch_one(pool)
            .await
    }
}
