//! Repository for the `inventory` table.

use sqlx::SqlitePool;

use crate::models::inventory::InventoryItem;

const COLUMNS: &str = "id, item, quantity, category, last_updated";

/// Read access to relief inventory.
pub struct InventoryRepo;

impl InventoryRepo {
    /// List every inventory item in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<InventoryItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inventory ORDER BY id");
        sqlx::query_as::<_, InventoryItem>(&query)
            .fetch_all(pool)
            .await
    }

    /// Sum of all item quantities; `0` for an empty table.
    pub async fn total_quantity(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COALESCE(SUM(quantity), 0) FROM inventory")
            .fetch_one(pool)
            .await
    }
}
