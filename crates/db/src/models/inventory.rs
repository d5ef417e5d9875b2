//! Inventory item entity model.

use relief_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `inventory` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InventoryItem {
    pub id: DbId,
    pub item: String,
    /// Unit count; never negative.
    pub quantity: i64,
    pub category: String,
    pub last_updated: Timestamp,
}
