use relief_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `volunteers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Volunteer {
    pub id: DbId,
    pub name: String,
    pub skill: String,
    /// Free text, e.g. `Available` or `Busy`.
    pub availability: String,
    pub contact: String,
}
