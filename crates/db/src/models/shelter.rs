use relief_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `shelters` table.
///
/// `occupied <= capacity` is expected but not enforced.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Shelter {
    pub id: DbId,
    pub name: String,
    pub location: String,
    pub capacity: i64,
    pub occupied: i64,
}
