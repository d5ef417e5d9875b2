//! Row structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` struct matching the
//! database row. Incidents also carry a create DTO; the other tables are
//! only ever written by the seed bootstrap.

pub mod incident;
pub mod inventory;
pub mod shelter;
pub mod stats;
pub mod volunteer;
