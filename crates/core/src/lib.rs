//! Domain logic for the relief coordination backend.
//!
//! Nothing in this crate performs I/O. Persistence lives in `relief-db`
//! and the HTTP surface in `relief-api`.

pub mod error;
pub mod incident;
pub mod media;
pub mod stats;
pub mod types;
