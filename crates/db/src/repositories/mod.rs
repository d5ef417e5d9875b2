//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&SqlitePool` as the first argument.

pub mod incident_repo;
pub mod inventory_repo;
pub mod shelter_repo;
pub mod stats_repo;
pub mod volunteer_repo;

pub use incident_repo::IncidentRepo;
pub use inventory_repo::InventoryRepo;
pub use shelter_repo::ShelterRepo;
pub use stats_repo::StatsRepo;
pub use volunteer_repo::VolunteerRepo;
