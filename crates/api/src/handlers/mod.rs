pub mod incidents;
pub mod inventory;
pub mod shelters;
pub mod stats;
pub mod uploads;
pub mod volunteers;
