//! Relief coordination API server library.
//!
//! Exposes the building blocks (config, state, error handling, media store,
//! routes) so integration tests and the binary entrypoint share them.

pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod media;
pub mod routes;
pub mod state;
