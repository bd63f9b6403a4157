//! In-memory adapters
//!
//! Process-local repository implementations for development runs and tests.

pub mod vehicle_repo;

pub use vehicle_repo::InMemoryVehicleRepository;
