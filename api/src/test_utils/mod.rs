//! Test utilities
//!
//! Fixtures shared by unit tests. Repository doubles come from two places:
//! - `MockVehicleRepository` (mockall) when a test pins exact repository calls
//! - `InMemoryVehicleRepository` (adapters) when a test needs real store behaviour

pub mod fixtures;

pub use fixtures::*;
