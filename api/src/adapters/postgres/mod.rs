//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod vehicle_repo;


pub use vehicle_repo::PostgresVehicleRepository;
