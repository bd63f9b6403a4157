//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{Vehicle, VehicleId};
use crate::error::DomainError;

/// Repository for Vehicle entities
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VehicleRepository: Send + Sync {
    /// Find a vehicle by ID
    async fn find_by_id(&self, id: VehicleId) -> Result<Option<Vehicle>, DomainError>;

    /// Find a vehicle by its plate (exact, case-sensitive match)
    async fn find_by_plate(&self, plate: &str) -> Result<Option<Vehicle>, DomainError>;

    /// List every stored vehicle
    async fn find_all(&self) -> Result<Vec<Vehicle>, DomainError>;

    /// Persist a vehicle
    ///
    /// Inserts when `vehicle.id` is `None` and updates the row with that id
    /// otherwise. The returned vehicle always carries its id.
    async fn save(&self, vehicle: Vehicle) -> Result<Vehicle, DomainError>;
}
