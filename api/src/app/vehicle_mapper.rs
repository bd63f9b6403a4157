//! Vehicle mapper
//!
//! Field-for-field conversion between the persisted `Vehicle` and its DTOs.

use crate::app::dto::{VehicleDto, VehicleDtoWithId};
use crate::domain::entities::Vehicle;

/// Stateless converter between vehicles and their DTOs
#[derive(Debug, Clone, Copy, Default)]
pub struct VehicleMapper;

impl VehicleMapper {
    pub fn new() -> Self {
        Self
    }

    /// Convert a persisted vehicle to its external representation
    ///
    /// Returns `None` for a vehicle the store has not assigned an id to yet.
    pub fn vehicle_to_dto_with_id(&self, vehicle: Vehicle) -> Option<VehicleDtoWithId> {
        Some(VehicleDtoWithId {
            id: vehicle.id?,
            nb_doors: vehicle.nb_doors,
            color: vehicle.color,
            plate: vehicle.plate,
        })
    }

    pub fn dto_with_id_to_vehicle(&self, dto: VehicleDtoWithId) -> Vehicle {
        Vehicle {
            id: Some(dto.id),
            nb_doors: dto.nb_doors,
            color: dto.color,
            plate: dto.plate,
        }
    }

    /// Convert a creation request to an unsaved vehicle
    pub fn dto_to_vehicle(&self, dto: VehicleDto) -> Vehicle {
        Vehicle {
            id: None,
            nb_doors: dto.nb_doors,
            color: dto.color,
            plate: dto.plate,
        }
    }
}
