//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::app::{VehicleDto, VehicleDtoWithId};
use crate::domain::entities::{Vehicle, VehicleId};

/// Create a persisted four-door vehicle
pub fn test_vehicle(id: i64, color: &str, plate: &str) -> Vehicle {
    Vehicle {
        id: Some(VehicleId(id)),
        nb_doors: 4,
        color: color.to_string(),
        plate: plate.to_string(),
    }
}

/// Create a four-door creation request
pub fn test_vehicle_dto(color: &str, plate: &str) -> VehicleDto {
    VehicleDto {
        nb_doors: 4,
        color: color.to_string(),
        plate: plate.to_string(),
    }
}

/// Create a four-door update request
pub fn test_vehicle_dto_with_id(id: i64, color: &str, plate: &str) -> VehicleDtoWithId {
    VehicleDtoWithId {
        id: VehicleId(id),
        nb_doors: 4,
        color: color.to_string(),
        plate: plate.to_string(),
    }
}

/// The red and blue pair used by listing tests
pub fn test_fleet() -> Vec<Vehicle> {
    vec![
        test_vehicle(1, "red", "ABC-123"),
        test_vehicle(2, "blue", "DEF-456"),
    ]
}
