//! Data-transfer objects
//!
//! The external representation of vehicles exchanged with callers.

use serde::{Deserialize, Serialize};

use crate::domain::entities::VehicleId;

/// Creation request, carries no identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDto {
    pub nb_doors: i32,
    pub color: String,
    pub plate: String,
}

/// Full representation of a persisted vehicle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDtoWithId {
    pub id: VehicleId,
    pub nb_doors: i32,
    pub color: String,
    pub plate: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_vehicle_dto() {
        let json = r#"{"nbDoors": 4, "color": "red", "plate": "ABC-123"}"#;
        let dto: VehicleDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.nb_doors, 4);
        assert_eq!(dto.color, "red");
        assert_eq!(dto.plate, "ABC-123");
    }

    #[test]
    fn parse_vehicle_dto_missing_plate() {
        let json = r#"{"nbDoors": 4, "color": "red"}"#;
        let result: Result<VehicleDto, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn serialize_vehicle_dto_with_id() {
        let dto = VehicleDtoWithId {
            id: VehicleId(1),
            nb_doors: 4,
            color: "red".to_string(),
            plate: "ABC-123".to_string(),
        };

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "nbDoors": 4, "color": "red", "plate": "ABC-123"})
        );
    }
}
