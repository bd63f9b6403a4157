//! Vehicle service
//!
//! Handles creating, reading and updating vehicles. Every operation is a
//! repository call bracketed by the mapper.

use std::sync::Arc;

use crate::app::dto::{VehicleDto, VehicleDtoWithId};
use crate::app::vehicle_mapper::VehicleMapper;
use crate::domain::entities::{Vehicle, VehicleId, VehicleKey};
use crate::domain::ports::VehicleRepository;
use crate::error::{AppError, DomainError};

/// Service for managing vehicles
pub struct VehicleService<VR>
where
    VR: VehicleRepository,
{
    vehicles: Arc<VR>,
    mapper: VehicleMapper,
}

impl<VR> VehicleService<VR>
where
    VR: VehicleRepository,
{
    pub fn new(vehicles: Arc<VR>, mapper: VehicleMapper) -> Self {
        Self { vehicles, mapper }
    }

    /// List all vehicles in store order
    pub async fn find_all(&self) -> Result<Vec<VehicleDtoWithId>, AppError> {
        let vehicles = self.vehicles.find_all().await?;
        tracing::debug!(count = vehicles.len(), "Listing vehicles");

        vehicles.into_iter().map(|v| self.to_dto(v)).collect()
    }

    /// Find a vehicle by ID
    pub async fn find_by_id(&self, id: VehicleId) -> Result<VehicleDtoWithId, AppError> {
        let vehicle = self
            .vehicles
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(VehicleKey::Id(id)))?;

        self.to_dto(vehicle)
    }

    /// Find a vehicle by its plate
    pub async fn find_by_plate(&self, plate: &str) -> Result<VehicleDtoWithId, AppError> {
        let vehicle = self
            .vehicles
            .find_by_plate(plate)
            .await?
            .ok_or_else(|| not_found(VehicleKey::Plate(plate.to_string())))?;

        self.to_dto(vehicle)
    }

    /// Create a vehicle
    ///
    /// Plate uniqueness is left to the repository.
    pub async fn save_vehicle(&self, dto: VehicleDto) -> Result<VehicleDtoWithId, AppError> {
        let vehicle = self.mapper.dto_to_vehicle(dto);
        let saved = self.vehicles.save(vehicle).await?;

        let created = self.to_dto(saved)?;
        tracing::info!(vehicle_id = %created.id, plate = %created.plate, "Vehicle created");

        Ok(created)
    }

    /// Overwrite an existing vehicle with the given fields
    ///
    /// The stored record only gates the write; nothing from it is merged into
    /// what gets saved.
    pub async fn update_vehicle(
        &self,
        dto: VehicleDtoWithId,
    ) -> Result<VehicleDtoWithId, AppError> {
        if self.vehicles.find_by_id(dto.id).await?.is_none() {
            return Err(not_found(VehicleKey::Id(dto.id)));
        }

        let vehicle = self.mapper.dto_with_id_to_vehicle(dto);
        let saved = self.vehicles.save(vehicle).await?;

        let updated = self.to_dto(saved)?;
        tracing::info!(vehicle_id = %updated.id, "Vehicle updated");

        Ok(updated)
    }

    fn to_dto(&self, vehicle: Vehicle) -> Result<VehicleDtoWithId, AppError> {
        let plate = vehicle.plate.clone();
        self.mapper.vehicle_to_dto_with_id(vehicle).ok_or_else(|| {
            AppError::Domain(DomainError::Internal(format!(
                "Repository returned vehicle '{}' without an id",
                plate
            )))
        })
    }
}

fn not_found(key: VehicleKey) -> AppError {
    tracing::warn!(%key, "Vehicle not found");
    AppError::Domain(DomainError::VehicleNotFound(key))
}
