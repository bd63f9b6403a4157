//! PostgreSQL adapter for VehicleRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set, SqlErr, TryIntoModel,
};

use crate::domain::entities::{Vehicle, VehicleId};
use crate::domain::ports::VehicleRepository;
use crate::entity::vehicles;
use crate::error::DomainError;

/// PostgreSQL implementation of VehicleRepository
pub struct PostgresVehicleRepository {
    db: DatabaseConnection,
}

impl PostgresVehicleRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VehicleRepository for PostgresVehicleRepository {
    async fn find_by_id(&self, id: VehicleId) -> Result<Option<Vehicle>, DomainError> {
        let result = vehicles::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(db_error)?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_plate(&self, plate: &str) -> Result<Option<Vehicle>, DomainError> {
        let result = vehicles::Entity::find()
            .filter(vehicles::Column::Plate.eq(plate))
            .one(&self.db)
            .await
            .map_err(db_error)?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_all(&self) -> Result<Vec<Vehicle>, DomainError> {
        let results = vehicles::Entity::find()
            .order_by_asc(vehicles::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn save(&self, vehicle: Vehicle) -> Result<Vehicle, DomainError> {
        // An unset key makes `save` insert and lets the sequence assign the id
        let model = vehicles::ActiveModel {
            id: vehicle.id.map_or(NotSet, |id| Set(id.0)),
            nb_doors: Set(vehicle.nb_doors),
            color: Set(vehicle.color),
            plate: Set(vehicle.plate),
        };

        let saved = model
            .save(&self.db)
            .await
            .map_err(db_error)?
            .try_into_model()
            .map_err(db_error)?;

        Ok(saved.into())
    }
}

fn db_error(err: DbErr) -> DomainError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => DomainError::Conflict(msg),
        _ => DomainError::Database(err.to_string()),
    }
}

/// Convert SeaORM model to domain entity
impl From<vehicles::Model> for Vehicle {
    fn from(model: vehicles::Model) -> Self {
        Vehicle {
            id: Some(VehicleId(model.id)),
            nb_doors: model.nb_doors,
            color: model.color,
            plate: model.plate,
        }
    }
}
