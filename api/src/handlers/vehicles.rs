//! Vehicle handlers
//!
//! Endpoints for creating, reading and updating vehicles.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::app::{VehicleDto, VehicleDtoWithId};
use crate::domain::entities::VehicleId;
use crate::domain::ports::VehicleRepository;
use crate::error::AppError;
use crate::AppState;

/// GET /vehicles
pub async fn list_vehicles<VR: VehicleRepository + 'static>(
    State(state): State<AppState<VR>>,
) -> Result<Json<Vec<VehicleDtoWithId>>, AppError> {
    Ok(Json(state.vehicle_service.find_all().await?))
}

/// GET /vehicles/:id
pub async fn get_vehicle<VR: VehicleRepository + 'static>(
    State(state): State<AppState<VR>>,
    Path(id): Path<i64>,
) -> Result<Json<VehicleDtoWithId>, AppError> {
    Ok(Json(state.vehicle_service.find_by_id(VehicleId(id)).await?))
}

/// GET /vehicles/plate/:plate
pub async fn get_vehicle_by_plate<VR: VehicleRepository + 'static>(
    State(state): State<AppState<VR>>,
    Path(plate): Path<String>,
) -> Result<Json<VehicleDtoWithId>, AppError> {
    Ok(Json(state.vehicle_service.find_by_plate(&plate).await?))
}

/// POST /vehicles
///
/// Create a vehicle. The store assigns its id.
pub async fn create_vehicle<VR: VehicleRepository + 'static>(
    State(state): State<AppState<VR>>,
    Json(request): Json<VehicleDto>,
) -> Result<(StatusCode, Json<VehicleDtoWithId>), AppError> {
    let created = state.vehicle_service.save_vehicle(request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /vehicles/:id
///
/// Overwrite an existing vehicle. The body must carry the same id as the path.
pub async fn update_vehicle<VR: VehicleRepository + 'static>(
    State(state): State<AppState<VR>>,
    Path(id): Path<i64>,
    Json(request): Json<VehicleDtoWithId>,
) -> Result<Json<VehicleDtoWithId>, AppError> {
    if request.id != VehicleId(id) {
        return Err(AppError::BadRequest(format!(
            "Body id {} does not match path id {}",
            request.id, id
        )));
    }

    Ok(Json(state.vehicle_service.update_vehicle(request).await?))
}
