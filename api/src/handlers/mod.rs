//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod vehicles;

pub use vehicles::{
    create_vehicle, get_vehicle, get_vehicle_by_plate, list_vehicles, update_vehicle,
};
