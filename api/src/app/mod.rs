//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod dto;
pub mod vehicle_mapper;
pub mod vehicle_service;

pub use dto::{VehicleDto, VehicleDtoWithId};
pub use vehicle_mapper::VehicleMapper;
pub use vehicle_service::VehicleService;
