//! Vehicle domain entity
//!
//! The persisted representation of a vehicle. The identifier is assigned by
//! the store on first save and never changes afterwards.

use serde::{Deserialize, Serialize};

/// Store-assigned synthetic identifier for a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleId(pub i64);

impl From<i64> for VehicleId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for VehicleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A vehicle as owned by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    /// `None` until the vehicle has been persisted
    pub id: Option<VehicleId>,
    pub nb_doors: i32,
    pub color: String,
    /// Unique external identifier, compared case-sensitively
    pub plate: String,
}

/// The key a vehicle lookup was made with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VehicleKey {
    Id(VehicleId),
    Plate(String),
}

impl std::fmt::Display for VehicleKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VehicleKey::Id(id) => write!(f, "id {}", id),
            VehicleKey::Plate(plate) => write!(f, "plate '{}'", plate),
        }
    }
}
