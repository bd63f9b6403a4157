//! In-memory adapter for VehicleRepository

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{Vehicle, VehicleId};
use crate::domain::ports::VehicleRepository;
use crate::error::DomainError;

#[derive(Default)]
struct Store {
    vehicles: BTreeMap<VehicleId, Vehicle>,
    last_id: i64,
}

/// In-memory implementation of VehicleRepository
///
/// Ids are handed out from 1 upwards and plates are kept unique, the way the
/// `vehicles` table behaves.
#[derive(Default)]
pub struct InMemoryVehicleRepository {
    store: RwLock<Store>,
}

impl InMemoryVehicleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with persisted vehicles
    ///
    /// Vehicles without an id are skipped.
    pub fn with_vehicles(vehicles: impl IntoIterator<Item = Vehicle>) -> Self {
        let mut store = Store::default();
        for vehicle in vehicles {
            if let Some(id) = vehicle.id {
                store.last_id = store.last_id.max(id.0);
                store.vehicles.insert(id, vehicle);
            }
        }
        Self {
            store: RwLock::new(store),
        }
    }
}

#[async_trait]
impl VehicleRepository for InMemoryVehicleRepository {
    async fn find_by_id(&self, id: VehicleId) -> Result<Option<Vehicle>, DomainError> {
        let store = self.store.read().await;
        Ok(store.vehicles.get(&id).cloned())
    }

    async fn find_by_plate(&self, plate: &str) -> Result<Option<Vehicle>, DomainError> {
        let store = self.store.read().await;
        Ok(store.vehicles.values().find(|v| v.plate == plate).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Vehicle>, DomainError> {
        let store = self.store.read().await;
        Ok(store.vehicles.values().cloned().collect())
    }

    async fn save(&self, mut vehicle: Vehicle) -> Result<Vehicle, DomainError> {
        let mut store = self.store.write().await;

        let taken = store
            .vehicles
            .values()
            .any(|v| v.plate == vehicle.plate && v.id != vehicle.id);
        if taken {
            return Err(DomainError::Conflict(format!(
                "Plate '{}' is already registered",
                vehicle.plate
            )));
        }

        let id = match vehicle.id {
            Some(id) => {
                store.last_id = store.last_id.max(id.0);
                id
            }
            None => {
                store.last_id += 1;
                VehicleId(store.last_id)
            }
        };
        vehicle.id = Some(id);
        store.vehicles.insert(id, vehicle.clone());

        Ok(vehicle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_fleet, test_vehicle};

    fn unsaved(color: &str, plate: &str) -> Vehicle {
        Vehicle {
            id: None,
            ..test_vehicle(0, color, plate)
        }
    }

    #[tokio::test]
    async fn save_assigns_sequential_ids() {
        let repo = InMemoryVehicleRepository::new();

        let first = repo.save(unsaved("red", "ABC-123")).await.unwrap();
        let second = repo.save(unsaved("blue", "DEF-456")).await.unwrap();

        assert_eq!(first.id, Some(VehicleId(1)));
        assert_eq!(second.id, Some(VehicleId(2)));
    }

    #[tokio::test]
    async fn save_with_id_overwrites() {
        let repo = InMemoryVehicleRepository::with_vehicles(test_fleet());

        let saved = repo
            .save(test_vehicle(1, "green", "ABC-123"))
            .await
            .unwrap();

        assert_eq!(saved.id, Some(VehicleId(1)));
        let stored = repo.find_by_id(VehicleId(1)).await.unwrap().unwrap();
        assert_eq!(stored.color, "green");
        assert_eq!(repo.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn ids_continue_after_seeded_vehicles() {
        let repo = InMemoryVehicleRepository::with_vehicles(test_fleet());

        let saved = repo.save(unsaved("white", "GHI-789")).await.unwrap();

        assert_eq!(saved.id, Some(VehicleId(3)));
    }

    #[tokio::test]
    async fn duplicate_plate_is_a_conflict() {
        let repo = InMemoryVehicleRepository::with_vehicles(test_fleet());

        let result = repo.save(unsaved("white", "ABC-123")).await;

        assert!(matches!(result, Err(DomainError::Conflict(_))));
        assert_eq!(repo.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn find_by_plate_is_case_sensitive() {
        let repo = InMemoryVehicleRepository::with_vehicles(test_fleet());

        assert!(repo.find_by_plate("ABC-123").await.unwrap().is_some());
        assert!(repo.find_by_plate("abc-123").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_all_in_id_order() {
        let repo = InMemoryVehicleRepository::with_vehicles(test_fleet().into_iter().rev());

        let all = repo.find_all().await.unwrap();

        let colors: Vec<_> = all.iter().map(|v| v.color.as_str()).collect();
        assert_eq!(colors, ["red", "blue"]);
    }

    #[tokio::test]
    async fn with_vehicles_skips_unsaved() {
        let repo = InMemoryVehicleRepository::with_vehicles([unsaved("red", "ABC-123")]);

        assert!(repo.find_all().await.unwrap().is_empty());
    }
}
