//! # Vehicle Repository
//!
//! Storage operations for vehicles.

use std::sync::Arc;

use fuel_core::{CoreError, CoreResult, ValidatedVehicle, Vehicle, VehicleId, VehicleLookup};
use tracing::debug;

use crate::error::StoreResult;
use crate::table::{EntityStore, MemoryTable};

/// Repository for vehicle rows.
///
/// ## Usage
/// ```rust
/// use fuel_core::ValidatedVehicle;
/// use fuel_store::Store;
///
/// let store = Store::new();
/// let vehicle = store.vehicles().create(ValidatedVehicle {
///     brand: "Toyota".into(),
///     model: "Corolla".into(),
///     year: 2020,
/// });
/// assert!(store.vehicles().exists_by_id(vehicle.id));
/// ```
#[derive(Debug, Clone)]
pub struct VehicleRepository {
    table: Arc<MemoryTable<Vehicle>>,
}

impl VehicleRepository {
    /// Creates a new VehicleRepository over a shared table.
    pub fn new(table: Arc<MemoryTable<Vehicle>>) -> Self {
        VehicleRepository { table }
    }

    pub fn create(&self, fields: ValidatedVehicle) -> Vehicle {
        let vehicle = self.table.create(fields);
        debug!(vehicle_id = %vehicle.id, brand = %vehicle.brand, "Vehicle created");
        vehicle
    }

    pub fn get_by_id(&self, id: VehicleId) -> StoreResult<Vehicle> {
        self.table.get_by_id(id)
    }

    /// All vehicles, ordered by id.
    pub fn list(&self) -> Vec<Vehicle> {
        self.table.list()
    }

    /// Overwrites brand, model and year of an existing vehicle.
    pub fn update(&self, id: VehicleId, fields: ValidatedVehicle) -> StoreResult<Vehicle> {
        let mut vehicle = self.table.get_by_id(id)?;
        vehicle.apply(fields);
        let vehicle = self.table.update(id, vehicle)?;
        debug!(vehicle_id = %id, "Vehicle updated");
        Ok(vehicle)
    }

    pub fn delete(&self, id: VehicleId) -> StoreResult<()> {
        self.table.delete(id)?;
        debug!(vehicle_id = %id, "Vehicle deleted");
        Ok(())
    }

    pub fn exists_by_id(&self, id: VehicleId) -> bool {
        self.table.exists_by_id(id)
    }
}

impl VehicleLookup for VehicleRepository {
    fn exists(&self, id: VehicleId) -> bool {
        self.exists_by_id(id)
    }

    fn get(&self, id: VehicleId) -> CoreResult<Vehicle> {
        self.get_by_id(id).map_err(CoreError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fuel_core::ErrorKind;

    fn repo() -> VehicleRepository {
        VehicleRepository::new(Arc::new(MemoryTable::new()))
    }

    fn corolla() -> ValidatedVehicle {
        ValidatedVehicle {
            brand: "Toyota".into(),
            model: "Corolla".into(),
            year: 2020,
        }
    }

    #[test]
    fn test_create_and_lookup() {
        let repo = repo();
        let created = repo.create(corolla());

        assert!(repo.exists(created.id));
        assert_eq!(repo.get(created.id).unwrap(), created);
        assert_eq!(
            repo.get(VehicleId::new(77)).unwrap_err().kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn test_update_keeps_id() {
        let repo = repo();
        let created = repo.create(corolla());

        let updated = repo
            .update(
                created.id,
                ValidatedVehicle {
                    brand: "Honda".into(),
                    model: "Civic".into(),
                    year: 2018,
                },
            )
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.brand, "Honda");
        assert_eq!(repo.list(), vec![updated]);
    }

    #[test]
    fn test_update_and_delete_missing() {
        let repo = repo();
        assert!(repo.update(VehicleId::new(3), corolla()).is_err());
        assert!(repo.delete(VehicleId::new(3)).is_err());
    }
}
