//! Vehicle service.
//!
//! CRUD for vehicles. Deleting a vehicle removes its fuel records in the
//! same critical section.

use std::sync::Arc;

use fuel_core::{RecordValidator, Vehicle, VehicleId, VehicleInput};
use fuel_store::Store;
use tracing::info;

use super::ServiceResult;
use crate::locks::VehicleLocks;

/// Vehicle service implementation.
#[derive(Debug, Clone)]
pub struct VehicleService {
    store: Store,
    locks: Arc<VehicleLocks>,
}

impl VehicleService {
    /// Create a new vehicle service.
    pub fn new(store: Store, locks: Arc<VehicleLocks>) -> Self {
        VehicleService { store, locks }
    }

    pub fn list(&self) -> Vec<Vehicle> {
        self.store.vehicles().list()
    }

    pub fn get(&self, id: VehicleId) -> ServiceResult<Vehicle> {
        Ok(self.store.vehicles().get_by_id(id)?)
    }

    pub fn create(&self, input: &VehicleInput) -> ServiceResult<Vehicle> {
        let fields = RecordValidator::new().validate_vehicle(input)?;
        let vehicle = self.store.vehicles().create(fields);

        info!(vehicle_id = %vehicle.id, brand = %vehicle.brand, model = %vehicle.model, "Vehicle added");
        Ok(vehicle)
    }

    /// Replaces brand, model and year. The id is taken from the path, never
    /// from the body.
    pub fn update(&self, id: VehicleId, input: &VehicleInput) -> ServiceResult<Vehicle> {
        let fields = RecordValidator::new().validate_vehicle(input)?;
        let vehicle = self.store.vehicles().update(id, fields)?;

        info!(vehicle_id = %id, "Vehicle updated");
        Ok(vehicle)
    }

    /// Deletes a vehicle and its fuel records. Returns how many records went
    /// with it.
    pub fn delete(&self, id: VehicleId) -> ServiceResult<usize> {
        let removed = self.locks.with_vehicle(id, || -> ServiceResult<usize> {
            self.store.vehicles().delete(id)?;
            Ok(self.store.fuel_records().delete_by_vehicle(id))
        });
        // Ids are never reused, so the entry is dead whether or not the
        // vehicle was there.
        self.locks.forget(id);
        let removed = removed?;

        info!(vehicle_id = %id, records_removed = removed, "Vehicle deleted");
        Ok(removed)
    }
}
