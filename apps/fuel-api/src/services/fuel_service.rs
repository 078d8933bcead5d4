//! Fuel record service.
//!
//! Every write and every stats computation for a vehicle runs inside that
//! vehicle's lock:
//!
//! ```text
//! create ─► lock(vehicle) ─► validate (incl. vehicle exists)
//!                         ─► ledger.check_create(existing, odometer)
//!                         ─► store.create
//!
//! update ─► find record ─► validate reading ─► lock(record.vehicle)
//!                         ─► re-read record ─► ledger.check_update
//!                         ─► store.update
//!
//! stats  ─► lock(vehicle) ─► vehicle exists? ─► ledger.stats(records)
//! ```

use std::sync::Arc;

use fuel_core::{
    CoreError, FuelRecord, FuelRecordId, FuelRecordInput, FuelStats, OdometerLedger,
    RecordValidator, UpdateCheck, VehicleId,
};
use fuel_store::Store;
use tracing::{info, warn};

use super::ServiceResult;
use crate::locks::VehicleLocks;

/// Fuel record service implementation.
#[derive(Debug, Clone)]
pub struct FuelService {
    store: Store,
    ledger: OdometerLedger,
    locks: Arc<VehicleLocks>,
}

impl FuelService {
    /// Create a new fuel record service.
    pub fn new(store: Store, ledger: OdometerLedger, locks: Arc<VehicleLocks>) -> Self {
        FuelService {
            store,
            ledger,
            locks,
        }
    }

    /// All fuel records across vehicles.
    pub fn list(&self) -> Vec<FuelRecord> {
        self.store.fuel_records().list()
    }

    pub fn get(&self, id: FuelRecordId) -> ServiceResult<FuelRecord> {
        Ok(self.store.fuel_records().get_by_id(id)?)
    }

    /// One vehicle's records; the vehicle must exist.
    pub fn list_for_vehicle(&self, vehicle_id: VehicleId) -> ServiceResult<Vec<FuelRecord>> {
        self.ensure_vehicle(vehicle_id)?;
        Ok(self.store.fuel_records().list_by_vehicle(vehicle_id))
    }

    /// Validates and stores a new fill-up.
    pub fn create(&self, input: &FuelRecordInput) -> ServiceResult<FuelRecord> {
        match input.vehicle_id.map(VehicleId::new) {
            Some(id) if self.store.vehicles().exists_by_id(id) => {
                self.locked(id, || self.create_locked(input))
            }
            // Fails validation; nothing to lock.
            _ => self.create_locked(input),
        }
    }

    /// Stores a fill-up for the vehicle named in the path. Any vehicle id in
    /// the body is ignored.
    pub fn create_for_vehicle(
        &self,
        vehicle_id: VehicleId,
        input: &FuelRecordInput,
    ) -> ServiceResult<FuelRecord> {
        let input = FuelRecordInput {
            vehicle_id: Some(vehicle_id.get()),
            ..input.clone()
        };
        self.create(&input)
    }

    fn create_locked(&self, input: &FuelRecordInput) -> ServiceResult<FuelRecord> {
        let vehicles = self.store.vehicles();
        let draft = RecordValidator::new().validate_fuel_record(input, &vehicles)?;

        let existing = self.store.fuel_records().list_by_vehicle(draft.vehicle_id);
        if let Err(err) = self.ledger.check_create(&existing, draft.reading.odometer) {
            warn!(vehicle_id = %draft.vehicle_id, error = %err, "Fuel record rejected");
            return Err(err.into());
        }

        let record = self.store.fuel_records().create(draft);
        info!(
            record_id = %record.id(),
            vehicle_id = %record.vehicle_id(),
            liters = record.liters(),
            odometer = record.odometer(),
            "Fuel record added"
        );
        Ok(record)
    }

    /// Replaces liters, price and odometer of an existing record.
    ///
    /// The owning vehicle and the timestamp never change.
    pub fn update(&self, id: FuelRecordId, input: &FuelRecordInput) -> ServiceResult<FuelRecord> {
        let vehicle_id = self.get(id)?.vehicle_id();
        let reading = RecordValidator::new().validate_fuel_reading(input)?;

        self.locked(vehicle_id, || -> ServiceResult<FuelRecord> {
            // The record may have gone while we waited for the lock.
            let mut record = self.get(id)?;
            let existing = self.store.fuel_records().list_by_vehicle(vehicle_id);

            match self.ledger.check_update(&existing, id, reading.odometer) {
                Ok(UpdateCheck::RecordMissing) => {
                    warn!(
                        record_id = %id,
                        vehicle_id = %vehicle_id,
                        "Record not among its vehicle's records; odometer check skipped"
                    );
                }
                Ok(UpdateCheck::Verified | UpdateCheck::Unchecked) => {}
                Err(err) => {
                    warn!(record_id = %id, error = %err, "Fuel record update rejected");
                    return Err(err.into());
                }
            }

            record.apply(reading);
            let record = self.store.fuel_records().update(record)?;
            info!(record_id = %id, odometer = record.odometer(), "Fuel record updated");
            Ok(record)
        })
    }

    pub fn delete(&self, id: FuelRecordId) -> ServiceResult<()> {
        let vehicle_id = self.get(id)?.vehicle_id();

        self.locked(vehicle_id, || -> ServiceResult<()> {
            self.store.fuel_records().delete(id)?;
            info!(record_id = %id, vehicle_id = %vehicle_id, "Fuel record deleted");
            Ok(())
        })
    }

    /// Totals and average consumption for one vehicle.
    pub fn stats(&self, vehicle_id: VehicleId) -> ServiceResult<FuelStats> {
        self.ensure_vehicle(vehicle_id)?;
        self.locked(vehicle_id, || -> ServiceResult<FuelStats> {
            // A concurrent delete may have won the lock first.
            self.ensure_vehicle(vehicle_id)?;
            let records = self.store.fuel_records().list_by_vehicle(vehicle_id);
            Ok(self.ledger.stats(&records))
        })
    }

    /// Runs `f` in the vehicle's critical section. If the vehicle is gone
    /// afterwards (deleted while we waited), its lock entry is dropped.
    fn locked<R>(
        &self,
        vehicle_id: VehicleId,
        f: impl FnOnce() -> ServiceResult<R>,
    ) -> ServiceResult<R> {
        let result = self.locks.with_vehicle(vehicle_id, f);
        if !self.store.vehicles().exists_by_id(vehicle_id) {
            self.locks.forget(vehicle_id);
        }
        result
    }

    fn ensure_vehicle(&self, vehicle_id: VehicleId) -> ServiceResult<()> {
        if !self.store.vehicles().exists_by_id(vehicle_id) {
            return Err(CoreError::vehicle_not_found(vehicle_id.get()).into());
        }
        Ok(())
    }
}
