//! # Fuel Record Repository
//!
//! Storage operations for fill-ups.
//!
//! Records are keyed by their own id; the vehicle relation lives on the
//! record, so per-vehicle listing is a filtered scan in id order.

use std::sync::Arc;

use fuel_core::{FuelRecord, FuelRecordId, NewFuelRecord, VehicleId};
use tracing::debug;

use crate::error::StoreResult;
use crate::table::{EntityStore, MemoryTable};

/// Repository for fuel record rows.
#[derive(Debug, Clone)]
pub struct FuelRecordRepository {
    table: Arc<MemoryTable<FuelRecord>>,
}

impl FuelRecordRepository {
    /// Creates a new FuelRecordRepository over a shared table.
    pub fn new(table: Arc<MemoryTable<FuelRecord>>) -> Self {
        FuelRecordRepository { table }
    }

    /// Stores a validated fill-up. A missing timestamp becomes "now".
    pub fn create(&self, draft: NewFuelRecord) -> FuelRecord {
        let record = self.table.create(draft);
        debug!(
            record_id = %record.id(),
            vehicle_id = %record.vehicle_id(),
            odometer = record.odometer(),
            "Fuel record created"
        );
        record
    }

    pub fn get_by_id(&self, id: FuelRecordId) -> StoreResult<FuelRecord> {
        self.table.get_by_id(id)
    }

    /// All records across vehicles, ordered by id.
    pub fn list(&self) -> Vec<FuelRecord> {
        self.table.list()
    }

    /// One vehicle's records, ordered by id.
    pub fn list_by_vehicle(&self, vehicle_id: VehicleId) -> Vec<FuelRecord> {
        self.table.list_by_parent(vehicle_id)
    }

    /// Replaces a stored record with its edited copy.
    pub fn update(&self, record: FuelRecord) -> StoreResult<FuelRecord> {
        let id = record.id();
        let record = self.table.update(id, record)?;
        debug!(record_id = %id, odometer = record.odometer(), "Fuel record updated");
        Ok(record)
    }

    pub fn delete(&self, id: FuelRecordId) -> StoreResult<()> {
        self.table.delete(id)?;
        debug!(record_id = %id, "Fuel record deleted");
        Ok(())
    }

    /// Removes every record of a vehicle. Returns the count removed.
    pub fn delete_by_vehicle(&self, vehicle_id: VehicleId) -> usize {
        let removed = self.table.delete_by_parent(vehicle_id);
        debug!(vehicle_id = %vehicle_id, removed, "Fuel records removed with vehicle");
        removed
    }

    pub fn exists_by_id(&self, id: FuelRecordId) -> bool {
        self.table.exists_by_id(id)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use fuel_core::FuelReading;

    use super::*;

    fn repo() -> FuelRecordRepository {
        FuelRecordRepository::new(Arc::new(MemoryTable::new()))
    }

    fn draft(vehicle: u64, liters: f64, price: f64, odometer: u64) -> NewFuelRecord {
        NewFuelRecord {
            vehicle_id: VehicleId::new(vehicle),
            reading: FuelReading {
                liters,
                price,
                odometer,
            },
            timestamp: None,
        }
    }

    #[test]
    fn test_create_then_read_returns_same_fields() {
        let repo = repo();
        let stamp = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let created = repo.create(NewFuelRecord {
            timestamp: Some(stamp),
            ..draft(1, 35.0, 1.35, 15_000)
        });

        let read = repo.get_by_id(created.id()).unwrap();
        assert_eq!(read, created);
        assert_eq!(read.liters(), 35.0);
        assert_eq!(read.price(), 1.35);
        assert_eq!(read.odometer(), 15_000);
        assert_eq!(read.timestamp(), stamp);
        assert!((read.total_price() - 47.25).abs() < 1e-9);
    }

    #[test]
    fn test_missing_timestamp_defaults_to_now() {
        let repo = repo();
        let before = Utc::now();
        let created = repo.create(draft(1, 40.0, 1.30, 10_000));
        assert!(created.timestamp() >= before);
        assert!(created.timestamp() <= Utc::now());
    }

    #[test]
    fn test_list_by_vehicle_filters() {
        let repo = repo();
        repo.create(draft(1, 40.0, 1.30, 10_000));
        repo.create(draft(2, 20.0, 1.50, 3_000));
        repo.create(draft(1, 35.0, 1.35, 15_000));

        assert_eq!(repo.list().len(), 3);
        assert_eq!(repo.list_by_vehicle(VehicleId::new(1)).len(), 2);
        assert!(repo.list_by_vehicle(VehicleId::new(9)).is_empty());

        assert_eq!(repo.delete_by_vehicle(VehicleId::new(1)), 2);
        assert_eq!(repo.list().len(), 1);
    }

    #[test]
    fn test_update_recomputed_total_is_stored() {
        let repo = repo();
        let mut record = repo.create(draft(1, 40.0, 1.30, 10_000));
        record.apply(FuelReading {
            liters: 30.0,
            price: 1.40,
            odometer: 10_500,
        });

        let stored = repo.update(record).unwrap();
        assert!((stored.total_price() - 42.0).abs() < 1e-9);
        assert_eq!(repo.get_by_id(stored.id()).unwrap().odometer(), 10_500);
    }
}
