//! # Store Handle
//!
//! The single entry point to storage, shared by every request handler.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  AppState                                                               │
//! │    └── Store (Clone = Arc bump)                                        │
//! │          ├── vehicles()      → VehicleRepository    ─┐                 │
//! │          └── fuel_records()  → FuelRecordRepository ─┤ same tables     │
//! │                                                      ▼                  │
//! │                     Arc<MemoryTable<Vehicle>>, Arc<MemoryTable<...>>    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use fuel_core::{FuelRecord, Vehicle};
use tracing::info;

use crate::repository::{FuelRecordRepository, VehicleRepository};
use crate::table::MemoryTable;

/// Main storage handle providing repository access.
///
/// Cloning is cheap; every clone sees the same tables.
#[derive(Debug, Clone, Default)]
pub struct Store {
    vehicles: Arc<MemoryTable<Vehicle>>,
    fuel_records: Arc<MemoryTable<FuelRecord>>,
}

impl Store {
    /// Creates an empty store. Both id counters start at 1.
    pub fn new() -> Self {
        info!("Initializing in-memory store");
        Store::default()
    }

    /// Returns the vehicle repository.
    pub fn vehicles(&self) -> VehicleRepository {
        VehicleRepository::new(Arc::clone(&self.vehicles))
    }

    /// Returns the fuel record repository.
    pub fn fuel_records(&self) -> FuelRecordRepository {
        FuelRecordRepository::new(Arc::clone(&self.fuel_records))
    }

    /// Row counts as `(vehicles, fuel_records)`.
    pub fn counts(&self) -> (usize, usize) {
        (self.vehicles.len(), self.fuel_records.len())
    }
}
