//! # fuel-store: Storage Layer for Fuel Ledger
//!
//! This crate keeps vehicles and fuel records in process memory and hands
//! out ids. It knows nothing about validation or odometer rules.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Fuel Ledger Data Flow                            │
//! │                                                                         │
//! │  fuel-api service (create_fuel_record)                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    fuel-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────────┐                  │   │
//! │  │   │     Store     │    │    Repositories    │                  │   │
//! │  │   │  (store.rs)   │    │                    │                  │   │
//! │  │   │               │    │ VehicleRepository  │                  │   │
//! │  │   │ Arc<tables>   │◄───│ FuelRecordRepo     │                  │   │
//! │  │   └───────┬───────┘    └────────────────────┘                  │   │
//! │  │           │                                                     │   │
//! │  │   ┌───────▼─────────────────────────────────┐                  │   │
//! │  │   │ MemoryTable<T> (table.rs)               │                  │   │
//! │  │   │ RwLock<BTreeMap> + AtomicU64 counter    │                  │   │
//! │  │   └─────────────────────────────────────────┘                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The shared `Store` handle
//! - [`table`] - `Entity`, `EntityStore` and the generic `MemoryTable`
//! - [`error`] - Store error types
//! - [`repository`] - Vehicle and fuel record repositories
//!
//! ## Usage
//!
//! ```rust
//! use fuel_core::{FuelReading, NewFuelRecord, ValidatedVehicle};
//! use fuel_store::Store;
//!
//! let store = Store::new();
//! let car = store.vehicles().create(ValidatedVehicle {
//!     brand: "Skoda".into(),
//!     model: "Octavia".into(),
//!     year: 2019,
//! });
//! store.fuel_records().create(NewFuelRecord {
//!     vehicle_id: car.id,
//!     reading: FuelReading { liters: 40.0, price: 1.30, odometer: 10_000 },
//!     timestamp: None,
//! });
//! assert_eq!(store.fuel_records().list_by_vehicle(car.id).len(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod repository;
pub mod store;
pub mod table;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use store::Store;
pub use table::{Entity, EntityStore, MemoryTable};

// Repository re-exports for convenience
pub use repository::fuel_record::FuelRecordRepository;
pub use repository::vehicle::VehicleRepository;
