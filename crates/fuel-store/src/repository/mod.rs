//! # Repository Module
//!
//! Typed access to the vehicle and fuel record tables.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Service                                                               │
//! │       │                                                                 │
//! │       │  store.fuel_records().list_by_vehicle(id)                      │
//! │       ▼                                                                 │
//! │  FuelRecordRepository                                                  │
//! │  ├── create(&self, draft)                                              │
//! │  ├── get_by_id(&self, id)                                              │
//! │  ├── list_by_vehicle(&self, vehicle_id)                                │
//! │  └── update(&self, record)                                             │
//! │       │                                                                 │
//! │       │  EntityStore<FuelRecord>                                        │
//! │       ▼                                                                 │
//! │  MemoryTable<FuelRecord>                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`VehicleRepository`] - Vehicle CRUD, implements `VehicleLookup`
//! - [`FuelRecordRepository`] - Fuel record CRUD and per-vehicle listing

pub mod fuel_record;
pub mod vehicle;

pub use fuel_record::FuelRecordRepository;
pub use vehicle::VehicleRepository;
