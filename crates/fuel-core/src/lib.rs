//! # fuel-core: Pure Business Logic for Fuel Ledger
//!
//! This crate is the **heart** of Fuel Ledger. It validates vehicles and
//! fuel records and turns a vehicle's fill-up history into consumption
//! statistics, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Fuel Ledger Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              fuel-cli / any HTTP client                         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON over HTTP                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    fuel-api (axum routes + services)            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ fuel-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌────────────┐  ┌───────────┐                 │   │
//! │  │   │   types   │  │ validation │  │  ledger   │                 │   │
//! │  │   │  Vehicle  │  │  vehicles  │  │ FuelStats │                 │   │
//! │  │   │FuelRecord │  │  readings  │  │ odometer  │                 │   │
//! │  │   └───────────┘  └────────────┘  └───────────┘                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                fuel-store (in-memory tables)                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Vehicle, FuelRecord, FuelStats, ids)
//! - [`error`] - Domain error types and the error-kind taxonomy
//! - [`validation`] - Field-level rules for incoming writes
//! - [`ledger`] - Consumption statistics and odometer monotonicity
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::{Duration, Utc};
//! use fuel_core::{ConsumptionPolicy, FuelRecord, FuelRecordId, OdometerLedger, VehicleId};
//!
//! let now = Utc::now();
//! let vehicle = VehicleId::new(1);
//! let records = vec![
//!     FuelRecord::new(FuelRecordId::new(1), vehicle, 40.0, 1.30, 10_000, now - Duration::days(2)),
//!     FuelRecord::new(FuelRecordId::new(2), vehicle, 35.0, 1.35, 15_000, now - Duration::days(1)),
//!     FuelRecord::new(FuelRecordId::new(3), vehicle, 30.0, 1.40, 20_000, now),
//! ];
//!
//! let stats = OdometerLedger::new(ConsumptionPolicy::TankExcluded).stats(&records);
//! assert_eq!(stats.avg_per_100km, 0.75);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod ledger;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ErrorKind, OdometerConflict, ValidationError};
pub use ledger::{round2, ConsumptionPolicy, OdometerLedger, UnknownPolicy, UpdateCheck};
pub use types::*;
pub use validation::{RecordValidator, ValidationResult, VehicleLookup};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Earliest accepted manufacture year.
///
/// The Benz Patent-Motorwagen dates from 1886; nothing older is a car.
pub const MIN_MANUFACTURE_YEAR: i32 = 1886;
