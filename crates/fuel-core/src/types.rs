//! # Domain Types
//!
//! Core domain types used throughout Fuel Ledger.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌─────────────────────┐                    │
//! │  │    Vehicle      │ 1    N │     FuelRecord      │                    │
//! │  │  ─────────────  │◄───────│  ─────────────────  │                    │
//! │  │  id (counter)   │        │  id (counter)       │                    │
//! │  │  brand          │        │  vehicle_id (FK)    │                    │
//! │  │  model          │        │  liters, price      │                    │
//! │  │  year           │        │  total_price (=l×p) │                    │
//! │  └─────────────────┘        │  odometer           │                    │
//! │                             │  timestamp          │                    │
//! │                             └─────────────────────┘                    │
//! │                                                                         │
//! │  Inputs (wire, all Option)      Validated (guaranteed well-formed)     │
//! │  VehicleInput            ──►    ValidatedVehicle                       │
//! │  FuelRecordInput         ──►    NewFuelRecord / FuelReading            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The record holds the relation; a vehicle never tracks its children.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Identifiers
// =============================================================================

/// Identifier of a vehicle, assigned by the store on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleId(u64);

impl VehicleId {
    #[inline]
    pub const fn new(raw: u64) -> Self {
        VehicleId(raw)
    }

    #[inline]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for VehicleId {
    fn from(raw: u64) -> Self {
        VehicleId(raw)
    }
}

impl From<VehicleId> for u64 {
    fn from(id: VehicleId) -> Self {
        id.0
    }
}

/// Identifier of a fuel record, assigned by the store on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FuelRecordId(u64);

impl FuelRecordId {
    #[inline]
    pub const fn new(raw: u64) -> Self {
        FuelRecordId(raw)
    }

    #[inline]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for FuelRecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for FuelRecordId {
    fn from(raw: u64) -> Self {
        FuelRecordId(raw)
    }
}

impl From<FuelRecordId> for u64 {
    fn from(id: FuelRecordId) -> Self {
        id.0
    }
}

// =============================================================================
// Vehicle
// =============================================================================

/// A vehicle whose fill-ups are tracked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Immutable once assigned.
    pub id: VehicleId,
    pub brand: String,
    pub model: String,
    /// Manufacture year.
    pub year: i32,
}

impl Vehicle {
    /// Builds a vehicle from validated fields.
    pub fn new(id: VehicleId, fields: ValidatedVehicle) -> Self {
        Vehicle {
            id,
            brand: fields.brand,
            model: fields.model,
            year: fields.year,
        }
    }

    /// Replaces brand, model and year in place. The id never changes.
    pub fn apply(&mut self, fields: ValidatedVehicle) {
        self.brand = fields.brand;
        self.model = fields.model;
        self.year = fields.year;
    }
}

/// Vehicle fields as they arrive from a client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

/// Vehicle fields that passed validation (trimmed, in range).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedVehicle {
    pub brand: String,
    pub model: String,
    pub year: i32,
}

// =============================================================================
// Fuel Record
// =============================================================================

/// A single fill-up.
///
/// ## Total Price Invariant
/// `total_price == liters * price` for every record built with
/// [`FuelRecord::new`]; [`set_liters`](FuelRecord::set_liters) and
/// [`set_price`](FuelRecord::set_price) recompute it. Only
/// [`FuelRecord::with_total`] may carry an independent total (e.g. a receipt
/// total imported verbatim), and there is no setter for it afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelRecord {
    id: FuelRecordId,
    vehicle_id: VehicleId,
    liters: f64,
    price: f64,
    total_price: f64,
    odometer: u64,
    timestamp: DateTime<Utc>,
}

impl FuelRecord {
    /// Creates a record, deriving the total from liters and unit price.
    pub fn new(
        id: FuelRecordId,
        vehicle_id: VehicleId,
        liters: f64,
        price: f64,
        odometer: u64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        FuelRecord {
            id,
            vehicle_id,
            liters,
            price,
            total_price: liters * price,
            odometer,
            timestamp,
        }
    }

    /// Creates a record with an explicit total price.
    pub fn with_total(
        id: FuelRecordId,
        vehicle_id: VehicleId,
        liters: f64,
        price: f64,
        total_price: f64,
        odometer: u64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        FuelRecord {
            id,
            vehicle_id,
            liters,
            price,
            total_price,
            odometer,
            timestamp,
        }
    }

    #[inline]
    pub fn id(&self) -> FuelRecordId {
        self.id
    }

    #[inline]
    pub fn vehicle_id(&self) -> VehicleId {
        self.vehicle_id
    }

    #[inline]
    pub fn liters(&self) -> f64 {
        self.liters
    }

    #[inline]
    pub fn price(&self) -> f64 {
        self.price
    }

    #[inline]
    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    #[inline]
    pub fn odometer(&self) -> u64 {
        self.odometer
    }

    #[inline]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn set_liters(&mut self, liters: f64) {
        self.liters = liters;
        self.total_price = self.liters * self.price;
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = price;
        self.total_price = self.liters * self.price;
    }

    pub fn set_odometer(&mut self, odometer: u64) {
        self.odometer = odometer;
    }

    /// Applies an edited reading. Vehicle and timestamp stay as they were.
    pub fn apply(&mut self, reading: FuelReading) {
        self.set_liters(reading.liters);
        self.set_price(reading.price);
        self.set_odometer(reading.odometer);
    }
}

/// Fuel record fields as they arrive from a client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelRecordInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liters: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Signed on the wire so negative readings reach validation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub odometer: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// The numeric part of a fill-up, validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelReading {
    pub liters: f64,
    pub price: f64,
    pub odometer: u64,
}

/// A validated fill-up that references an existing vehicle.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFuelRecord {
    pub vehicle_id: VehicleId,
    pub reading: FuelReading,
    /// `None` means "now", resolved when the record is stored.
    pub timestamp: Option<DateTime<Utc>>,
}

// =============================================================================
// Fuel Stats
// =============================================================================

/// Aggregated figures for one vehicle.
///
/// Serialized as `{ "totalLiters", "totalPrice", "avgPer100km" }`; every key
/// is always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelStats {
    pub total_liters: f64,
    pub total_price: f64,
    pub avg_per_100km: f64,
}

// =============================================================================
// Unit Tests
// =============================================================================
