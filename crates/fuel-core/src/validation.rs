//! # Validation Module
//!
//! Field-level rules applied to every write before it reaches the ledger.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Transport (axum extractors)                                  │
//! │  └── JSON shape and types (a string where a number belongs)            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── required fields present                                           │
//! │  ├── brand/model non-empty after trim                                  │
//! │  ├── year, liters, price, odometer in range (and a finite total)       │
//! │  └── referenced vehicle exists (via VehicleLookup)                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: OdometerLedger                                               │
//! │  └── readings consistent with sibling records                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every function here is pure: the input is borrowed, never modified, and
//! the result is either a normalized value or the first failure found.

use chrono::{Datelike, Utc};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{
    FuelReading, FuelRecordInput, NewFuelRecord, ValidatedVehicle, Vehicle, VehicleId,
    VehicleInput,
};
use crate::MIN_MANUFACTURE_YEAR;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Vehicle Lookup
// =============================================================================

/// Read access to vehicles, implemented by whichever store is in use.
pub trait VehicleLookup {
    fn exists(&self, id: VehicleId) -> bool;

    fn get(&self, id: VehicleId) -> CoreResult<Vehicle>;
}

// =============================================================================
// Record Validator
// =============================================================================

/// Validates vehicle and fuel record input.
///
/// The current year is captured at construction so a validator gives the
/// same answer for the same input for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordValidator {
    current_year: i32,
}

impl RecordValidator {
    /// Validator bounded by the current UTC calendar year.
    pub fn new() -> Self {
        RecordValidator {
            current_year: Utc::now().year(),
        }
    }

    /// Validator bounded by a fixed year (tests, replays).
    pub fn with_current_year(current_year: i32) -> Self {
        RecordValidator { current_year }
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    /// Validates vehicle input.
    ///
    /// ## Rules
    /// - Brand and model required, non-empty after trim (returned trimmed)
    /// - Year required, between 1886 and the current year inclusive
    ///
    /// ## Example
    /// ```rust
    /// use fuel_core::{RecordValidator, VehicleInput};
    ///
    /// let validator = RecordValidator::with_current_year(2026);
    /// let input = VehicleInput {
    ///     brand: Some("  Toyota ".into()),
    ///     model: Some("Corolla".into()),
    ///     year: Some(2020),
    /// };
    /// let vehicle = validator.validate_vehicle(&input).unwrap();
    /// assert_eq!(vehicle.brand, "Toyota");
    /// ```
    pub fn validate_vehicle(&self, input: &VehicleInput) -> ValidationResult<ValidatedVehicle> {
        let brand = required_text(input.brand.as_deref(), "Brand")?;
        let model = required_text(input.model.as_deref(), "Model")?;
        let year = self.validate_year(input.year)?;

        Ok(ValidatedVehicle { brand, model, year })
    }

    fn validate_year(&self, year: Option<i32>) -> ValidationResult<i32> {
        let year = year.ok_or_else(|| ValidationError::missing("Year"))?;

        if year < MIN_MANUFACTURE_YEAR {
            return Err(ValidationError::at_least("Year", MIN_MANUFACTURE_YEAR));
        }
        if year > self.current_year {
            return Err(ValidationError::at_most("Year", self.current_year));
        }

        Ok(year)
    }

    /// Validates the numeric part of a fill-up (liters, price, odometer).
    ///
    /// Used directly on the update path, where the owning vehicle is
    /// already fixed.
    pub fn validate_fuel_reading(&self, input: &FuelRecordInput) -> ValidationResult<FuelReading> {
        let liters = non_negative(input.liters, "Liters")?;
        let price = non_negative(input.price, "Price")?;
        if !(liters * price).is_finite() {
            return Err(ValidationError::OutOfRange {
                field: "Total price".to_string(),
                constraint: "a finite number".to_string(),
            });
        }

        let odometer = input
            .odometer
            .ok_or_else(|| ValidationError::missing("Odometer"))?;
        let odometer =
            u64::try_from(odometer).map_err(|_| ValidationError::at_least("Odometer", 0))?;

        Ok(FuelReading {
            liters,
            price,
            odometer,
        })
    }

    /// Validates a new fill-up, including its vehicle reference.
    ///
    /// ## Check Order
    /// ```text
    /// liters ─► price ─► total ─► odometer ─► vehicle id present? ─► vehicle exists?
    ///                                               │                     │
    ///                                          MissingField            NotFound
    /// ```
    /// The null check always precedes the lookup, so the lookup is never
    /// consulted for an absent id.
    pub fn validate_fuel_record<L>(
        &self,
        input: &FuelRecordInput,
        vehicles: &L,
    ) -> CoreResult<NewFuelRecord>
    where
        L: VehicleLookup + ?Sized,
    {
        let reading = self.validate_fuel_reading(input)?;
        let vehicle_id = validate_vehicle_reference(input.vehicle_id, vehicles)?;

        Ok(NewFuelRecord {
            vehicle_id,
            reading,
            timestamp: input.timestamp,
        })
    }
}

impl Default for RecordValidator {
    fn default() -> Self {
        RecordValidator::new()
    }
}

// =============================================================================
// Field Validators
// =============================================================================

/// Resolves a vehicle id against the lookup.
pub fn validate_vehicle_reference<L>(id: Option<u64>, vehicles: &L) -> CoreResult<VehicleId>
where
    L: VehicleLookup + ?Sized,
{
    let id = id.ok_or_else(|| ValidationError::missing("Vehicle ID"))?;
    let id = VehicleId::new(id);

    if !vehicles.exists(id) {
        return Err(CoreError::vehicle_not_found(id.get()));
    }

    Ok(id)
}

fn required_text(value: Option<&str>, field: &str) -> ValidationResult<String> {
    let value = value.ok_or_else(|| ValidationError::missing(field))?;
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::empty(field));
    }

    Ok(value.to_string())
}

fn non_negative(value: Option<f64>, field: &str) -> ValidationResult<f64> {
    let value = value.ok_or_else(|| ValidationError::missing(field))?;

    if !value.is_finite() {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            constraint: "a finite number".to_string(),
        });
    }
    if value < 0.0 {
        return Err(ValidationError::at_least(field, 0));
    }

    Ok(value)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::collections::BTreeMap;

    use super::*;
    use crate::error::ErrorKind;

    /// Lookup backed by a map that counts how often it was asked.
    struct MapLookup {
        vehicles: BTreeMap<VehicleId, Vehicle>,
        calls: Cell<usize>,
    }

    impl MapLookup {
        fn with_vehicle(id: u64) -> Self {
            let mut vehicles = BTreeMap::new();
            vehicles.insert(
                VehicleId::new(id),
                Vehicle {
                    id: VehicleId::new(id),
                    brand: "Toyota".into(),
                    model: "Corolla".into(),
                    year: 2020,
                },
            );
            MapLookup {
                vehicles,
                calls: Cell::new(0),
            }
        }
    }

    impl VehicleLookup for MapLookup {
        fn exists(&self, id: VehicleId) -> bool {
            self.calls.set(self.calls.get() + 1);
            self.vehicles.contains_key(&id)
        }

        fn get(&self, id: VehicleId) -> CoreResult<Vehicle> {
            self.vehicles
                .get(&id)
                .cloned()
                .ok_or_else(|| CoreError::vehicle_not_found(id.get()))
        }
    }

    fn vehicle_input(brand: &str, model: &str, year: i32) -> VehicleInput {
        VehicleInput {
            brand: Some(brand.into()),
            model: Some(model.into()),
            year: Some(year),
        }
    }

    fn fuel_input(vehicle_id: Option<u64>, liters: f64, price: f64, odometer: i64) -> FuelRecordInput {
        FuelRecordInput {
            vehicle_id,
            liters: Some(liters),
            price: Some(price),
            odometer: Some(odometer),
            timestamp: None,
        }
    }

    #[test]
    fn test_validate_vehicle_year_bounds() {
        let v = RecordValidator::with_current_year(2026);

        assert!(v.validate_vehicle(&vehicle_input("Benz", "Motorwagen", 1886)).is_ok());
        assert!(v.validate_vehicle(&vehicle_input("Tesla", "Model 3", 2026)).is_ok());

        let err = v
            .validate_vehicle(&vehicle_input("Benz", "Motorwagen", 1885))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        assert_eq!(err.to_string(), "Year must be 1886 or greater");

        let err = v
            .validate_vehicle(&vehicle_input("Tesla", "Model Y", 2027))
            .unwrap_err();
        assert_eq!(err.to_string(), "Year must be 2026 or less");
    }

    #[test]
    fn test_validate_vehicle_text_fields() {
        let v = RecordValidator::with_current_year(2026);

        let ok = v
            .validate_vehicle(&vehicle_input("  Toyota  ", " Corolla", 2020))
            .unwrap();
        assert_eq!(ok.brand, "Toyota");
        assert_eq!(ok.model, "Corolla");

        let err = v.validate_vehicle(&vehicle_input("   ", "Corolla", 2020)).unwrap_err();
        assert_eq!(err, ValidationError::empty("Brand"));

        let err = v
            .validate_vehicle(&VehicleInput {
                brand: Some("Toyota".into()),
                model: None,
                year: Some(2020),
            })
            .unwrap_err();
        assert_eq!(err, ValidationError::missing("Model"));

        let err = v
            .validate_vehicle(&VehicleInput {
                year: None,
                ..vehicle_input("Toyota", "Corolla", 2020)
            })
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingField);
    }

    #[test]
    fn test_validate_vehicle_does_not_touch_input() {
        let v = RecordValidator::with_current_year(2026);
        let input = vehicle_input("  Toyota ", "Corolla", 2020);
        let before = input.clone();
        let _ = v.validate_vehicle(&input);
        assert_eq!(input, before);
    }

    #[test]
    fn test_validate_fuel_reading_ranges() {
        let v = RecordValidator::with_current_year(2026);

        let ok = v.validate_fuel_reading(&fuel_input(None, 0.0, 0.0, 0)).unwrap();
        assert_eq!(ok.odometer, 0);

        let err = v.validate_fuel_reading(&fuel_input(None, -1.0, 1.3, 100)).unwrap_err();
        assert_eq!(err.to_string(), "Liters must be 0 or greater");

        let err = v.validate_fuel_reading(&fuel_input(None, 40.0, -0.01, 100)).unwrap_err();
        assert_eq!(err.to_string(), "Price must be 0 or greater");

        let err = v.validate_fuel_reading(&fuel_input(None, 40.0, 1.3, -5)).unwrap_err();
        assert_eq!(err.to_string(), "Odometer must be 0 or greater");

        let err = v
            .validate_fuel_reading(&fuel_input(None, f64::NAN, 1.3, 5))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
    }

    #[test]
    fn test_validate_fuel_reading_missing_fields() {
        let v = RecordValidator::with_current_year(2026);
        let err = v
            .validate_fuel_reading(&FuelRecordInput {
                liters: Some(10.0),
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(err, ValidationError::missing("Price"));
    }

    #[test]
    fn test_missing_vehicle_id_checked_before_lookup() {
        let v = RecordValidator::with_current_year(2026);
        let lookup = MapLookup::with_vehicle(1);

        let err = v
            .validate_fuel_record(&fuel_input(None, 40.0, 1.3, 10_000), &lookup)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingField);
        assert_eq!(lookup.calls.get(), 0);
    }

    #[test]
    fn test_unknown_vehicle_is_not_found() {
        let v = RecordValidator::with_current_year(2026);
        let lookup = MapLookup::with_vehicle(1);

        let err = v
            .validate_fuel_record(&fuel_input(Some(99), 40.0, 1.3, 10_000), &lookup)
            .unwrap_err();
        assert_eq!(err, CoreError::vehicle_not_found(99));
        assert_eq!(lookup.calls.get(), 1);
    }

    #[test]
    fn test_valid_fuel_record() {
        let v = RecordValidator::with_current_year(2026);
        let lookup = MapLookup::with_vehicle(1);

        let record = v
            .validate_fuel_record(&fuel_input(Some(1), 40.0, 1.3, 10_000), &lookup)
            .unwrap();
        assert_eq!(record.vehicle_id, VehicleId::new(1));
        assert_eq!(record.reading.odometer, 10_000);
        assert!(record.timestamp.is_none());
        assert!(lookup.get(VehicleId::new(1)).is_ok());
    }

    #[test]
    fn test_total_price_overflow_rejected() {
        let v = RecordValidator::with_current_year(2026);

        let err = v
            .validate_fuel_reading(&fuel_input(Some(1), 1e200, 1e200, 10_000))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        assert_eq!(err.to_string(), "Total price must be a finite number");

        // Large but representable products still pass.
        let reading = v
            .validate_fuel_reading(&fuel_input(Some(1), 1e150, 1e150, 10_000))
            .unwrap();
        assert!((reading.liters * reading.price).is_finite());
    }
}
