//! # Odometer Ledger
//!
//! Turns one vehicle's fill-ups into consumption statistics and guards the
//! ordering of odometer readings on the write path.
//!
//! ## Consumption Policies
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      ConsumptionPolicy                                  │
//! │                                                                         │
//! │  TankExcluded (default)              AllFuelCounted                     │
//! │  ───────────────────────────         ───────────────────────────        │
//! │  order: timestamp                    order: odometer                    │
//! │  needs ≥ 2 records                   1 record → distance = odometer     │
//! │  distance = max - min                distance = max - min               │
//! │  consumed = Σ liters                 consumed = Σ liters                │
//! │             - most recent fill                                          │
//! │  writes: monotonic                   writes: unchecked                  │
//! │                                                                         │
//! │  avg = round2(consumed / distance × 100)   (0.0 when distance is 0)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The most recent fill under `TankExcluded` is still in the tank: it has
//! been paid for but not yet driven.
//!
//! Callers serialize ledger calls per vehicle; the ledger itself holds no
//! state beyond its policy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult, OdometerConflict};
use crate::types::{FuelRecord, FuelRecordId, FuelStats};

// =============================================================================
// Consumption Policy
// =============================================================================

/// Which aggregation strategy, and its matching write policy, is in force.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConsumptionPolicy {
    /// Timestamp-ordered; the latest fill is excluded; writes must keep
    /// odometer readings monotonic.
    #[default]
    TankExcluded,
    /// Odometer-ordered; every fill is counted; writes are not checked.
    #[serde(rename = "all-fuel")]
    AllFuelCounted,
}

impl ConsumptionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsumptionPolicy::TankExcluded => "tank-excluded",
            ConsumptionPolicy::AllFuelCounted => "all-fuel",
        }
    }

    /// Whether writes are checked against sibling odometer readings.
    pub fn enforces_monotonic_odometer(&self) -> bool {
        matches!(self, ConsumptionPolicy::TankExcluded)
    }
}

impl fmt::Display for ConsumptionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a policy name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown consumption policy '{0}' (expected 'tank-excluded' or 'all-fuel')")]
pub struct UnknownPolicy(pub String);

impl FromStr for ConsumptionPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tank-excluded" => Ok(ConsumptionPolicy::TankExcluded),
            "all-fuel" => Ok(ConsumptionPolicy::AllFuelCounted),
            other => Err(UnknownPolicy(other.to_string())),
        }
    }
}

// =============================================================================
// Update Check Outcome
// =============================================================================

/// Result of a successful update check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateCheck {
    /// Neighbours were found and the new reading fits between them.
    Verified,
    /// The policy does not check writes.
    Unchecked,
    /// The record was not among the vehicle's records, so nothing was
    /// compared. The store and the caller disagree about the record set.
    RecordMissing,
}

// =============================================================================
// Odometer Ledger
// =============================================================================

/// Consumption statistics and odometer rules for one vehicle's records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OdometerLedger {
    policy: ConsumptionPolicy,
}

impl OdometerLedger {
    pub fn new(policy: ConsumptionPolicy) -> Self {
        OdometerLedger { policy }
    }

    pub fn policy(&self) -> ConsumptionPolicy {
        self.policy
    }

    /// Computes totals and average consumption in L/100km.
    ///
    /// Totals are always summed. Zero records yields all zeros.
    pub fn stats(&self, records: &[FuelRecord]) -> FuelStats {
        let total_liters: f64 = records.iter().map(FuelRecord::liters).sum();
        let total_price: f64 = records.iter().map(FuelRecord::total_price).sum();

        let avg_per_100km = match self.policy {
            ConsumptionPolicy::TankExcluded => tank_excluded_average(records, total_liters),
            ConsumptionPolicy::AllFuelCounted => all_fuel_average(records, total_liters),
        };

        FuelStats {
            total_liters,
            total_price,
            avg_per_100km,
        }
    }

    /// Checks a new reading against a vehicle's existing records.
    ///
    /// Under `TankExcluded` the reading must be at least the highest
    /// odometer already logged. An empty history accepts anything.
    pub fn check_create(&self, existing: &[FuelRecord], new_odometer: u64) -> CoreResult<()> {
        if !self.policy.enforces_monotonic_odometer() {
            return Ok(());
        }

        let Some(max) = existing.iter().map(FuelRecord::odometer).max() else {
            return Ok(());
        };

        if new_odometer < max {
            return Err(CoreError::InvalidOdometer {
                conflict: OdometerConflict::BelowMaximum,
                limit: max,
                value: new_odometer,
            });
        }

        Ok(())
    }

    /// Checks an edited reading against its neighbours by timestamp.
    ///
    /// ```text
    ///   previous            updated             next
    ///   ────●──────────────────●──────────────────●────►  time
    ///     10 000    ≤      new odometer     ≤   20 000
    /// ```
    /// Equal timestamps are ordered by id. `existing` includes the record
    /// being updated, carrying its old values.
    pub fn check_update(
        &self,
        existing: &[FuelRecord],
        record_id: FuelRecordId,
        new_odometer: u64,
    ) -> CoreResult<UpdateCheck> {
        if !self.policy.enforces_monotonic_odometer() {
            return Ok(UpdateCheck::Unchecked);
        }

        let mut ordered: Vec<&FuelRecord> = existing.iter().collect();
        ordered.sort_by_key(|r| (r.timestamp(), r.id()));

        let Some(position) = ordered.iter().position(|r| r.id() == record_id) else {
            return Ok(UpdateCheck::RecordMissing);
        };

        if let Some(previous) = position.checked_sub(1).map(|i| ordered[i]) {
            if new_odometer < previous.odometer() {
                return Err(CoreError::InvalidOdometer {
                    conflict: OdometerConflict::BelowPrevious,
                    limit: previous.odometer(),
                    value: new_odometer,
                });
            }
        }

        if let Some(next) = ordered.get(position + 1) {
            if new_odometer > next.odometer() {
                return Err(CoreError::InvalidOdometer {
                    conflict: OdometerConflict::AboveNext,
                    limit: next.odometer(),
                    value: new_odometer,
                });
            }
        }

        Ok(UpdateCheck::Verified)
    }
}

// =============================================================================
// Aggregation Strategies
// =============================================================================

fn tank_excluded_average(records: &[FuelRecord], total_liters: f64) -> f64 {
    if records.len() < 2 {
        return 0.0;
    }

    let (min, max) = odometer_bounds(records);
    let distance = max - min;
    if distance == 0 {
        return 0.0;
    }

    // Latest timestamp wins; the higher id breaks ties.
    let in_tank = records
        .iter()
        .max_by_key(|r| (r.timestamp(), r.id()))
        .map(FuelRecord::liters)
        .unwrap_or(0.0);

    per_100km(total_liters - in_tank, distance)
}

fn all_fuel_average(records: &[FuelRecord], total_liters: f64) -> f64 {
    if records.is_empty() {
        return 0.0;
    }

    let (min, max) = odometer_bounds(records);
    let distance = if records.len() == 1 || min == max {
        max
    } else {
        max - min
    };

    if distance == 0 {
        return 0.0;
    }

    per_100km(total_liters, distance)
}

/// Lowest and highest odometer. Callers guarantee at least one record.
fn odometer_bounds(records: &[FuelRecord]) -> (u64, u64) {
    records
        .iter()
        .map(FuelRecord::odometer)
        .fold((u64::MAX, u64::MIN), |(lo, hi), o| (lo.min(o), hi.max(o)))
}

fn per_100km(liters: f64, distance: u64) -> f64 {
    round2(liters / distance as f64 * 100.0)
}

/// Rounds to 2 decimal places, halves away from zero.
///
/// ```rust
/// use fuel_core::round2;
///
/// assert_eq!(round2(0.125), 0.13);
/// assert_eq!(round2(1.05), 1.05);
/// ```
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// =============================================================================
// Unit Tests
// =============================================================================
