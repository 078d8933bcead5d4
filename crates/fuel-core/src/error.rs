//! # Error Types
//!
//! Domain-specific error types for fuel-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  fuel-core errors (this file)                                          │
//! │  ├── CoreError        - Ledger and reference failures                  │
//! │  └── ValidationError  - Field-level input failures                     │
//! │                                                                         │
//! │  fuel-store errors (separate crate)                                    │
//! │  └── StoreError       - Table lookups, lock failures                   │
//! │                                                                         │
//! │  fuel-api errors (in app)                                              │
//! │  └── ApiError         - What HTTP clients see (serialized)             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ServiceError → ApiError → client  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending field and value in messages
//! 3. No transport concerns here: [`ErrorKind`] is the only classification

use std::fmt;

use thiserror::Error;

// =============================================================================
// Error Kind
// =============================================================================

/// The failure taxonomy exposed to the transport layer.
///
/// The transport decides what each kind means on the wire; this crate only
/// classifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingField,
    EmptyField,
    OutOfRange,
    NotFound,
    InvalidOdometer,
}

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// A referenced vehicle or fuel record does not exist.
    #[error("{entity} with ID {id} not found")]
    NotFound { entity: &'static str, id: u64 },

    /// An odometer reading would break the ordering of a vehicle's ledger.
    ///
    /// ## When This Occurs
    /// ```text
    /// Existing ledger (by timestamp):  10 000 ── 15 000 ── 20 000
    ///                                              │
    /// Update middle record to 21 000  ─────────────┘
    ///      │
    ///      ▼
    /// InvalidOdometer { conflict: AboveNext, limit: 20000, value: 21000 }
    /// ```
    #[error("{conflict}. {} odometer: {limit}, New: {value}", .conflict.limit_label())]
    InvalidOdometer {
        conflict: OdometerConflict,
        limit: u64,
        value: u64,
    },

    /// Validation error (wraps ValidationError).
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Creates a NotFound error for a vehicle.
    pub fn vehicle_not_found(id: u64) -> Self {
        CoreError::NotFound {
            entity: "Vehicle",
            id,
        }
    }

    /// Creates a NotFound error for a fuel record.
    pub fn fuel_record_not_found(id: u64) -> Self {
        CoreError::NotFound {
            entity: "Fuel record",
            id,
        }
    }

    /// Classifies this error for the transport layer.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::NotFound { .. } => ErrorKind::NotFound,
            CoreError::InvalidOdometer { .. } => ErrorKind::InvalidOdometer,
            CoreError::Validation(e) => e.kind(),
        }
    }
}

/// Which neighbouring reading an odometer value collided with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OdometerConflict {
    /// New record below the highest reading already logged for the vehicle.
    BelowMaximum,
    /// Updated reading below the record just before it (by timestamp).
    BelowPrevious,
    /// Updated reading above the record just after it (by timestamp).
    AboveNext,
}

impl OdometerConflict {
    fn limit_label(&self) -> &'static str {
        match self {
            OdometerConflict::BelowMaximum => "Maximum",
            OdometerConflict::BelowPrevious => "Previous",
            OdometerConflict::AboveNext => "Next",
        }
    }
}

impl fmt::Display for OdometerConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            OdometerConflict::BelowMaximum => "Odometer cannot decrease",
            OdometerConflict::BelowPrevious => "Odometer cannot be below previous entry",
            OdometerConflict::AboveNext => "Odometer cannot be above next entry",
        };
        f.write_str(text)
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Raised before any ledger or store work runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is absent.
    #[error("{field} is required and cannot be null")]
    MissingField { field: String },

    /// A text field is empty after trimming.
    #[error("{field} is required and cannot be empty")]
    EmptyField { field: String },

    /// A numeric value is outside its accepted bounds.
    #[error("{field} must be {constraint}")]
    OutOfRange { field: String, constraint: String },
}

impl ValidationError {
    pub fn missing(field: impl Into<String>) -> Self {
        ValidationError::MissingField {
            field: field.into(),
        }
    }

    pub fn empty(field: impl Into<String>) -> Self {
        ValidationError::EmptyField {
            field: field.into(),
        }
    }

    /// Lower-bound violation, e.g. "Year must be 1886 or greater".
    pub fn at_least(field: impl Into<String>, min: impl fmt::Display) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            constraint: format!("{} or greater", min),
        }
    }

    /// Upper-bound violation, e.g. "Year must be 2026 or less".
    pub fn at_most(field: impl Into<String>, max: impl fmt::Display) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            constraint: format!("{} or less", max),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::MissingField { .. } => ErrorKind::MissingField,
            ValidationError::EmptyField { .. } => ErrorKind::EmptyField,
            ValidationError::OutOfRange { .. } => ErrorKind::OutOfRange,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
