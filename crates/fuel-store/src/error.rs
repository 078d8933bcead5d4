//! # Store Error Types
//!
//! Error types for storage operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  MemoryTable lookup misses                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Names the table and the id                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ServiceError → ApiError (in fuel-api) ← Serialized for clients        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use fuel_core::CoreError;
use thiserror::Error;

/// Storage operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Entity not found in its table.
    ///
    /// ## When This Occurs
    /// - `get_by_id`, `update` or `delete` on an id that was never assigned
    /// - The row was deleted (directly or by a vehicle cascade)
    #[error("{entity} with ID {id} not found")]
    NotFound { entity: &'static str, id: u64 },
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: &'static str, id: impl Into<u64>) -> Self {
        StoreError::NotFound {
            entity,
            id: id.into(),
        }
    }
}

/// A missing row is the same failure the domain reports for a dangling
/// reference, so callers can surface one taxonomy.
impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, id } => CoreError::NotFound { entity, id },
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use fuel_core::{ErrorKind, VehicleId};

    #[test]
    fn test_not_found_converts_to_core_not_found() {
        let err = StoreError::not_found("Vehicle", VehicleId::new(9));
        assert_eq!(err.to_string(), "Vehicle with ID 9 not found");

        let core: CoreError = err.into();
        assert_eq!(core.kind(), ErrorKind::NotFound);
        assert_eq!(core, CoreError::vehicle_not_found(9));
    }
}
