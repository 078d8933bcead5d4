//! Service layer.
//!
//! Services sit between handlers and the store: they run validation, take
//! the per-vehicle lock, apply the ledger rules and write. Every service
//! call is synchronous.

use fuel_core::{CoreError, ErrorKind};
use fuel_store::StoreError;
use thiserror::Error;

pub mod fuel_service;
pub mod vehicle_service;

pub use fuel_service::FuelService;
pub use vehicle_service::VehicleService;

/// Errors raised by services.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::Core(e) => e.kind(),
            ServiceError::Store(StoreError::NotFound { .. }) => ErrorKind::NotFound,
        }
    }
}

impl From<fuel_core::ValidationError> for ServiceError {
    fn from(err: fuel_core::ValidationError) -> Self {
        ServiceError::Core(err.into())
    }
}

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;
