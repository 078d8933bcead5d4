//! Shared application state.

use std::sync::Arc;

use fuel_core::{ConsumptionPolicy, OdometerLedger};
use fuel_store::Store;

use crate::locks::VehicleLocks;
use crate::services::{FuelService, VehicleService};

/// State handed to every handler. Cloning bumps reference counts only.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Store,
    pub ledger: OdometerLedger,
    pub locks: Arc<VehicleLocks>,
}

impl AppState {
    pub fn new(store: Store, policy: ConsumptionPolicy) -> Self {
        AppState {
            store,
            ledger: OdometerLedger::new(policy),
            locks: Arc::new(VehicleLocks::new()),
        }
    }

    pub fn vehicles(&self) -> VehicleService {
        VehicleService::new(self.store.clone(), Arc::clone(&self.locks))
    }

    pub fn fuel(&self) -> FuelService {
        FuelService::new(self.store.clone(), self.ledger, Arc::clone(&self.locks))
    }
}
