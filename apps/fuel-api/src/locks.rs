//! # Per-Vehicle Locks
//!
//! Serializes every ledger operation on one vehicle's records.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  VehicleLocks                                                           │
//! │  Mutex<HashMap<VehicleId, Arc<Mutex<()>>>>                             │
//! │                                                                         │
//! │   create record (vehicle 1) ──► lock(1) ─► validate ─► check ─► insert │
//! │   stats (vehicle 1)         ──► lock(1)   (waits)                       │
//! │   update record (vehicle 2) ──► lock(2)   (runs in parallel)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The map mutex is held only long enough to fetch or insert the per-vehicle
//! handle. Critical sections are synchronous and never await.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use fuel_core::VehicleId;

/// Keyed exclusive sections, one per vehicle.
#[derive(Debug, Default)]
pub struct VehicleLocks {
    handles: Mutex<HashMap<VehicleId, Arc<Mutex<()>>>>,
}

impl VehicleLocks {
    pub fn new() -> Self {
        VehicleLocks::default()
    }

    /// Runs `f` while holding the vehicle's lock.
    pub fn with_vehicle<R>(&self, id: VehicleId, f: impl FnOnce() -> R) -> R {
        let handle = self.handle(id);
        let _guard = handle.lock().unwrap_or_else(PoisonError::into_inner);
        f()
    }

    /// Drops the lock entry of a deleted vehicle.
    ///
    /// Anyone still waiting on the old handle re-checks the vehicle inside
    /// the section and sees it gone.
    pub fn forget(&self, id: VehicleId) {
        self.handles
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id);
    }

    /// Number of vehicles with a live lock entry.
    pub fn len(&self) -> usize {
        self.handles
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn handle(&self, id: VehicleId) -> Arc<Mutex<()>> {
        let mut handles = self.handles.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(handles.entry(id).or_default())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_same_vehicle_sections_do_not_overlap() {
        let locks = Arc::new(VehicleLocks::new());
        let inside = Arc::new(AtomicUsize::new(0));
        let max_seen = Arc::new(AtomicUsize::new(0));

        let workers: Vec<_> = (0..4)
            .map(|_| {
                let locks = Arc::clone(&locks);
                let inside = Arc::clone(&inside);
                let max_seen = Arc::clone(&max_seen);
                thread::spawn(move || {
                    for _ in 0..10 {
                        locks.with_vehicle(VehicleId::new(1), || {
                            let now = inside.fetch_add(1, Ordering::SeqCst) + 1;
                            max_seen.fetch_max(now, Ordering::SeqCst);
                            thread::sleep(Duration::from_millis(1));
                            inside.fetch_sub(1, Ordering::SeqCst);
                        });
                    }
                })
            })
            .collect();

        for worker in workers {
            worker.join().unwrap();
        }
        assert_eq!(max_seen.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_forget_removes_entry() {
        let locks = VehicleLocks::new();
        let value = locks.with_vehicle(VehicleId::new(7), || 42);
        assert_eq!(value, 42);
        assert_eq!(locks.len(), 1);

        locks.forget(VehicleId::new(7));
        assert_eq!(locks.len(), 0);
    }
}
