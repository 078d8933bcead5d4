//! # In-Memory Tables
//!
//! A generic table keyed by a store-assigned id, plus the `EntityStore`
//! contract the repositories are written against.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        MemoryTable<T>                                   │
//! │                                                                         │
//! │   next_id: AtomicU64 ──fetch_add(1)──► 1, 2, 3, ...  (never reused)    │
//! │                                                                         │
//! │   rows: RwLock<BTreeMap<T::Id, T>>                                     │
//! │   ┌──────┬──────────────────────────────┐                              │
//! │   │  id  │  row                         │  readers share the lock,     │
//! │   ├──────┼──────────────────────────────┤  writers take it alone       │
//! │   │  1   │  FuelRecord { vehicle: 1 }   │                              │
//! │   │  2   │  FuelRecord { vehicle: 1 }   │  iteration is id order       │
//! │   │  4   │  FuelRecord { vehicle: 2 }   │                              │
//! │   └──────┴──────────────────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A panic while a lock is held poisons it. Every write here replaces a whole
//! row in one step, so the map is never half-updated and the guard is
//! recovered rather than reported.

use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use fuel_core::{FuelRecord, FuelRecordId, NewFuelRecord, ValidatedVehicle, Vehicle, VehicleId};

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Entity
// =============================================================================

/// A row type that can live in a [`MemoryTable`].
pub trait Entity: Clone + Send + Sync + 'static {
    /// Store-assigned identifier.
    type Id: Copy + Ord + fmt::Debug + From<u64> + Into<u64> + Send + Sync;

    /// Everything needed to build a row except its id.
    type Draft;

    /// Id of the owning entity, for `list_by_parent`.
    type Parent: Copy + Eq;

    /// Human-readable name used in NotFound messages.
    const NAME: &'static str;

    fn from_draft(id: Self::Id, draft: Self::Draft) -> Self;

    fn id(&self) -> Self::Id;

    fn parent(&self) -> Option<Self::Parent>;
}

impl Entity for Vehicle {
    type Id = VehicleId;
    type Draft = ValidatedVehicle;
    type Parent = Infallible;

    const NAME: &'static str = "Vehicle";

    fn from_draft(id: VehicleId, draft: ValidatedVehicle) -> Self {
        Vehicle::new(id, draft)
    }

    fn id(&self) -> VehicleId {
        self.id
    }

    fn parent(&self) -> Option<Infallible> {
        None
    }
}

impl Entity for FuelRecord {
    type Id = FuelRecordId;
    type Draft = NewFuelRecord;
    type Parent = VehicleId;

    const NAME: &'static str = "Fuel record";

    fn from_draft(id: FuelRecordId, draft: NewFuelRecord) -> Self {
        FuelRecord::new(
            id,
            draft.vehicle_id,
            draft.reading.liters,
            draft.reading.price,
            draft.reading.odometer,
            draft.timestamp.unwrap_or_else(Utc::now),
        )
    }

    fn id(&self) -> FuelRecordId {
        FuelRecord::id(self)
    }

    fn parent(&self) -> Option<VehicleId> {
        Some(self.vehicle_id())
    }
}

// =============================================================================
// Entity Store
// =============================================================================

/// CRUD by id plus list-by-parent. Lists are ordered by id.
pub trait EntityStore<T: Entity>: Send + Sync {
    /// Assigns the next id and inserts the row.
    fn create(&self, draft: T::Draft) -> T;

    fn get_by_id(&self, id: T::Id) -> StoreResult<T>;

    fn list(&self) -> Vec<T>;

    fn list_by_parent(&self, parent: T::Parent) -> Vec<T>;

    /// Replaces the row stored under `id`. The stored row keeps `id`
    /// whatever id `value` carries.
    fn update(&self, id: T::Id, value: T) -> StoreResult<T>;

    fn delete(&self, id: T::Id) -> StoreResult<()>;

    /// Removes every row owned by `parent`, returning how many went.
    fn delete_by_parent(&self, parent: T::Parent) -> usize;

    fn exists_by_id(&self, id: T::Id) -> bool;
}

// =============================================================================
// Memory Table
// =============================================================================

/// Thread-safe table of `T` rows.
pub struct MemoryTable<T: Entity> {
    rows: RwLock<BTreeMap<T::Id, T>>,
    next_id: AtomicU64,
}

impl<T: Entity> MemoryTable<T> {
    pub fn new() -> Self {
        MemoryTable {
            rows: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn next_id(&self) -> T::Id {
        T::Id::from(self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<T::Id, T>> {
        self.rows.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<T::Id, T>> {
        self.rows.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Entity> Default for MemoryTable<T> {
    fn default() -> Self {
        MemoryTable::new()
    }
}

impl<T: Entity> fmt::Debug for MemoryTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryTable")
            .field("entity", &T::NAME)
            .field("rows", &self.len())
            .field("next_id", &self.next_id.load(Ordering::SeqCst))
            .finish()
    }
}

impl<T: Entity> EntityStore<T> for MemoryTable<T> {
    fn create(&self, draft: T::Draft) -> T {
        let id = self.next_id();
        let row = T::from_draft(id, draft);
        self.write().insert(id, row.clone());
        row
    }

    fn get_by_id(&self, id: T::Id) -> StoreResult<T> {
        self.read()
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(T::NAME, id))
    }

    fn list(&self) -> Vec<T> {
        self.read().values().cloned().collect()
    }

    fn list_by_parent(&self, parent: T::Parent) -> Vec<T> {
        self.read()
            .values()
            .filter(|row| row.parent() == Some(parent))
            .cloned()
            .collect()
    }

    fn update(&self, id: T::Id, value: T) -> StoreResult<T> {
        let mut rows = self.write();
        let slot = rows
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found(T::NAME, id))?;
        *slot = value;
        Ok(slot.clone())
    }

    fn delete(&self, id: T::Id) -> StoreResult<()> {
        self.write()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found(T::NAME, id))
    }

    fn delete_by_parent(&self, parent: T::Parent) -> usize {
        let mut rows = self.write();
        let before = rows.len();
        rows.retain(|_, row| row.parent() != Some(parent));
        before - rows.len()
    }

    fn exists_by_id(&self, id: T::Id) -> bool {
        self.read().contains_key(&id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
