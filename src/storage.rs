//! Registry storage for the service container
//!
//! Uses DashMap for concurrent identity lookups and a separate ordered list
//! so bootstrap can walk registrations in the order they were made.
//!
//! Lock order: `order` before any DashMap shard. Lookups take a shard guard
//! only and release it before returning.

use crate::factory::ServiceSlot;
use crate::{DiError, Result, ServiceIdentity};
use ahash::RandomState;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use parking_lot::RwLock;
use std::sync::Arc;

/// Thread-safe, append-only table of service slots
pub(crate) struct Registry {
    /// Identity -> slot
    slots: DashMap<ServiceIdentity, Arc<ServiceSlot>, RandomState>,
    /// Slots in registration order
    order: RwLock<Vec<Arc<ServiceSlot>>>,
}

impl Registry {
    /// Create new empty storage with optimized shard count.
    ///
    /// Default DashMap uses num_cpus * 4 shards which is overkill for
    /// typical containers with <50 services.
    #[inline]
    pub(crate) fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create with pre-allocated capacity, scaling shards with it.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let shard_amount = if capacity <= 16 {
            8
        } else if capacity <= 64 {
            16
        } else {
            32
        };
        Self {
            slots: DashMap::with_capacity_and_hasher_and_shard_amount(
                capacity,
                RandomState::new(),
                shard_amount,
            ),
            order: RwLock::new(Vec::with_capacity(capacity)),
        }
    }

    /// Insert a slot; duplicates are rejected, never overwritten.
    pub(crate) fn insert(&self, slot: ServiceSlot) -> Result<()> {
        let mut order = self.order.write();
        match self.slots.entry(slot.identity().clone()) {
            Entry::Occupied(entry) => Err(DiError::already_registered(entry.key())),
            Entry::Vacant(entry) => {
                let slot = Arc::new(slot);
                entry.insert(Arc::clone(&slot));
                order.push(slot);
                Ok(())
            }
        }
    }

    #[inline]
    pub(crate) fn get(&self, identity: &ServiceIdentity) -> Option<Arc<ServiceSlot>> {
        self.slots.get(identity).map(|entry| Arc::clone(entry.value()))
    }

    #[inline]
    pub(crate) fn contains(&self, identity: &ServiceIdentity) -> bool {
        self.slots.contains_key(identity)
    }

    /// Registration-ordered copy of all slots, taken without holding any lock afterwards
    pub(crate) fn snapshot(&self) -> Vec<Arc<ServiceSlot>> {
        self.order.read().clone()
    }

    pub(crate) fn identities(&self) -> Vec<ServiceIdentity> {
        self.order
            .read()
            .iter()
            .map(|slot| slot.identity().clone())
            .collect()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("count", &self.len())
            .finish()
    }
}
