use std::collections::HashMap;

use parking_lot::RwLock;

use crate::error::{Result, RummageError};
use crate::index::store::IndexStore;

/// Name mapping and initialization flags, guarded by the registry lock
struct SlotTable {
    mapping: HashMap<String, usize>,
    initialized: Vec<bool>,
}

/// Result of a create-index call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Allocation {
    /// The name already mapped to this slot
    Existing(usize),
    /// A free slot was claimed for the name
    Allocated(usize),
}

impl Allocation {
    pub fn slot(&self) -> usize {
        match self {
            Allocation::Existing(slot) | Allocation::Allocated(slot) => *slot,
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, Allocation::Allocated(_))
    }
}

/// Fixed-capacity pool of index slots.
///
/// Two lock tiers: the registry lock covers the name mapping and the
/// initialization flags, and every slot's [`IndexStore`] has its own lock.
/// No method here holds the registry lock while touching a store.
pub struct IndexRegistry {
    table: RwLock<SlotTable>,
    stores: Box<[IndexStore]>,
}

impl IndexRegistry {
    pub fn new(capacity: usize) -> Self {
        let stores = (0..capacity).map(|_| IndexStore::new()).collect();
        Self {
            table: RwLock::new(SlotTable {
                mapping: HashMap::with_capacity(capacity),
                initialized: vec![false; capacity],
            }),
            stores,
        }
    }

    pub fn capacity(&self) -> usize {
        self.stores.len()
    }

    /// Map `name` to a slot, claiming the first uninitialized one if needed
    pub fn create(&self, name: &str) -> Result<Allocation> {
        if let Some(slot) = self.resolve_slot(name) {
            return Ok(Allocation::Existing(slot));
        }

        let mut table = self.table.write();
        // Another caller may have allocated the name between the lookup and the write lock
        if let Some(&slot) = table.mapping.get(name) {
            return Ok(Allocation::Existing(slot));
        }

        let slot = table
            .initialized
            .iter()
            .position(|initialized| !initialized)
            .ok_or(RummageError::CapacityExceeded {
                capacity: self.capacity(),
            })?;
        table.initialized[slot] = true;
        table.mapping.insert(name.to_string(), slot);
        Ok(Allocation::Allocated(slot))
    }

    /// Look up the slot for `name` without allocating
    pub fn resolve_slot(&self, name: &str) -> Option<usize> {
        self.table.read().mapping.get(name).copied()
    }

    /// Store backing `name`, if the name is allocated
    pub fn resolve(&self, name: &str) -> Option<&IndexStore> {
        self.resolve_slot(name).map(|slot| &self.stores[slot])
    }

    pub fn is_initialized(&self, slot: usize) -> bool {
        self.table
            .read()
            .initialized
            .get(slot)
            .copied()
            .unwrap_or(false)
    }

    pub fn store(&self, slot: usize) -> Option<&IndexStore> {
        self.stores.get(slot)
    }

    /// Number of slots currently allocated
    pub fn allocated(&self) -> usize {
        self.table.read().mapping.len()
    }

    /// Allocated index names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.table.read().mapping.keys().cloned().collect();
        names.sort();
        names
    }
}
