//! Record arena
//!
//! Owns every live record exactly once, densely packed. Both orderings
//! refer to records by slot id, so a salary change is a single write here.

use std::ops::{Index, IndexMut};

use super::Record;

/// Index of a record inside the arena
pub(crate) type SlotId = usize;

pub(crate) struct Arena {
    records: Vec<Record>,
}

impl Arena {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    /// Store a record, returning its slot
    pub(crate) fn insert(&mut self, record: Record) -> SlotId {
        self.records.push(record);
        self.records.len() - 1
    }

    /// Take the record at `id` out of the arena.
    ///
    /// The last record is moved into the hole, so its slot id becomes `id`.
    /// Callers repoint references to the last slot before calling this.
    pub(crate) fn swap_remove(&mut self, id: SlotId) -> Record {
        self.records.swap_remove(id)
    }

    /// Live records in slot order
    pub(crate) fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }
}

impl Index<SlotId> for Arena {
    type Output = Record;

    fn index(&self, id: SlotId) -> &Record {
        &self.records[id]
    }
}

impl IndexMut<SlotId> for Arena {
    fn index_mut(&mut self, id: SlotId) -> &mut Record {
        &mut self.records[id]
    }
}
