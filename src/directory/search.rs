//! Find-or-insertion-point search
//!
//! Both orderings are sorted slices of arena slot ids. A lookup either
//! lands on the matching position or reports where the key would go.

use std::cmp::Ordering;

/// Outcome of a binary search over one ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Key present at this position
    Found(usize),

    /// Key absent; first position whose element is greater than the key
    Vacant(usize),
}

impl Slot {
    /// Position of a match, if any
    pub fn found(self) -> Option<usize> {
        match self {
            Slot::Found(pos) => Some(pos),
            Slot::Vacant(_) => None,
        }
    }

    /// Insertion point, if the key is absent
    pub fn vacant(self) -> Option<usize> {
        match self {
            Slot::Found(_) => None,
            Slot::Vacant(pos) => Some(pos),
        }
    }
}

/// Binary search `seq`, which must be strictly increasing under `cmp`.
///
/// `cmp` orders an element against the searched key, O(log n) calls.
pub fn locate<T, F>(seq: &[T], cmp: F) -> Slot
where
    F: FnMut(&T) -> Ordering,
{
    match seq.binary_search_by(cmp) {
        Ok(pos) => Slot::Found(pos),
        Err(pos) => Slot::Vacant(pos),
    }
}
