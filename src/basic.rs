//! Basic table: one slot per bucket and no collision resolution, kept as the
//! degenerate baseline the chained table improves on.
//!
//! Two distinct keys landing in the same bucket cannot coexist: the later
//! insert evicts the earlier pair after emitting a warning. That data loss is
//! the documented policy of this variant, not a defect to repair; the chained
//! table is the design with collision handling, and the comparison between
//! the two is part of this crate's test surface.

use crate::error::TableError;
use crate::hash;
use log::warn;

/// One stored key/value pair.
#[derive(Debug)]
struct Pair {
    key: String,
    value: String,
}

/// A string-keyed hash table with exactly one slot per bucket.
///
/// Every key maps to one slot via the fixed djb2 hash; a slot holds at most
/// one pair. There is no resize: capacity is fixed for the table's lifetime.
#[derive(Debug)]
pub struct BasicHashTable {
    slots: Vec<Option<Pair>>, // length is the capacity
}

impl BasicHashTable {
    /// Creates a table with `capacity` empty slots.
    ///
    /// Rejects a zero capacity before allocating anything.
    pub fn new(capacity: usize) -> Result<Self, TableError> {
        if capacity == 0 {
            return Err(TableError::InvalidCapacity);
        }
        Ok(Self {
            slots: (0..capacity).map(|_| None).collect(),
        })
    }

    /// Number of buckets.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of stored key/value pairs.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_none())
    }

    /// Inserts `key` -> `value`, overwriting whatever the slot holds.
    ///
    /// A same-key overwrite replaces silently. A different-key overwrite is
    /// a collision with no chain to fall back on: it warns, then proceeds to
    /// evict the old pair. The evicted key reads as absent afterwards.
    pub fn insert(&mut self, key: String, value: String) {
        let index = hash::bucket_index(&key, self.slots.len());
        if let Some(old) = &self.slots[index] {
            if old.key != key {
                warn!(
                    "overwriting key {:?} with different key {:?} in bucket {index}",
                    old.key, key
                );
            }
        }
        self.slots[index] = Some(Pair { key, value });
    }

    /// Looks up the value stored for `key`.
    ///
    /// The slot's value is returned only when the stored key matches exactly;
    /// a colliding different key reads as absent rather than surfacing
    /// another key's value.
    pub fn get(&self, key: &str) -> Option<&str> {
        let index = hash::bucket_index(key, self.slots.len());
        match &self.slots[index] {
            Some(pair) if pair.key == key => Some(&pair.value),
            _ => None,
        }
    }

    /// Removes the pair stored for `key`, dropping its strings.
    ///
    /// An empty slot, or a slot occupied by a different key, reports
    /// [`TableError::KeyNotFound`] without touching the table.
    pub fn remove(&mut self, key: &str) -> Result<(), TableError> {
        let index = hash::bucket_index(key, self.slots.len());
        match &self.slots[index] {
            Some(pair) if pair.key == key => {
                self.slots[index] = None;
                Ok(())
            }
            _ => Err(TableError::KeyNotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Invariant: construction rejects zero slots; one slot is valid.
    #[test]
    fn zero_capacity_rejected() {
        assert_eq!(
            BasicHashTable::new(0).unwrap_err(),
            TableError::InvalidCapacity
        );
        let table = BasicHashTable::new(1).unwrap();
        assert_eq!(table.capacity(), 1);
        assert!(table.is_empty());
    }

    /// Invariant: insert-then-get round trips while no collision occurs.
    #[test]
    fn insert_then_get_round_trip() {
        let mut table = BasicHashTable::new(16).unwrap();
        table.insert("line".to_string(), "Here today...".to_string());
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("line"), Some("Here today..."));
        assert_eq!(table.get("other"), None);
    }

    /// Invariant: a same-key overwrite replaces the value without growing
    /// the table.
    #[test]
    fn same_key_overwrite_replaces() {
        let mut table = BasicHashTable::new(16).unwrap();
        table.insert("line".to_string(), "first".to_string());
        table.insert("line".to_string(), "second".to_string());
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("line"), Some("second"));
    }

    /// Invariant: a different-key collision evicts the old pair (the
    /// documented data-loss policy); the evicted key reads as absent. "bar"
    /// and "baz" share bucket 2 at capacity 4.
    #[test]
    fn colliding_key_evicts_old_pair() {
        let mut table = BasicHashTable::new(4).unwrap();
        table.insert("bar".to_string(), "2".to_string());
        table.insert("baz".to_string(), "3".to_string());
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("baz"), Some("3"));
        assert_eq!(table.get("bar"), None);
    }

    /// Invariant: removal clears a matching slot; a miss — empty slot or a
    /// colliding different key — reports KeyNotFound and mutates nothing.
    #[test]
    fn remove_hits_and_misses() {
        let mut table = BasicHashTable::new(4).unwrap();
        assert_eq!(table.remove("bar"), Err(TableError::KeyNotFound));

        table.insert("bar".to_string(), "2".to_string());
        // "baz" hashes to the occupied slot but the stored key differs.
        assert_eq!(table.remove("baz"), Err(TableError::KeyNotFound));
        assert_eq!(table.get("bar"), Some("2"));

        table.remove("bar").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.get("bar"), None);
    }
}
