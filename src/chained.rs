//! Chained table: one singly-linked collision chain per bucket, entries in a
//! slot arena, growth only through an explicit consuming resize.

use crate::error::TableError;
use crate::hash;
use log::debug;
use slotmap::{DefaultKey, SlotMap};

/// One key/value pair in a bucket chain.
///
/// The accumulator is computed once on creation; every bucket index the entry
/// ever occupies is `hash % capacity`, so relocation never re-reads the key
/// bytes.
#[derive(Debug)]
struct Entry {
    key: String,
    value: String,
    hash: u64,
    next: Option<DefaultKey>, // successor in this bucket's chain
}

/// A string-keyed hash table with separate chaining and fixed djb2 hashing.
///
/// Bucket `i` is empty or holds the head of a chain in which every entry
/// satisfies `hash % capacity == i`, and no two entries share a key. Entries
/// live in a slot arena with generational handles and link to their successor
/// by handle; the table owns every entry reachable from its buckets, and
/// every live arena slot is reachable from exactly one chain.
///
/// Capacity is fixed at construction. There is no load-factor policy: the
/// table only grows when the caller trades it in via [`HashTable::resize`].
#[derive(Debug)]
pub struct HashTable {
    buckets: Vec<Option<DefaultKey>>, // chain heads; length is the capacity
    slots: SlotMap<DefaultKey, Entry>, // owns all entries
}

impl HashTable {
    /// Creates a table with `capacity` empty buckets.
    ///
    /// Rejects a zero capacity before allocating anything.
    pub fn new(capacity: usize) -> Result<Self, TableError> {
        if capacity == 0 {
            return Err(TableError::InvalidCapacity);
        }
        Ok(Self {
            buckets: vec![None; capacity],
            slots: SlotMap::with_key(),
        })
    }

    /// Number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Number of stored key/value pairs.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn bucket_of(&self, hash: u64) -> usize {
        (hash % self.buckets.len() as u64) as usize
    }

    /// Inserts `key` -> `value`. Never fails.
    ///
    /// An existing entry with the same key is replaced: the old entry is
    /// dropped and a fresh one spliced into the same chain position with the
    /// same successor, so the chain neither grows nor reorders. A new key is
    /// appended at the chain tail, which the duplicate scan has already
    /// reached.
    pub fn insert(&mut self, key: String, value: String) {
        let hash = hash::djb2(&key);
        let index = self.bucket_of(hash);

        let mut prev: Option<DefaultKey> = None;
        let mut cursor = self.buckets[index];
        while let Some(slot) = cursor {
            if self.slots[slot].key == key {
                let old = self
                    .slots
                    .remove(slot)
                    .expect("chain links always point at live slots");
                let fresh = self.slots.insert(Entry {
                    key,
                    value,
                    hash,
                    next: old.next,
                });
                // Rewrite the owning link, not a local alias.
                match prev {
                    Some(p) => self.slots[p].next = Some(fresh),
                    None => self.buckets[index] = Some(fresh),
                }
                return;
            }
            prev = Some(slot);
            cursor = self.slots[slot].next;
        }

        let fresh = self.slots.insert(Entry {
            key,
            value,
            hash,
            next: None,
        });
        match prev {
            Some(tail) => self.slots[tail].next = Some(fresh),
            None => self.buckets[index] = Some(fresh),
        }
    }

    /// Looks up the value stored for `key`.
    ///
    /// Walks the chain through a local cursor; the bucket head and the links
    /// are never written, so a miss leaves the chain exactly as it was.
    pub fn get(&self, key: &str) -> Option<&str> {
        let index = self.bucket_of(hash::djb2(key));
        let mut cursor = self.buckets[index];
        while let Some(slot) = cursor {
            let entry = &self.slots[slot];
            if entry.key == key {
                return Some(&entry.value);
            }
            cursor = entry.next;
        }
        None
    }

    /// Removes the entry for `key`, dropping its key and value strings.
    ///
    /// Unlinking is unconditional: the predecessor's successor link — or the
    /// bucket head for a front match, including a sole-entry chain — takes
    /// over the removed entry's successor. A miss reports
    /// [`TableError::KeyNotFound`] and leaves the table untouched.
    pub fn remove(&mut self, key: &str) -> Result<(), TableError> {
        let index = self.bucket_of(hash::djb2(key));

        let mut prev: Option<DefaultKey> = None;
        let mut cursor = self.buckets[index];
        while let Some(slot) = cursor {
            if self.slots[slot].key == key {
                let entry = self
                    .slots
                    .remove(slot)
                    .expect("chain links always point at live slots");
                match prev {
                    Some(p) => self.slots[p].next = entry.next,
                    None => self.buckets[index] = entry.next,
                }
                return Ok(());
            }
            prev = Some(slot);
            cursor = self.slots[slot].next;
        }
        Err(TableError::KeyNotFound)
    }

    /// Consumes the table and returns one with twice the bucket count.
    ///
    /// The entry arena moves wholesale into the new table; each entry is
    /// relinked at the head of its new bucket, `stored hash % new capacity`,
    /// which generally differs from its old index. Nothing is cloned or
    /// re-created: the entries the old table owned are the entries the new
    /// table owns. The old bucket vector is dropped with `self`.
    pub fn resize(self) -> HashTable {
        let HashTable {
            buckets: old_buckets,
            mut slots,
        } = self;
        let old_capacity = old_buckets.len();
        // Vec lengths stay within isize::MAX, so doubling cannot overflow.
        let new_capacity = old_capacity * 2;
        let mut buckets: Vec<Option<DefaultKey>> = vec![None; new_capacity];

        for head in old_buckets {
            let mut cursor = head;
            while let Some(slot) = cursor {
                cursor = slots[slot].next;
                let index = (slots[slot].hash % new_capacity as u64) as usize;
                slots[slot].next = buckets[index];
                buckets[index] = Some(slot);
            }
        }

        debug!("resized table from {old_capacity} to {new_capacity} buckets");
        HashTable { buckets, slots }
    }

    /// Iterates over all `(key, value)` pairs, bucket by bucket and in chain
    /// order within a bucket.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            table: self,
            bucket: 0,
            cursor: None,
        }
    }
}

/// Iterator over the `(key, value)` pairs of a [`HashTable`].
pub struct Iter<'a> {
    table: &'a HashTable,
    bucket: usize, // next bucket to scan once the current chain runs out
    cursor: Option<DefaultKey>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(slot) = self.cursor {
                let entry = &self.table.slots[slot];
                self.cursor = entry.next;
                return Some((entry.key.as_str(), entry.value.as_str()));
            }
            if self.bucket == self.table.buckets.len() {
                return None;
            }
            self.cursor = self.table.buckets[self.bucket];
            self.bucket += 1;
        }
    }
}

#[cfg(test)]
impl HashTable {
    /// Walks every chain and asserts the structural invariants: placement
    /// matches `hash % capacity`, stored hashes match the key bytes, keys
    /// are unique within a chain, and every arena slot is reachable exactly
    /// once (no orphans, no double links, no cycles).
    pub(crate) fn check_invariants(&self) {
        use std::collections::HashSet;

        let capacity = self.buckets.len();
        assert!(capacity > 0, "capacity must stay positive");

        let mut seen: HashSet<DefaultKey> = HashSet::new();
        for (index, head) in self.buckets.iter().enumerate() {
            let mut chain_keys: HashSet<&str> = HashSet::new();
            let mut cursor = *head;
            let mut steps = 0usize;
            while let Some(slot) = cursor {
                steps += 1;
                assert!(steps <= self.slots.len(), "cycle in bucket {index}");
                let entry = self.slots.get(slot).expect("linked slot must be live");
                assert!(seen.insert(slot), "entry linked from two chains");
                assert!(
                    chain_keys.insert(entry.key.as_str()),
                    "duplicate key {:?} in bucket {index}",
                    entry.key
                );
                assert_eq!(
                    (entry.hash % capacity as u64) as usize,
                    index,
                    "entry {:?} filed in the wrong bucket",
                    entry.key
                );
                assert_eq!(
                    entry.hash,
                    hash::djb2(&entry.key),
                    "stored hash out of sync for {:?}",
                    entry.key
                );
                cursor = entry.next;
            }
        }
        assert_eq!(seen.len(), self.slots.len(), "orphaned entries in the arena");
    }

    /// Keys of the chain at `bucket` in link order, for structural tests.
    pub(crate) fn chain_keys(&self, bucket: usize) -> Vec<String> {
        let mut keys = Vec::new();
        let mut cursor = self.buckets[bucket];
        while let Some(slot) = cursor {
            let entry = &self.slots[slot];
            keys.push(entry.key.clone());
            cursor = entry.next;
        }
        keys
    }
}
