use crate::error::TableFull;
use crate::hasher::{KeyHash, WeightedKeyHash};
use crate::stats::ProbeMapStats;

/// One stored key/value pair. The table owns independent copies of both
/// strings; callers' originals are never aliased.
#[derive(Debug, Clone)]
struct Entry {
    key: String,
    value: String,
}

/// Fixed-capacity string dictionary using open addressing with linear probing.
///
/// A `ProbeMap` is created empty with a fixed number of slots, bulk-populated
/// via [`insert`](Self::insert), then queried any number of times via
/// [`get`](Self::get). The slot count never changes: there is no resizing,
/// no rehashing, and no per-entry deletion ([`clear`](Self::clear) resets the
/// whole table at once).
///
/// Insertion statistics (element, collision and probe counters) are tracked
/// per instance and exposed through [`stats`](Self::stats) to characterize
/// how well the hash distributes a given data set.
///
/// # Type Parameters
/// - `H`: placement function mapping keys to primary indices; defaults to
///   [`WeightedKeyHash`].
#[derive(Debug)]
pub struct ProbeMap<H: KeyHash = WeightedKeyHash> {
    slots: Vec<Option<Entry>>,
    stats: ProbeMapStats,
    hasher: H,
}

impl ProbeMap {
    /// Creates an empty table with exactly `capacity` slots and the default
    /// positional-weight hash.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        Self::with_hasher(capacity, WeightedKeyHash)
    }
}

impl<H: KeyHash> ProbeMap<H> {
    /// Creates an empty table with exactly `capacity` slots and a caller
    /// supplied placement function.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_hasher(capacity: usize, hasher: H) -> Self {
        assert!(capacity > 0, "capacity must be positive");
        ProbeMap {
            slots: vec![None; capacity],
            stats: ProbeMapStats::default(),
            hasher,
        }
    }

    /// Stores independent copies of `key` and `value` in the table.
    ///
    /// If the primary slot is free the pair is stored there directly.
    /// Otherwise the collision counter is incremented and the table is probed
    /// forward one slot at a time (cyclically) until a free slot is found,
    /// counting every advance.
    ///
    /// Duplicate keys are not detected: inserting a key twice stores a second
    /// entry that [`get`](Self::get) only reaches once the first is probed
    /// past. Deduplicating here would change the observable collision and
    /// probe statistics.
    ///
    /// # Errors
    ///
    /// Returns [`TableFull`] when a full cyclic scan finds no free slot. The
    /// element counter is only incremented on success; collision and probe
    /// counters keep whatever the failed scan recorded, and the table remains
    /// valid for further lookups.
    pub fn insert(&mut self, key: &str, value: &str) -> Result<(), TableFull> {
        let primary = self.hasher.index_for(key, self.slots.len());
        let index = if self.slots[primary].is_none() {
            primary
        } else {
            self.stats.collisions += 1;
            self.probe_from(primary)?
        };

        self.slots[index] = Some(Entry {
            key: key.to_string(),
            value: value.to_string(),
        });
        self.stats.elements += 1;
        Ok(())
    }

    /// Walks forward from an occupied primary index to the next free slot,
    /// counting each advance. A whole lap without a free slot means the table
    /// is full.
    fn probe_from(&mut self, primary: usize) -> Result<usize, TableFull> {
        let capacity = self.slots.len();
        let mut index = primary;
        for _ in 0..capacity {
            index = (index + 1) % capacity;
            self.stats.total_probes += 1;
            if self.slots[index].is_none() {
                return Ok(index);
            }
        }
        Err(TableFull { capacity })
    }

    /// Returns the value stored for `key`, if any.
    ///
    /// The walk starts at the key's primary index and advances cyclically,
    /// mirroring the insert-time probe sequence. An empty slot proves the key
    /// absent (no entry is ever removed individually, so occupied runs have
    /// no gaps). On a completely full table the walk stops after one full
    /// lap. Unlike [`insert`](Self::insert), a full table is never an error
    /// here; absence is an ordinary result.
    pub fn get(&self, key: &str) -> Option<&str> {
        let capacity = self.slots.len();
        let start = self.hasher.index_for(key, capacity);
        let mut index = start;
        while let Some(entry) = &self.slots[index] {
            if entry.key == key {
                return Some(&entry.value);
            }
            index = (index + 1) % capacity;
            if index == start {
                return None;
            }
        }
        None
    }

    /// Returns `true` if `key` is stored in the table.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Empties every slot and zeroes all counters, releasing the owned
    /// strings. The capacity is unchanged and the table is immediately
    /// usable again. Dropping the table frees everything without this call.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
        self.stats = ProbeMapStats::default();
    }

    /// Returns a copy of the running insertion statistics.
    pub fn stats(&self) -> ProbeMapStats {
        self.stats
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.stats.elements as usize
    }

    /// Returns `true` if no entry is stored.
    pub fn is_empty(&self) -> bool {
        self.stats.elements == 0
    }

    /// Fixed slot count chosen at construction.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Fraction of slots currently occupied.
    pub fn load_factor(&self) -> f64 {
        self.stats.elements as f64 / self.slots.len() as f64
    }

    /// Iterates over all stored pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.slots.iter().filter_map(|slot| {
            slot.as_ref()
                .map(|entry| (entry.key.as_str(), entry.value.as_str()))
        })
    }
}
