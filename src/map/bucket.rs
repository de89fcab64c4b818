//! Collision chains
//!
//! A bucket holds every entry whose key hashes to one slot and resolves
//! collisions by linear scan. Entries are kept in insertion order, but the
//! order carries no meaning. Keys within a bucket are pairwise distinct.
//!
//! Capacity is tracked explicitly and only ever doubled, so growth behavior
//! is predictable and a failed reservation leaves the chain untouched.

use crate::error::{MapError, Result};
use crate::map::entry::Entry;
use crate::map::SetOutcome;

/// A growable, unordered chain of entries sharing one hash slot
#[derive(Debug)]
pub(crate) struct Bucket {
    /// Entries in insertion order
    entries: Vec<Entry>,

    /// Slots reserved for entries; `entries.len() <= capacity`
    capacity: usize,
}

impl Bucket {
    /// Create an empty bucket with `capacity` slots reserved.
    pub(crate) fn new(capacity: usize) -> Result<Self> {
        let mut entries = Vec::new();
        entries.try_reserve_exact(capacity)?;
        Ok(Self { entries, capacity })
    }

    /// Grow the backing storage to hold at least `new_capacity` entries.
    ///
    /// No-op when the bucket already has that capacity. A failed reservation
    /// is reported without touching the existing entries.
    pub(crate) fn ensure_capacity(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity <= self.capacity {
            return Ok(());
        }
        self.entries
            .try_reserve_exact(new_capacity - self.entries.len())?;
        self.capacity = new_capacity;
        Ok(())
    }

    /// Insert or overwrite the entry for `key`.
    ///
    /// The entry is built first (copy-in), so a failed allocation never
    /// mutates the chain. The key scan uses full-length equality; a stored
    /// key that is a strict prefix of `key` (or vice versa) is not a match.
    pub(crate) fn add(&mut self, key: &str, value: &[u8]) -> Result<SetOutcome> {
        if value.is_empty() {
            return Err(MapError::InvalidArgument(
                "value must not be empty".to_string(),
            ));
        }
        let entry = Entry::new(key, value)?;

        if let Some(existing) = self.entries.iter_mut().find(|e| e.key() == key) {
            // Replacing drops the old entry's buffers.
            *existing = entry;
            return Ok(SetOutcome::Overwritten);
        }

        if self.is_full() {
            let doubled = if self.capacity == 0 { 1 } else { self.capacity * 2 };
            self.ensure_capacity(doubled)?;
        }
        self.entries.push(entry);
        Ok(SetOutcome::Inserted)
    }

    /// Find the entry for `key`, if present.
    pub(crate) fn find(&self, key: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.key() == key)
    }

    /// Whether every reserved slot is occupied
    pub(crate) fn is_full(&self) -> bool {
        self.len() >= self.capacity
    }

    /// Number of entries in the chain
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over the chain's entries (used by resize migration)
    pub(crate) fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Remove the entry for `key`, compacting survivors in relative order.
    ///
    /// Returns `false` and leaves the chain unchanged when the key is absent.
    pub(crate) fn remove(&mut self, key: &str) -> bool {
        match self.entries.iter().position(|e| e.key() == key) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }
}
