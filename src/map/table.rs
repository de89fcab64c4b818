//! BlobMap implementation
//!
//! Bucket-array map with doubling growth.
//!
//! ## Responsibilities
//! - Route every operation to the bucket addressed by the key's hash
//! - Grow the bucket array when load factor is exceeded, or when a chain
//!   fills and a larger array would actually spread it
//! - Keep `item_count` equal to the sum of all chain lengths
//! - Enforce the copy-out contract on reads

use crate::config::Config;
use crate::error::{MapError, Result};
use crate::map::bucket::Bucket;
use crate::map::{hash, SetOutcome};

/// A string-keyed map from key to an owned binary blob
///
/// ## Concurrency Model: none
///
/// Single-threaded by design. Callers that share a map across threads must
/// serialize every operation externally (one exclusive lock around the map).
/// No operation blocks or suspends; all work is bounded by chain length and
/// bucket count.
#[derive(Debug)]
pub struct BlobMap {
    /// Map configuration
    config: Config,

    /// One bucket per hash slot, indexed 0..bucket_count-1
    buckets: Vec<Bucket>,

    /// Number of live entries across all buckets
    item_count: usize,
}

impl BlobMap {
    /// Create an empty map with the default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create an empty map with the given configuration.
    ///
    /// Every bucket is initialized up front; any allocation failure aborts
    /// construction before a map exists, so a handle is always fully valid.
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        let buckets = Self::make_buckets(config.initial_buckets, &config)?;
        Ok(Self {
            config,
            buckets,
            item_count: 0,
        })
    }

    /// Allocate `count` empty buckets, failing without side effects.
    fn make_buckets(count: usize, config: &Config) -> Result<Vec<Bucket>> {
        let mut buckets = Vec::new();
        buckets.try_reserve_exact(count)?;
        for _ in 0..count {
            buckets.push(Bucket::new(config.initial_bucket_capacity)?);
        }
        Ok(buckets)
    }

    /// Insert or overwrite the value for `key`.
    ///
    /// Steps:
    /// 1. Validate inputs (empty key or value is rejected)
    /// 2. Resize if the target bucket is full and doubling would spread its
    ///    chain, or if the load factor is exceeded
    /// 3. Re-hash against the (possibly new) bucket count and delegate
    /// 4. Count the item only on a genuine insert
    pub fn set(&mut self, key: &str, value: &[u8]) -> Result<SetOutcome> {
        if key.is_empty() {
            return Err(MapError::InvalidArgument(
                "key must not be empty".to_string(),
            ));
        }
        if value.is_empty() {
            return Err(MapError::InvalidArgument(
                "value must not be empty".to_string(),
            ));
        }

        let mut slot = hash::bucket_index(key, self.buckets.len());
        let chain_needs_room = self.buckets[slot].is_full() && self.would_split(slot);
        if chain_needs_room || self.load_factor() > self.config.max_load_factor {
            self.resize()?;
            slot = hash::bucket_index(key, self.buckets.len());
        }

        let outcome = self.buckets[slot].add(key, value)?;
        if outcome == SetOutcome::Inserted {
            self.item_count += 1;
        }
        Ok(outcome)
    }

    /// Get an independent copy of the value stored for `key`.
    ///
    /// The returned bytes never alias internal storage or the buffer passed
    /// to `set`; callers must not assume pointer stability. An invalid or
    /// absent key yields `Ok(None)`; only a failed copy is an error.
    pub fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        if key.is_empty() {
            return Ok(None);
        }
        let slot = hash::bucket_index(key, self.buckets.len());
        match self.buckets[slot].find(key) {
            Some(entry) => {
                let mut copy = Vec::new();
                copy.try_reserve_exact(entry.size())?;
                copy.extend_from_slice(entry.value());
                Ok(Some(copy))
            }
            None => Ok(None),
        }
    }

    /// Whether `key` is present.
    ///
    /// Same answer as "`get` found something", without the value copy.
    pub fn has(&self, key: &str) -> bool {
        if key.is_empty() {
            return false;
        }
        let slot = hash::bucket_index(key, self.buckets.len());
        self.buckets[slot].find(key).is_some()
    }

    /// Remove the entry for `key`.
    ///
    /// Reports `NotFound` and changes nothing when the key is absent.
    pub fn remove(&mut self, key: &str) -> Result<()> {
        if key.is_empty() {
            return Err(MapError::InvalidArgument(
                "key must not be empty".to_string(),
            ));
        }
        let slot = hash::bucket_index(key, self.buckets.len());
        if self.buckets[slot].remove(key) {
            self.item_count -= 1;
            Ok(())
        } else {
            Err(MapError::NotFound)
        }
    }

    /// Whether doubling the bucket count would spread the chain at `slot`
    /// across more than one slot.
    ///
    /// Keys that share one additive checksum land in the same bucket at
    /// every array size, so doubling on their account shortens nothing and
    /// would recur on every insert into that chain. Such chains grow in
    /// place instead (the bucket doubles its own capacity when full).
    fn would_split(&self, slot: usize) -> bool {
        let doubled = self.buckets.len() * 2;
        let mut slots = self.buckets[slot]
            .entries()
            .map(|entry| hash::bucket_index(entry.key(), doubled));
        match slots.next() {
            Some(first) => slots.any(|s| s != first),
            None => false,
        }
    }

    /// Double the bucket count and migrate every entry.
    ///
    /// The migration is fully speculative: entries are copied into a fresh
    /// doubled array, and any failure abandons that array with the original
    /// buckets untouched. Only after every entry has re-inserted does the new
    /// array replace the old one (dropping the old entries). Either the whole
    /// map migrates or nothing changes.
    fn resize(&mut self) -> Result<()> {
        let old_count = self.buckets.len();
        let new_count = old_count * 2;

        let mut new_buckets = Self::make_buckets(new_count, &self.config)?;
        for bucket in &self.buckets {
            for entry in bucket.entries() {
                let slot = hash::bucket_index(entry.key(), new_count);
                new_buckets[slot].add(entry.key(), entry.value())?;
            }
        }

        self.buckets = new_buckets;
        tracing::debug!(
            old_buckets = old_count,
            new_buckets = new_count,
            items = self.item_count,
            "resized map"
        );
        Ok(())
    }

    /// Current load factor (item count / bucket count)
    pub fn load_factor(&self) -> f64 {
        self.item_count as f64 / self.buckets.len() as f64
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.item_count
    }

    /// Whether the map holds no entries
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// Current number of buckets
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_doubles_and_keeps_entries() {
        let mut map = BlobMap::new().unwrap();
        map.set("a", b"1").unwrap();
        let before = map.bucket_count();

        map.resize().unwrap();

        assert_eq!(map.bucket_count(), before * 2);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("a").unwrap(), Some(b"1".to_vec()));
    }

    #[test]
    fn test_unsplittable_chain_grows_in_place() {
        // Permutations of one letter set share an additive checksum and land
        // in the same bucket at every array size. Filling that chain must
        // grow the chain itself, not double the array on every insert.
        let mut map = BlobMap::new().unwrap();
        let perms = [
            "abcde", "abced", "abdce", "abdec", "abecd", "abedc", "acbde", "acbed", "acdbe",
            "acdeb",
        ];
        for (i, key) in perms.iter().enumerate() {
            map.set(key, &[i as u8 + 1]).unwrap();
        }

        assert_eq!(map.len(), 10);
        // Growth stays load-factor driven: 10 items never need more than
        // 128 buckets at the 0.1 ceiling.
        assert!(map.bucket_count() <= 128);
        for (i, key) in perms.iter().enumerate() {
            assert_eq!(map.get(key).unwrap(), Some(vec![i as u8 + 1]));
        }
    }

    #[test]
    fn test_item_count_matches_bucket_lengths() {
        let mut map = BlobMap::new().unwrap();
        for i in 0..40u8 {
            map.set(&format!("key-{i}"), &[i]).unwrap();
        }
        map.remove("key-7").unwrap();

        let chained: usize = map.buckets.iter().map(|b| b.len()).sum();
        assert_eq!(chained, map.len());
        assert_eq!(map.len(), 39);
    }

    #[test]
    fn test_every_key_sits_in_its_hashed_bucket() {
        let mut map = BlobMap::new().unwrap();
        for i in 0..32u8 {
            map.set(&format!("k{i}"), &[i]).unwrap();
        }

        let count = map.bucket_count();
        for (slot, bucket) in map.buckets.iter().enumerate() {
            for entry in bucket.entries() {
                assert_eq!(hash::bucket_index(entry.key(), count), slot);
            }
        }
    }
}
