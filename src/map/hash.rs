//! Key hashing
//!
//! Maps a key to a bucket slot for a given bucket count.

/// Compute the bucket slot for `key` in a map with `bucket_count` buckets.
///
/// This is an additive checksum: the byte values of the key are summed and
/// reduced modulo the bucket count. Distribution is weak — anagram keys
/// ("ab", "ba") land in the same slot deterministically. That is an accepted
/// limitation of the design, not an accident; short chains are maintained by
/// the aggressive load-factor ceiling instead.
///
/// Returns 0 when `bucket_count` is 0 so callers never divide by zero. A
/// non-empty map always has a non-zero bucket count, so callers must treat
/// that case as "no slot available", never as a valid index.
pub(crate) fn bucket_index(key: &str, bucket_count: usize) -> usize {
    if bucket_count == 0 {
        return 0;
    }
    let sum = key
        .bytes()
        .fold(0usize, |acc, b| acc.wrapping_add(usize::from(b)));
    sum % bucket_count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_bucket_count_returns_zero() {
        assert_eq!(bucket_index("anything", 0), 0);
    }

    #[test]
    fn test_index_is_in_range() {
        for count in [1, 2, 8, 16, 1024] {
            for key in ["", "A", "hello", "Z", "longer key with spaces"] {
                assert!(bucket_index(key, count) < count);
            }
        }
    }

    #[test]
    fn test_additive_checksum_values() {
        // "A" is byte 65; 65 % 8 == 1
        assert_eq!(bucket_index("A", 8), 1);
        // "AB" sums to 65 + 66 = 131; 131 % 8 == 3
        assert_eq!(bucket_index("AB", 8), 3);
    }

    #[test]
    fn test_anagrams_collide() {
        // Known limitation of the additive hash.
        assert_eq!(bucket_index("ab", 16), bucket_index("ba", 16));
        assert_eq!(bucket_index("stop", 64), bucket_index("pots", 64));
    }

    #[test]
    fn test_empty_key_hashes_to_slot_zero() {
        assert_eq!(bucket_index("", 8), 0);
    }
}
