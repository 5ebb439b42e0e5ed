/// Maps a key to its primary slot index.
///
/// The table is generic over this trait so that tests (and callers with an
/// unusual key distribution) can substitute their own placement function.
/// Implementations must be deterministic and must return an index strictly
/// below `capacity`.
pub trait KeyHash {
    /// Returns the primary slot index for `key` in a table of `capacity` slots.
    fn index_for(&self, key: &str, capacity: usize) -> usize;
}

/// Positional-weight hash used by [`ProbeMap`](crate::ProbeMap) by default.
///
/// Each byte of the key is multiplied by a weight that starts at 10 and grows
/// by a factor of 10 per position; the accumulated sum is divided by 10 and
/// reduced modulo the table capacity. All arithmetic is wrapping `u32`:
/// overflow on long keys is part of the defined behavior. The empty key
/// hashes to index 0.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WeightedKeyHash;

impl KeyHash for WeightedKeyHash {
    fn index_for(&self, key: &str, capacity: usize) -> usize {
        let mut accumulator: u32 = 0;
        let mut weight: u32 = 10;
        for &byte in key.as_bytes() {
            accumulator = accumulator.wrapping_add((byte as u32).wrapping_mul(weight));
            weight = weight.wrapping_mul(10);
        }
        ((accumulator / 10) as usize) % capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        let hash = WeightedKeyHash;
        // 'A' * 10 / 10 = 65
        assert_eq!(hash.index_for("A", 1115), 65);
        // ('a' * 10 + 'b' * 100) / 10 = (970 + 9800) / 10 = 1077
        assert_eq!(hash.index_for("ab", 1115), 1077);
        // Order sensitivity: "ba" accumulates differently.
        assert_eq!(hash.index_for("ba", 1115), (980 + 9700) / 10 % 1115);
        assert_ne!(hash.index_for("ab", 1115), hash.index_for("ba", 1115));
    }

    #[test]
    fn test_empty_key() {
        assert_eq!(WeightedKeyHash.index_for("", 1115), 0);
        assert_eq!(WeightedKeyHash.index_for("", 1), 0);
    }

    #[test]
    fn test_deterministic_and_in_range() {
        let hash = WeightedKeyHash;
        for capacity in [1, 2, 5, 20, 1115] {
            for key in ["", "a", "word", "dictionary", "linear probing"] {
                let index = hash.index_for(key, capacity);
                assert!(index < capacity);
                assert_eq!(index, hash.index_for(key, capacity));
            }
        }
    }

    #[test]
    fn test_long_key_wraps() {
        // The weight overflows u32 after nine bytes; the wrapped result is
        // still deterministic and in range.
        let key = "antidisestablishmentarianism";
        let index = WeightedKeyHash.index_for(key, 1115);
        assert!(index < 1115);
        assert_eq!(index, WeightedKeyHash.index_for(key, 1115));
    }
}
