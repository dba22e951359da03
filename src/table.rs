//! Cumulative-weight table that turns one uniform draw into a key.
//!
//! Each key owns the half-open interval `[cumulative[i - 1], cumulative[i])`
//! of `[0, total)`. A draw `r` lands in exactly one non-empty interval, so
//! zero-weight keys are never selected.

use rand::Rng;
use tracing::trace;

#[derive(Debug, Clone)]
pub(crate) struct SamplingTable<K> {
    keys: Vec<K>,
    /// Exclusive end of each key's interval. Sums are `u128` so that many
    /// `u64::MAX` weights cannot overflow.
    cumulative: Vec<u128>,
}

impl<K: Clone> SamplingTable<K> {
    /// Build from `(key, weight)` pairs in enumeration order. O(n).
    pub(crate) fn build<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a K, &'a u64)>,
        K: 'a,
    {
        let entries = entries.into_iter();
        let (hint, _) = entries.size_hint();
        let mut keys = Vec::with_capacity(hint);
        let mut cumulative = Vec::with_capacity(hint);

        let mut total = 0u128;
        for (key, &weight) in entries {
            total += u128::from(weight);
            keys.push(key.clone());
            cumulative.push(total);
        }

        trace!(entries = keys.len(), total = %total, "rebuilt sampling table");
        Self { keys, cumulative }
    }
}

impl<K> SamplingTable<K> {
    #[inline]
    pub(crate) fn total(&self) -> u128 {
        self.cumulative.last().copied().unwrap_or(0)
    }

    /// Draw one index, or `None` when the total weight is zero.
    pub(crate) fn sample_index<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        let r = rng.random_range(0..total);
        Some(self.index_of(r))
    }

    /// Index of the interval containing `r`. Requires `r < total`.
    #[inline]
    fn index_of(&self, r: u128) -> usize {
        self.cumulative.partition_point(|&end| end <= r)
    }

    #[inline]
    pub(crate) fn key(&self, index: usize) -> &K {
        &self.keys[index]
    }

    /// Draw `draws` samples, returning counts per index.
    #[cfg(test)]
    pub(crate) fn sample_counts<R: Rng + ?Sized>(&self, rng: &mut R, draws: usize) -> Vec<usize> {
        let mut counts = vec![0usize; self.keys.len()];
        for _ in 0..draws {
            if let Some(i) = self.sample_index(rng) {
                counts[i] += 1;
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn table(pairs: &[(&'static str, u64)]) -> SamplingTable<&'static str> {
        SamplingTable::build(pairs.iter().map(|(k, w)| (k, w)))
    }

    #[test]
    fn intervals_follow_build_order() {
        let t = table(&[("a", 0), ("b", 2), ("c", 0), ("d", 3)]);
        assert_eq!(t.total(), 5);
        let owners: Vec<_> = (0..5).map(|r| *t.key(t.index_of(r))).collect();
        assert_eq!(owners, ["b", "b", "d", "d", "d"]);
    }

    #[test]
    fn zero_total_yields_nothing() {
        let t = table(&[("a", 0), ("b", 0)]);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(t.sample_index(&mut rng), None);

        let empty = table(&[]);
        assert_eq!(empty.total(), 0);
        assert_eq!(empty.sample_index(&mut rng), None);
    }

    #[test]
    fn huge_weights_do_not_overflow() {
        let t = table(&[("a", u64::MAX), ("b", u64::MAX), ("c", 1)]);
        assert_eq!(t.total(), 2 * u128::from(u64::MAX) + 1);
        assert_eq!(*t.key(t.index_of(t.total() - 1)), "c");
        assert_eq!(*t.key(t.index_of(u128::from(u64::MAX))), "b");
    }

    #[test]
    fn roughly_matches_distribution() {
        let weights = [1u64, 2, 3, 4];
        let names = ["w1", "w2", "w3", "w4"];
        let t = SamplingTable::build(names.iter().zip(weights.iter()));

        let mut rng = StdRng::seed_from_u64(42);
        let draws = 20_000usize;
        let counts = t.sample_counts(&mut rng, draws);

        let sum_w: u64 = weights.iter().sum();
        for (i, &c) in counts.iter().enumerate() {
            let p = weights[i] as f64 / sum_w as f64;
            let emp = c as f64 / draws as f64;
            assert!((emp - p).abs() < 0.05, "i={i} emp={emp} p={p}");
        }
    }
}
