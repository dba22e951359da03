use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use rand::Rng;
use tracing::debug;

use crate::{PickError, WeightBounds, table::SamplingTable};

/// Keys with bounded integer weights, sampled proportionally to weight.
///
/// The weight map is the source of truth. A cumulative sampling table derived from it
/// is rebuilt after every committed change, so picks never see stale weights.
///
/// Precondition violations (out-of-bounds weights, unknown keys, empty
/// batches) panic. Only a degenerate all-zero distribution is reported as a
/// [`PickError`].
#[derive(Debug, Clone)]
pub struct WeightedRandom<K> {
    bounds: WeightBounds,
    weights: HashMap<K, u64>,
    table: SamplingTable<K>,
}

impl<K> WeightedRandom<K>
where
    K: Eq + Hash + Clone,
{
    /// Build from `(key, weight)` pairs. Repeated keys keep the last weight.
    ///
    /// # Panics
    /// If any weight lies outside `bounds`.
    ///
    /// # Complexity
    /// O(n) time / O(n) space.
    #[track_caller]
    pub fn new<I>(weights: I, bounds: WeightBounds) -> Self
    where
        I: IntoIterator<Item = (K, u64)>,
    {
        let mut map = HashMap::new();
        for (key, weight) in weights {
            bounds.check(weight);
            map.insert(key, weight);
        }
        let table = SamplingTable::build(&map);
        Self {
            bounds,
            weights: map,
            table,
        }
    }

    /// [`new`](Self::new) with the full `u64` range as bounds.
    #[track_caller]
    pub fn from_weights<I>(weights: I) -> Self
    where
        I: IntoIterator<Item = (K, u64)>,
    {
        Self::new(weights, WeightBounds::default())
    }

    /// Every key starts at `initial_weight`.
    ///
    /// # Panics
    /// If `initial_weight` lies outside `bounds`.
    #[track_caller]
    pub fn new_uniform<I>(keys: I, initial_weight: u64, bounds: WeightBounds) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        Self::new(keys.into_iter().map(|k| (k, initial_weight)), bounds)
    }

    /// Set `key`'s weight, inserting the key if it is new.
    ///
    /// # Panics
    /// If `weight` lies outside the configured bounds.
    #[track_caller]
    pub fn set(&mut self, key: K, weight: u64) {
        self.bounds.check(weight);
        let old = self.weights.insert(key, weight);
        debug!(?old, new = weight, "set weight");
        self.rebuild();
    }

    /// Add one to `key`'s weight unless that would pass the upper bound.
    /// Returns the weight after the call.
    ///
    /// # Panics
    /// If `key` is unknown.
    #[track_caller]
    pub fn increase_weight(&mut self, key: &K) -> u64 {
        let weight = self.weight_of(key);
        match weight.checked_add(1) {
            Some(next) if next <= self.bounds.max() => self.commit(key, weight, next),
            _ => {
                debug!(weight, max = self.bounds.max(), "increase saturated");
                weight
            }
        }
    }

    /// Subtract one from `key`'s weight unless that would pass the lower
    /// bound. Returns the weight after the call.
    ///
    /// # Panics
    /// If `key` is unknown.
    #[track_caller]
    pub fn decrease_weight(&mut self, key: &K) -> u64 {
        let weight = self.weight_of(key);
        match weight.checked_sub(1) {
            Some(next) if next >= self.bounds.min() => self.commit(key, weight, next),
            _ => {
                debug!(weight, min = self.bounds.min(), "decrease saturated");
                weight
            }
        }
    }

    /// All keys, in no particular order.
    pub fn keys(&self) -> HashSet<K> {
        self.weights.keys().cloned().collect()
    }

    /// Draw one key with probability `weight / total_weight`.
    ///
    /// # Errors
    /// [`PickError::AllWeightsZero`] if the total weight is zero.
    ///
    /// # Examples
    /// ```rust
    /// # use weighted_random::WeightedRandom;
    /// let sampler = WeightedRandom::from_weights([("a", 0), ("b", 0), ("c", 1)]);
    /// let mut rng = rand::rng();
    /// assert_eq!(*sampler.pick(&mut rng).unwrap(), "c");
    /// ```
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&K, PickError> {
        self.table
            .sample_index(rng)
            .map(|i| self.table.key(i))
            .ok_or(PickError::AllWeightsZero)
    }

    /// Like [`pick`](Self::pick) but clones the chosen key.
    pub fn pick_owned<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<K, PickError> {
        self.pick(rng).cloned()
    }

    /// `amount` independent draws with replacement, in draw order.
    ///
    /// # Errors
    /// [`PickError::AllWeightsZero`] if the total weight is zero; no keys are
    /// drawn in that case.
    ///
    /// # Panics
    /// If `amount` is zero.
    #[track_caller]
    pub fn pick_many<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        amount: usize,
    ) -> Result<Vec<K>, PickError> {
        assert!(amount >= 1, "pick amount must be at least one");
        if self.table.total() == 0 {
            return Err(PickError::AllWeightsZero);
        }
        (0..amount).map(|_| self.pick_owned(rng)).collect()
    }

    #[track_caller]
    fn weight_of(&self, key: &K) -> u64 {
        match self.weights.get(key) {
            Some(&weight) => weight,
            None => panic!("unknown key: no weight has been set for it"),
        }
    }

    fn commit(&mut self, key: &K, old: u64, new: u64) -> u64 {
        if let Some(slot) = self.weights.get_mut(key) {
            *slot = new;
        }
        debug!(old, new, "adjusted weight");
        self.rebuild();
        new
    }

    fn rebuild(&mut self) {
        self.table = SamplingTable::build(&self.weights);
    }
}

impl<K> WeightedRandom<K> {
    /// Current weight of `key`, if present.
    pub fn weight<Q>(&self, key: &Q) -> Option<u64>
    where
        K: Eq + Hash + std::borrow::Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.weights.get(key).copied()
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Eq + Hash + std::borrow::Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.weights.contains_key(key)
    }

    /// Chance that a single pick returns `key`. `None` for unknown keys or
    /// when every weight is zero.
    pub fn probability<Q>(&self, key: &Q) -> Option<f64>
    where
        K: Eq + Hash + std::borrow::Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let total = self.total_weight();
        if total == 0 {
            return None;
        }
        self.weight(key).map(|w| w as f64 / total as f64)
    }

    /// Sum of all weights.
    #[inline]
    pub fn total_weight(&self) -> u128 {
        self.table.total()
    }

    #[inline]
    pub fn bounds(&self) -> WeightBounds {
        self.bounds
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// `(key, weight)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> + '_ {
        self.weights.iter().map(|(k, &w)| (k, w))
    }
}

impl<K> FromIterator<(K, u64)> for WeightedRandom<K>
where
    K: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        Self::from_weights(iter)
    }
}
