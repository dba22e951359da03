/// Inclusive `[min, max]` range every stored weight must fall in.
///
/// Fixed when a [`WeightedRandom`](crate::WeightedRandom) is built.
/// The default covers all of `u64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeightBounds {
    min: u64,
    max: u64,
}

impl WeightBounds {
    /// # Panics
    /// If `min > max`.
    pub const fn new(min: u64, max: u64) -> Self {
        assert!(min <= max, "weight bounds are inverted: min > max");
        Self { min, max }
    }

    /// `[0, max]`.
    pub const fn at_most(max: u64) -> Self {
        Self::new(0, max)
    }

    /// `[min, u64::MAX]`.
    pub const fn at_least(min: u64) -> Self {
        Self::new(min, u64::MAX)
    }

    #[inline]
    pub const fn min(&self) -> u64 {
        self.min
    }

    #[inline]
    pub const fn max(&self) -> u64 {
        self.max
    }

    #[inline]
    pub const fn contains(&self, weight: u64) -> bool {
        weight >= self.min && weight <= self.max
    }

    /// Panics with the offending value if `weight` is out of range.
    #[track_caller]
    pub(crate) fn check(&self, weight: u64) {
        if !self.contains(weight) {
            panic!(
                "weight {weight} is out of bounds [{}, {}]",
                self.min, self.max
            );
        }
    }
}

impl Default for WeightBounds {
    fn default() -> Self {
        Self::new(u64::MIN, u64::MAX)
    }
}
