//! # weighted_random
//!
//! Weighted random selection over keys whose integer weights change at
//! runtime.
//!
//! A [`WeightedRandom`] owns a `key -> weight` map with fixed
//! [`WeightBounds`]. Every committed change rebuilds a cumulative table, so a
//! pick is one uniform draw in `[0, total)` plus a binary search.
//!
//! There are two primary ways to build one:
//!
//! 1. **Ad-hoc pairs** with [`WeightedRandom::new`] / [`WeightedRandom::from_weights`]
//! 2. **Enums** with the [`WeightedKeys`] derive macro (from the companion
//!    `weighted_random_macros` crate).
//!
//! ## Quick start (pairs)
//!
//! ```rust
//! use weighted_random::{WeightBounds, WeightedRandom};
//!
//! let mut servers = WeightedRandom::new_uniform(["a", "b", "c"], 5, WeightBounds::at_most(10));
//!
//! // "a" timed out twice, "c" answered quickly.
//! servers.decrease_weight(&"a");
//! servers.decrease_weight(&"a");
//! servers.increase_weight(&"c");
//!
//! let mut rng = rand::rng();
//! let next = servers.pick(&mut rng).unwrap(); // &&str
//! println!("routing to {next}");
//! ```
//!
//! ## Quick start (enum + macro)
//!
//! ```rust
//! use weighted_random::WeightedKeys;
//!
//! #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, WeightedKeys)]
//! enum Loot {
//!     #[weight(60)] Common,
//!     #[weight(30)] Uncommon,
//!     #[weight(9)]  Rare,
//!     #[weight(1)]  Legendary,
//! }
//!
//! let mut table = Loot::sampler();
//! let mut rng = rand::rng();
//! let item = table.pick_owned(&mut rng).unwrap();
//! table.set(Loot::Legendary, 0); // already dropped once
//! # let _ = item;
//! ```
//!
//! ## Performance
//! * **Mutation**: O(n); the table is rebuilt after each committed change.
//! * **Pick**: O(log n) per draw (1 random number, 1 binary search).
//! * **Space**: the weight map plus one key clone and one `u128` per key.
//!
//! ## Gotchas
//! * Out-of-bounds weights, unknown keys and `pick_many(_, 0)` **panic**.
//! * A total weight of zero is not a panic: picks return
//!   [`PickError::AllWeightsZero`].
//! * Not synchronized. Wrap it in a `Mutex` to share between threads.

mod bounds;
mod error;
mod sampler;
mod table;

pub use bounds::WeightBounds;
pub use error::PickError;
pub use sampler::WeightedRandom;

/// Derive macro imported from `weighted_random_macros`.
/// See the crate-level example for usage.
pub use weighted_random_macros::WeightedKeys;

use std::hash::Hash;

/// Trait implemented by the `WeightedKeys` derive macro.
///
/// Each variant and its starting weight is exposed via
/// [`WeightedKeys::ENTRIES`], which enables building a ready-to-pick
/// [`WeightedRandom`].
pub trait WeightedKeys: Sized + Copy + Eq + Hash + 'static {
    /// All `(variant, weight)` pairs for the enum, in declaration order.
    const ENTRIES: &'static [(Self, u64)];

    /// Sampler over every variant with full-range bounds.
    fn sampler() -> WeightedRandom<Self> {
        WeightedRandom::from_weights(Self::ENTRIES.iter().copied())
    }

    /// Sampler over every variant with custom bounds.
    ///
    /// # Panics
    /// If a declared weight lies outside `bounds`.
    #[track_caller]
    fn sampler_with_bounds(bounds: WeightBounds) -> WeightedRandom<Self> {
        WeightedRandom::new(Self::ENTRIES.iter().copied(), bounds)
    }
}
