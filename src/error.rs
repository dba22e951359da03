use thiserror::Error;

/// Recoverable failures of a draw.
///
/// Bad bounds, unknown keys and empty batches are caller bugs and panic
/// instead; see the `# Panics` sections on [`WeightedRandom`](crate::WeightedRandom).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PickError {
    /// Total weight is zero, so no key can be selected.
    #[error("all weights are zero")]
    AllWeightsZero,
}
