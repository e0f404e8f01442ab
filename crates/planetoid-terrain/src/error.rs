//! Terrain configuration errors.

/// Errors raised while configuring a shape profile.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TerrainError {
    /// The base radius is zero, negative or not finite.
    #[error("radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    /// A noise layer parameter is unusable.
    #[error("noise layer {index} is invalid: {reason}")]
    InvalidLayer {
        /// Position of the layer in the profile (or the list being added).
        index: usize,
        /// What is wrong with it.
        reason: String,
    },

    /// Variation chunks of zero would divide by zero in the reseed check.
    #[error("variation chunk size must be at least 1")]
    InvalidVariationChunks,
}
