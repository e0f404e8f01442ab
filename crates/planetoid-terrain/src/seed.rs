//! Deterministic seed derivation for per-layer random streams.
//!
//! Every noise layer owns its own generator, derived from the profile seed and
//! the layer's position, so no random state is shared between layers.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Derive a u64 seed for a noise layer from the profile seed and layer index.
///
/// Uses SipHash (via std's `DefaultHasher`) to combine the two into a
/// well-distributed u64.
pub fn derive_layer_seed(profile_seed: u64, layer_index: usize) -> u64 {
    let mut hasher = DefaultHasher::new();
    profile_seed.hash(&mut hasher);
    layer_index.hash(&mut hasher);
    hasher.finish()
}

/// Deterministic RNG for a specific noise layer.
pub fn layer_rng(profile_seed: u64, layer_index: usize) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(derive_layer_seed(profile_seed, layer_index))
}

/// Draw uniformly from the closed interval spanned by `a` and `b`.
///
/// The bounds may be given in either order; equal bounds return that value
/// without consuming randomness. Spans too wide for an `f64` are sampled by
/// interpolating between the bounds instead of panicking.
pub(crate) fn draw_between<R: Rng + ?Sized>(rng: &mut R, a: f64, b: f64) -> f64 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    if lo == hi {
        lo
    } else if (hi - lo).is_finite() {
        rng.random_range(lo..=hi)
    } else {
        let t: f64 = rng.random();
        lo * (1.0 - t) + hi * t
    }
}
