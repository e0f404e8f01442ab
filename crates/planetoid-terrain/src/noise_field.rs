//! Pseudo-3D noise built from six asymmetric 2D samples.
//!
//! A 2D primitive `N(a, b)` is sampled on every ordered pair of the point's
//! axes. Since `N(a, b) != N(b, a)` the six samples differ, which keeps the
//! faces of the cubesphere from mirroring each other. The samples are folded
//! into two coordinates for one final `N` lookup.

use glam::DVec3;
use noise::{NoiseFn, Perlin};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use crate::seed::draw_between;

/// When a [`NoiseField`] redraws its variation offset.
///
/// Both policies look at the evaluation counter *before* it is incremented
/// for the current call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ReseedPolicy {
    /// Redraw on every evaluation whose counter `c` has `c / chunks == 1`,
    /// i.e. calls `chunks + 1 ..= 2 * chunks` (1-based), and never again.
    #[default]
    FirstChunkOnly,
    /// Redraw each time the counter reaches a positive multiple of `chunks`.
    Periodic,
}

impl ReseedPolicy {
    /// Whether an evaluation with pre-increment counter `evaluations` redraws.
    ///
    /// A chunk size of zero never redraws.
    pub fn redraws_at(self, evaluations: u64, chunks: u32) -> bool {
        let chunks = u64::from(chunks);
        if chunks == 0 {
            return false;
        }
        match self {
            ReseedPolicy::FirstChunkOnly => evaluations / chunks == 1,
            ReseedPolicy::Periodic => evaluations > 0 && evaluations % chunks == 0,
        }
    }
}

/// A stateful noise evaluator.
///
/// The scale factor is drawn once at construction. The variation offset is
/// drawn at construction and redrawn according to the [`ReseedPolicy`]. All
/// draws come from the field's own generator, so two fields built from equal
/// seeds produce identical sequences.
///
/// The primitive's output is clamped to `[-1, 1]`, so [`NoiseField::evaluate`]
/// also returns a value in `[-1, 1]`.
#[derive(Clone, Debug)]
pub struct NoiseField<N = Perlin> {
    primitive: N,
    rng: ChaCha8Rng,
    scale_factor: f64,
    variation: f64,
    variation_range: (f64, f64),
    evaluations: u64,
    reseed: ReseedPolicy,
}

impl NoiseField<Perlin> {
    /// Create a Perlin-backed field.
    ///
    /// Draws, in order: the Perlin permutation seed, the scale factor from
    /// `scale_range` and the initial variation from `variation_range`.
    /// Ranges may be given in either order.
    pub fn new(
        scale_range: (f64, f64),
        variation_range: (f64, f64),
        reseed: ReseedPolicy,
        mut rng: ChaCha8Rng,
    ) -> Self {
        let primitive = Perlin::new(rng.random());
        Self::with_primitive(primitive, scale_range, variation_range, reseed, rng)
    }
}

impl<N: NoiseFn<f64, 2>> NoiseField<N> {
    /// Create a field around a caller-supplied 2D primitive.
    pub fn with_primitive(
        primitive: N,
        scale_range: (f64, f64),
        variation_range: (f64, f64),
        reseed: ReseedPolicy,
        mut rng: ChaCha8Rng,
    ) -> Self {
        let scale_factor = draw_between(&mut rng, scale_range.0, scale_range.1);
        let variation = draw_between(&mut rng, variation_range.0, variation_range.1);
        Self {
            primitive,
            rng,
            scale_factor,
            variation,
            variation_range,
            evaluations: 0,
            reseed,
        }
    }

    /// Evaluate the field at `point`.
    ///
    /// Advances the evaluation counter and may redraw the variation offset
    /// (before sampling) depending on `variation_chunks` and the policy.
    pub fn evaluate(&mut self, point: DVec3, variation_chunks: u32) -> f64 {
        if self.reseed.redraws_at(self.evaluations, variation_chunks) {
            self.variation = draw_between(
                &mut self.rng,
                self.variation_range.0,
                self.variation_range.1,
            );
            trace!(
                evaluations = self.evaluations,
                variation = self.variation,
                "noise variation redrawn"
            );
        }
        self.evaluations += 1;

        let (x, y, z) = (point.z, point.y, point.x);

        let ab = self.sample(x, y);
        let bc = self.sample(y, z);
        let ac = self.sample(x, z);
        let ba = self.sample(y, x);
        let cb = self.sample(z, y);
        let ca = self.sample(z, x);

        // `ca` appears twice in the sum and `ac` not at all.
        let s1 = (ab - bc - ac - ba - cb - ca) * self.scale_factor - self.variation;
        let s2 = (ba + cb + ca + ab + bc + ca) * self.scale_factor + self.variation;

        self.sample(s1, s2)
    }

    /// The scale factor drawn at construction.
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// The current variation offset.
    pub fn variation(&self) -> f64 {
        self.variation
    }

    /// Number of evaluations performed so far.
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    /// The reseed policy in use.
    pub fn reseed_policy(&self) -> ReseedPolicy {
        self.reseed
    }

    pub(crate) fn set_reseed_policy(&mut self, reseed: ReseedPolicy) {
        self.reseed = reseed;
    }

    #[inline]
    fn sample(&self, a: f64, b: f64) -> f64 {
        self.primitive.get([a, b]).clamp(-1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::layer_rng;

    const EPSILON: f64 = 1e-12;

    /// Linear, deliberately asymmetric primitive: `N(a, b) = 0.1a + 0.01b`.
    struct Skewed;

    impl NoiseFn<f64, 2> for Skewed {
        fn get(&self, point: [f64; 2]) -> f64 {
            0.1 * point[0] + 0.01 * point[1]
        }
    }

    /// Returns the same value everywhere.
    struct Flat(f64);

    impl NoiseFn<f64, 2> for Flat {
        fn get(&self, _point: [f64; 2]) -> f64 {
            self.0
        }
    }

    fn perlin_field(seed: u64, reseed: ReseedPolicy) -> NoiseField {
        NoiseField::new((50.0, 2.0), (1.0, 2.0), reseed, layer_rng(seed, 0))
    }

    #[test]
    fn test_combination_formula_pinned() {
        // Equal bounds pin scale = 2 and variation = 1.
        let mut field = NoiseField::with_primitive(
            Skewed,
            (2.0, 2.0),
            (1.0, 1.0),
            ReseedPolicy::default(),
            layer_rng(0, 0),
        );
        let value = field.evaluate(DVec3::new(0.1, 0.2, 0.3), 6);
        // s1 = -0.068 * 2 - 1 = -1.136, s2 = 0.114 * 2 + 1 = 1.228
        let expected = 0.1 * -1.136 + 0.01 * 1.228;
        assert!(
            (value - expected).abs() < EPSILON,
            "expected {expected}, got {value}"
        );
    }

    #[test]
    fn test_primitive_output_clamped() {
        let mut field = NoiseField::with_primitive(
            Flat(7.5),
            (1.0, 1.0),
            (0.0, 0.0),
            ReseedPolicy::default(),
            layer_rng(0, 0),
        );
        assert_eq!(field.evaluate(DVec3::X, 6), 1.0);
    }

    #[test]
    fn test_perlin_output_in_range() {
        let mut field = perlin_field(42, ReseedPolicy::default());
        for i in 0..500 {
            let t = i as f64 * 0.37;
            let p = DVec3::new(t.sin(), t.cos(), (t * 0.5).sin()).normalize();
            let v = field.evaluate(p, 6);
            assert!((-1.0..=1.0).contains(&v), "value {v} out of range");
        }
    }

    #[test]
    fn test_scale_factor_drawn_from_reversed_range() {
        for seed in 0..20 {
            let field = perlin_field(seed, ReseedPolicy::default());
            assert!((2.0..=50.0).contains(&field.scale_factor()));
            assert!((1.0..=2.0).contains(&field.variation()));
        }
    }

    #[test]
    fn test_first_chunk_only_redraw_window() {
        let chunks = 6;
        let mut field = perlin_field(9, ReseedPolicy::FirstChunkOnly);
        let initial = field.variation();

        // Calls 1..=6 see counters 0..=5: stable.
        for call in 1..=6 {
            field.evaluate(DVec3::Y, chunks);
            assert_eq!(field.variation(), initial, "variation changed on call {call}");
        }

        // Calls 7..=12 see counters 6..=11: redrawn every time.
        let mut previous = initial;
        for call in 7..=12 {
            field.evaluate(DVec3::Y, chunks);
            assert_ne!(field.variation(), previous, "no redraw on call {call}");
            previous = field.variation();
        }

        // Never again afterwards.
        for call in 13..=60 {
            field.evaluate(DVec3::Y, chunks);
            assert_eq!(field.variation(), previous, "variation changed on call {call}");
        }
        assert_eq!(field.evaluations(), 60);
    }

    #[test]
    fn test_periodic_redraw() {
        let chunks = 6;
        let mut field = perlin_field(9, ReseedPolicy::Periodic);
        let mut previous = field.variation();
        for call in 1..=30u64 {
            field.evaluate(DVec3::Z, chunks);
            let counter = call - 1;
            let redrawn = counter > 0 && counter % 6 == 0;
            if redrawn {
                assert_ne!(field.variation(), previous, "no redraw on call {call}");
            } else {
                assert_eq!(field.variation(), previous, "unexpected redraw on call {call}");
            }
            previous = field.variation();
        }
    }

    #[test]
    fn test_zero_chunks_never_redraws() {
        assert!(!ReseedPolicy::FirstChunkOnly.redraws_at(0, 0));
        assert!(!ReseedPolicy::Periodic.redraws_at(12, 0));
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = perlin_field(5, ReseedPolicy::default());
        let mut b = perlin_field(5, ReseedPolicy::default());
        for i in 0..40 {
            let p = DVec3::new(0.3, -0.2 + i as f64 * 0.01, 0.9).normalize();
            assert_eq!(a.evaluate(p, 6), b.evaluate(p, 6));
        }
    }

    #[test]
    fn test_counter_advances_every_call() {
        let mut field = perlin_field(1, ReseedPolicy::default());
        for _ in 0..13 {
            field.evaluate(DVec3::X, 6);
        }
        assert_eq!(field.evaluations(), 13);
    }
}
