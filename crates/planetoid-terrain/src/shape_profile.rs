//! Planet shape: a base radius displaced by stacked noise octaves.

use glam::DVec3;
use planetoid_cubesphere::SurfaceShape;

use crate::error::TerrainError;
use crate::noise_field::ReseedPolicy;
use crate::noise_layer::{NoiseLayer, NoiseLayerParams};
use crate::seed::layer_rng;

/// Default number of evaluations per variation chunk.
pub const DEFAULT_VARIATION_CHUNKS: u32 = 6;

/// How octave contributions are combined into one elevation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum OctaveMode {
    /// Fractal sum: octave `i` samples layer `i`, elevations accumulate and
    /// the frequency product starts at 1.
    #[default]
    Fractal,
    /// Bit-compatible with planets generated before octave accumulation was
    /// fixed: `len + 1` passes over layer 0, the last elevation wins and the
    /// frequency product stays 0.
    Legacy,
}

/// Shape parameters of one planet.
///
/// Layers are octaves in insertion order. The displaced position of a unit
/// direction `p` is `p * radius * ((elevation + 1) * (frequency + 1))`.
#[derive(Clone, Debug)]
pub struct ShapeProfile {
    name: String,
    radius: f64,
    seed: u64,
    layers: Vec<NoiseLayer>,
    variation_chunks: u32,
    octave_mode: OctaveMode,
    reseed: ReseedPolicy,
}

impl ShapeProfile {
    /// Create a profile without noise layers.
    ///
    /// Fails with [`TerrainError::InvalidRadius`] unless `radius` is finite
    /// and positive.
    pub fn new(name: impl Into<String>, radius: f64, seed: u64) -> Result<Self, TerrainError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(TerrainError::InvalidRadius(radius));
        }
        Ok(Self {
            name: name.into(),
            radius,
            seed,
            layers: Vec::new(),
            variation_chunks: DEFAULT_VARIATION_CHUNKS,
            octave_mode: OctaveMode::default(),
            reseed: ReseedPolicy::default(),
        })
    }

    /// Select how octaves are combined.
    #[must_use]
    pub fn with_octave_mode(mut self, mode: OctaveMode) -> Self {
        self.octave_mode = mode;
        self
    }

    /// Reseed policy for every layer, including ones already added.
    #[must_use]
    pub fn with_reseed_policy(mut self, reseed: ReseedPolicy) -> Self {
        self.reseed = reseed;
        for layer in &mut self.layers {
            layer.set_reseed_policy(reseed);
        }
        self
    }

    /// Number of evaluations per variation chunk. Must be at least 1.
    pub fn with_variation_chunks(mut self, chunks: u32) -> Result<Self, TerrainError> {
        if chunks == 0 {
            return Err(TerrainError::InvalidVariationChunks);
        }
        self.variation_chunks = chunks;
        Ok(self)
    }

    /// Append an octave.
    ///
    /// The layer's generator is seeded from the profile seed and the layer's
    /// index, so the same sequence of calls always builds the same profile.
    pub fn add_noise_layer(&mut self, params: &NoiseLayerParams) -> Result<(), TerrainError> {
        let index = self.layers.len();
        params.validate(index)?;
        self.layers
            .push(NoiseLayer::new(params, self.reseed, layer_rng(self.seed, index)));
        Ok(())
    }

    /// Append several octaves, stopping at the first invalid one.
    pub fn add_noise_layers<'a>(
        &mut self,
        layers: impl IntoIterator<Item = &'a NoiseLayerParams>,
    ) -> Result<(), TerrainError> {
        for params in layers {
            self.add_noise_layer(params)?;
        }
        Ok(())
    }

    /// Displace a unit-sphere direction according to the octave mode.
    pub fn point_on_shape(&mut self, unit_sphere_point: DVec3) -> DVec3 {
        if self.layers.is_empty() {
            return unit_sphere_point * self.radius;
        }

        let (elevation, frequency) = match self.octave_mode {
            OctaveMode::Fractal => self.fractal_octaves(unit_sphere_point),
            OctaveMode::Legacy => self.legacy_octaves(unit_sphere_point),
        };

        unit_sphere_point * self.radius * ((elevation + 1.0) * (frequency + 1.0))
    }

    fn fractal_octaves(&mut self, point: DVec3) -> (f64, f64) {
        let chunks = self.variation_chunks;
        let mut frequency = 1.0;
        let mut elevation = 0.0;
        for (i, layer) in self.layers.iter_mut().enumerate() {
            let octave = i as u32;
            frequency *= layer.frequency(octave);
            elevation += layer.evaluate_vertex(point, chunks) * layer.amplitude(octave);
        }
        (elevation, frequency)
    }

    fn legacy_octaves(&mut self, point: DVec3) -> (f64, f64) {
        let chunks = self.variation_chunks;
        let octaves = self.layers.len() as u32;
        let layer = &mut self.layers[0];
        let mut frequency = 0.0;
        let mut elevation = 0.0;
        for octave in 0..=octaves {
            frequency *= layer.frequency(octave);
            elevation = layer.evaluate_vertex(point, chunks) * layer.amplitude(octave);
        }
        (elevation, frequency)
    }

    /// Profile name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Base radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Seed all layer generators derive from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The octaves, in order.
    pub fn layers(&self) -> &[NoiseLayer] {
        &self.layers
    }

    /// Evaluations per variation chunk.
    pub fn variation_chunks(&self) -> u32 {
        self.variation_chunks
    }

    /// Current octave mode.
    pub fn octave_mode(&self) -> OctaveMode {
        self.octave_mode
    }
}

impl SurfaceShape for ShapeProfile {
    fn point_on_shape(&mut self, unit_sphere_point: DVec3) -> DVec3 {
        ShapeProfile::point_on_shape(self, unit_sphere_point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise_layer::default_noise_layers;

    const EPSILON: f64 = 1e-9;

    fn profile(mode: OctaveMode) -> ShapeProfile {
        let mut p = ShapeProfile::new("Test", 10.0, 42)
            .unwrap()
            .with_octave_mode(mode);
        p.add_noise_layers(&default_noise_layers()).unwrap();
        p
    }

    #[test]
    fn test_rejects_non_positive_radius() {
        for r in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = ShapeProfile::new("Bad", r, 0).unwrap_err();
            assert!(matches!(err, TerrainError::InvalidRadius(_)), "radius {r}");
        }
    }

    #[test]
    fn test_rejects_zero_variation_chunks() {
        let result = ShapeProfile::new("P", 1.0, 0).unwrap().with_variation_chunks(0);
        assert_eq!(result.unwrap_err(), TerrainError::InvalidVariationChunks);
    }

    #[test]
    fn test_empty_profile_returns_scaled_direction() {
        let mut p = ShapeProfile::new("Bare", 7.5, 1).unwrap();
        let dir = DVec3::new(1.0, 2.0, -2.0).normalize();
        let out = p.point_on_shape(dir);
        assert!((out - dir * 7.5).length() < EPSILON);
    }

    #[test]
    fn test_invalid_layer_rejected_and_not_added() {
        let mut p = ShapeProfile::new("P", 1.0, 0).unwrap();
        let bad = NoiseLayerParams {
            lacunarity: f64::INFINITY,
            ..NoiseLayerParams::default()
        };
        assert!(p.add_noise_layer(&bad).is_err());
        assert!(p.layers().is_empty());
    }

    #[test]
    fn test_fractal_displacement_bounds() {
        // frequency product = 1 * 2 * 4 = 8; elevation in [0, 1 + 0.5 + 0.0625].
        let mut p = profile(OctaveMode::Fractal);
        let max_elevation = 1.0 + 0.5 + 0.0625;
        for i in 0..50 {
            let t = i as f64 * 0.13;
            let dir = DVec3::new(t.cos(), 0.4, t.sin()).normalize();
            let scale = p.point_on_shape(dir).length() / 10.0;
            let elevation = scale / 9.0 - 1.0;
            assert!(
                (-EPSILON..=max_elevation + EPSILON).contains(&elevation),
                "elevation {elevation} out of bounds"
            );
        }
    }

    #[test]
    fn test_fractal_evaluates_each_layer_once() {
        let mut p = profile(OctaveMode::Fractal);
        p.point_on_shape(DVec3::Y);
        p.point_on_shape(DVec3::X);
        for layer in p.layers() {
            assert_eq!(layer.field().evaluations(), 2);
        }
    }

    #[test]
    fn test_legacy_only_touches_first_layer() {
        let mut p = profile(OctaveMode::Legacy);
        p.point_on_shape(DVec3::Y);
        assert_eq!(p.layers()[0].field().evaluations(), 4);
        assert_eq!(p.layers()[1].field().evaluations(), 0);
        assert_eq!(p.layers()[2].field().evaluations(), 0);
    }

    #[test]
    fn test_legacy_elevation_uses_last_octave_amplitude() {
        // Last pass is octave 3 with amplitude 0.5^3; frequency stays 0.
        let mut p = profile(OctaveMode::Legacy);
        for i in 0..20 {
            let t = i as f64 * 0.31;
            let dir = DVec3::new(t.sin(), t.cos(), 0.2).normalize();
            let scale = p.point_on_shape(dir).length() / 10.0;
            assert!(
                (1.0 - EPSILON..=1.125 + EPSILON).contains(&scale),
                "legacy scale {scale} outside [1, 1.125]"
            );
        }
    }

    /// Fresh copies of the layers `profile` builds, seeded the same way.
    fn reference_layers(seed: u64) -> Vec<NoiseLayer> {
        default_noise_layers()
            .iter()
            .enumerate()
            .map(|(i, params)| {
                NoiseLayer::new(params, ReseedPolicy::default(), layer_rng(seed, i))
            })
            .collect()
    }

    fn sample_directions() -> impl Iterator<Item = DVec3> {
        (0..40).map(|i| {
            let t = i as f64 * 0.17;
            DVec3::new(t.cos(), (t * 0.7).sin(), t.sin() + 0.3).normalize()
        })
    }

    #[test]
    fn test_fractal_sums_each_layer_at_its_own_octave() {
        // amplitudes 1, 0.5, 0.25^2; frequency product 1 * 2 * 4
        let mut p = profile(OctaveMode::Fractal);
        let mut reference = reference_layers(42);
        let chunks = DEFAULT_VARIATION_CHUNKS;
        for dir in sample_directions() {
            let e0 = reference[0].evaluate_vertex(dir, chunks);
            let e1 = reference[1].evaluate_vertex(dir, chunks);
            let e2 = reference[2].evaluate_vertex(dir, chunks);
            let expected = dir * 10.0 * ((e0 + 0.5 * e1 + 0.0625 * e2 + 1.0) * (8.0 + 1.0));
            let actual = p.point_on_shape(dir);
            assert!(
                (actual - expected).length() < EPSILON,
                "fractal {actual} != {expected}"
            );
        }
    }

    #[test]
    fn test_legacy_keeps_last_pass_of_first_layer() {
        // Four passes over layer 0; only the last survives, scaled by 0.5^3.
        let mut p = profile(OctaveMode::Legacy);
        let mut reference = reference_layers(42);
        let chunks = DEFAULT_VARIATION_CHUNKS;
        for dir in sample_directions() {
            for _ in 0..3 {
                reference[0].evaluate_vertex(dir, chunks);
            }
            let last = reference[0].evaluate_vertex(dir, chunks);
            let expected = dir * 10.0 * (last * 0.125 + 1.0);
            let actual = p.point_on_shape(dir);
            assert!(
                (actual - expected).length() < EPSILON,
                "legacy {actual} != {expected}"
            );
        }
    }

    #[test]
    fn test_reseed_policy_applies_to_existing_layers() {
        let mut late = profile(OctaveMode::Fractal).with_reseed_policy(ReseedPolicy::Periodic);
        for layer in late.layers() {
            assert_eq!(layer.field().reseed_policy(), ReseedPolicy::Periodic);
        }

        let mut early = ShapeProfile::new("Test", 10.0, 42)
            .unwrap()
            .with_reseed_policy(ReseedPolicy::Periodic);
        early.add_noise_layers(&default_noise_layers()).unwrap();
        for dir in sample_directions() {
            assert_eq!(late.point_on_shape(dir), early.point_on_shape(dir));
        }
    }

    #[test]
    fn test_displacement_is_radial() {
        let mut p = profile(OctaveMode::Fractal);
        let dir = DVec3::new(0.3, -0.5, 0.8).normalize();
        let out = p.point_on_shape(dir);
        assert!(out.normalize().dot(dir) > 1.0 - EPSILON);
    }

    #[test]
    fn test_same_seed_same_profile_output() {
        let mut a = profile(OctaveMode::Fractal);
        let mut b = profile(OctaveMode::Fractal);
        for i in 0..30 {
            let dir = DVec3::new(1.0, i as f64 * 0.1, -0.4).normalize();
            assert_eq!(a.point_on_shape(dir), b.point_on_shape(dir));
        }
    }

    #[test]
    fn test_accessors() {
        let p = profile(OctaveMode::Legacy);
        assert_eq!(p.name(), "Test");
        assert_eq!(p.radius(), 10.0);
        assert_eq!(p.seed(), 42);
        assert_eq!(p.variation_chunks(), DEFAULT_VARIATION_CHUNKS);
        assert_eq!(p.octave_mode(), OctaveMode::Legacy);
        assert_eq!(p.layers().len(), 3);
    }
}
