//! One octave of terrain noise: a [`NoiseField`] plus its lacunarity and
//! persistence.

use glam::DVec3;
use noise::{NoiseFn, Perlin};
use rand_chacha::ChaCha8Rng;

use crate::error::TerrainError;
use crate::noise_field::{NoiseField, ReseedPolicy};

/// The user-facing description of a noise layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoiseLayerParams {
    /// Frequency growth per octave. Frequency of octave `i` is `lacunarity^i`.
    pub lacunarity: f64,
    /// Amplitude decay per octave. Amplitude of octave `i` is `persistence^i`.
    pub persistence: f64,
    /// One bound of the scale factor draw.
    pub scale_min: f64,
    /// The other bound of the scale factor draw.
    pub scale_max: f64,
    /// One bound of the variation offset draw.
    pub variation_min: f64,
    /// The other bound of the variation offset draw.
    pub variation_max: f64,
}

impl NoiseLayerParams {
    /// Check that every parameter is a finite number and that both ranges
    /// have a finite width.
    ///
    /// `index` is only used to label the error.
    pub fn validate(&self, index: usize) -> Result<(), TerrainError> {
        let fields = [
            ("lacunarity", self.lacunarity),
            ("persistence", self.persistence),
            ("scale_min", self.scale_min),
            ("scale_max", self.scale_max),
            ("variation_min", self.variation_min),
            ("variation_max", self.variation_max),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(TerrainError::InvalidLayer {
                    index,
                    reason: format!("{name} must be finite, got {value}"),
                });
            }
        }
        let ranges = [
            ("scale", self.scale_min, self.scale_max),
            ("variation", self.variation_min, self.variation_max),
        ];
        for (name, a, b) in ranges {
            if !(b - a).abs().is_finite() {
                return Err(TerrainError::InvalidLayer {
                    index,
                    reason: format!("{name} range {a}..{b} is too wide"),
                });
            }
        }
        Ok(())
    }
}

impl Default for NoiseLayerParams {
    fn default() -> Self {
        Self {
            lacunarity: 2.0,
            persistence: 0.5,
            scale_min: 50.0,
            scale_max: 2.0,
            variation_min: 1.0,
            variation_max: 2.0,
        }
    }
}

/// The three octaves the reference planet is configured with.
pub fn default_noise_layers() -> Vec<NoiseLayerParams> {
    vec![
        NoiseLayerParams::default(),
        NoiseLayerParams::default(),
        NoiseLayerParams {
            persistence: 0.25,
            ..NoiseLayerParams::default()
        },
    ]
}

/// A configured noise octave.
#[derive(Clone, Debug)]
pub struct NoiseLayer<N = Perlin> {
    field: NoiseField<N>,
    lacunarity: f64,
    persistence: f64,
}

impl NoiseLayer<Perlin> {
    /// Build a Perlin-backed layer, drawing its field state from `rng`.
    pub fn new(params: &NoiseLayerParams, reseed: ReseedPolicy, rng: ChaCha8Rng) -> Self {
        Self {
            field: NoiseField::new(
                (params.scale_min, params.scale_max),
                (params.variation_min, params.variation_max),
                reseed,
                rng,
            ),
            lacunarity: params.lacunarity,
            persistence: params.persistence,
        }
    }
}

impl<N: NoiseFn<f64, 2>> NoiseLayer<N> {
    /// Wrap an existing field.
    pub fn from_field(field: NoiseField<N>, lacunarity: f64, persistence: f64) -> Self {
        Self {
            field,
            lacunarity,
            persistence,
        }
    }

    /// `lacunarity^octave`.
    pub fn frequency(&self, octave: u32) -> f64 {
        self.lacunarity.powi(octave as i32)
    }

    /// `persistence^octave`.
    pub fn amplitude(&self, octave: u32) -> f64 {
        self.persistence.powi(octave as i32)
    }

    /// Field value at `point` remapped from `[-1, 1]` to `[0, 1]`.
    pub fn evaluate_vertex(&mut self, point: DVec3, variation_chunks: u32) -> f64 {
        ((self.field.evaluate(point, variation_chunks) + 1.0) * 0.5).clamp(0.0, 1.0)
    }

    /// Lacunarity of this layer.
    pub fn lacunarity(&self) -> f64 {
        self.lacunarity
    }

    /// Persistence of this layer.
    pub fn persistence(&self) -> f64 {
        self.persistence
    }

    /// The underlying noise field.
    pub fn field(&self) -> &NoiseField<N> {
        &self.field
    }

    pub(crate) fn set_reseed_policy(&mut self, reseed: ReseedPolicy) {
        self.field.set_reseed_policy(reseed);
    }
}
