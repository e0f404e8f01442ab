//! Turns the loaded configuration into a generated planet.

use planetoid_config::{
    NoiseLayerConfig, OctaveSetting, PlanetConfig, ProjectionSetting, ReseedSetting,
};
use planetoid_cubesphere::{CubeSphereMesh, ProjectionMethod};
use planetoid_terrain::{
    NoiseLayerParams, OctaveMode, ReseedPolicy, ShapeProfile, TerrainError, generate_with_profile,
};

/// Summary of a generated mesh, logged after generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct MeshStats {
    pub vertices: usize,
    pub triangles: usize,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl MeshStats {
    pub(crate) fn of(mesh: &CubeSphereMesh) -> Self {
        let (min_distance, max_distance) = mesh
            .buffers
            .positions
            .iter()
            .map(|p| p.length())
            .fold((f32::INFINITY, 0.0_f32), |(lo, hi), d| (lo.min(d), hi.max(d)));
        Self {
            vertices: mesh.buffers.vertex_count(),
            triangles: mesh.buffers.triangle_count(),
            min_distance,
            max_distance,
        }
    }
}

fn layer_params(layer: &NoiseLayerConfig) -> NoiseLayerParams {
    NoiseLayerParams {
        lacunarity: layer.lacunarity,
        persistence: layer.persistence,
        scale_min: layer.scale_min,
        scale_max: layer.scale_max,
        variation_min: layer.variation_min,
        variation_max: layer.variation_max,
    }
}

fn projection(setting: ProjectionSetting) -> ProjectionMethod {
    match setting {
        ProjectionSetting::Normalized => ProjectionMethod::Normalized,
        ProjectionSetting::Everitt => ProjectionMethod::Everitt,
    }
}

/// Build the shape profile described by `config`.
pub(crate) fn build_profile(config: &PlanetConfig) -> Result<ShapeProfile, TerrainError> {
    let octave_mode = match config.octave_mode {
        OctaveSetting::Fractal => OctaveMode::Fractal,
        OctaveSetting::Legacy => OctaveMode::Legacy,
    };
    let reseed = match config.reseed_policy {
        ReseedSetting::FirstChunkOnly => ReseedPolicy::FirstChunkOnly,
        ReseedSetting::Periodic => ReseedPolicy::Periodic,
    };

    let mut profile = ShapeProfile::new(config.name.clone(), config.radius, config.seed)?
        .with_octave_mode(octave_mode)
        .with_reseed_policy(reseed)
        .with_variation_chunks(config.variation_chunks)?;
    for layer in &config.layers {
        profile.add_noise_layer(&layer_params(layer))?;
    }
    Ok(profile)
}

/// Generate the planet described by `config`.
pub(crate) fn generate(config: &PlanetConfig) -> Result<CubeSphereMesh, TerrainError> {
    let mut profile = build_profile(config)?;
    Ok(generate_with_profile(
        &mut profile,
        config.resolution,
        projection(config.projection),
    ))
}
