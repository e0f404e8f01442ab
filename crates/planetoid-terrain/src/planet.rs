//! Entry points that turn shape parameters into a merged cubesphere mesh.

use planetoid_cubesphere::{CubeSphere, CubeSphereMesh, ProjectionMethod};
use tracing::debug;

use crate::error::TerrainError;
use crate::noise_layer::NoiseLayerParams;
use crate::shape_profile::ShapeProfile;

/// Generate a noise-displaced cubesphere.
///
/// `resolution` is sanitized (0 → 10, 1 → 2, above 255 → 255). `radius`
/// must be positive and every layer finite. Equal inputs always produce the
/// same buffers.
pub fn generate_cube_sphere(
    radius: f64,
    resolution: u32,
    layers: &[NoiseLayerParams],
    seed: u64,
) -> Result<CubeSphereMesh, TerrainError> {
    let mut profile = ShapeProfile::new("Planet", radius, seed)?;
    profile.add_noise_layers(layers)?;
    Ok(generate_with_profile(
        &mut profile,
        resolution,
        ProjectionMethod::default(),
    ))
}

/// Generate a cubesphere through an already configured profile.
///
/// The profile's noise counters keep advancing, so generating twice from the
/// same profile does not repeat the first result.
pub fn generate_with_profile(
    profile: &mut ShapeProfile,
    resolution: u32,
    projection: ProjectionMethod,
) -> CubeSphereMesh {
    debug!(
        name = profile.name(),
        radius = profile.radius(),
        layers = profile.layers().len(),
        mode = ?profile.octave_mode(),
        "generating planet"
    );
    CubeSphere::new(resolution)
        .with_projection(projection)
        .generate(profile)
}
