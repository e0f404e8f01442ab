//! Procedural planet shapes: layered pseudo-3D noise, the shape profile that
//! displaces the unit sphere, and the cubesphere generation entry points.

mod error;
mod noise_field;
mod noise_layer;
mod planet;
mod seed;
mod shape_profile;

pub use error::TerrainError;
pub use noise_field::{NoiseField, ReseedPolicy};
pub use noise_layer::{NoiseLayer, NoiseLayerParams, default_noise_layers};
pub use planet::{generate_cube_sphere, generate_with_profile};
pub use seed::{derive_layer_seed, layer_rng};
pub use shape_profile::{DEFAULT_VARIATION_CHUNKS, OctaveMode, ShapeProfile};
