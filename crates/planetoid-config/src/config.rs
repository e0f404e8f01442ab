//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";

/// Top-level generator configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Planet shape and mesh settings.
    pub planet: PlanetConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
    /// Mesh export settings.
    pub export: ExportConfig,
}

/// How cube points are mapped onto the sphere.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, ValueEnum)]
pub enum ProjectionSetting {
    /// Normalize the cube point.
    #[default]
    Normalized,
    /// Analytic equal-area style mapping.
    Everitt,
}

/// How noise octaves are combined.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, ValueEnum)]
pub enum OctaveSetting {
    /// Accumulate one octave per layer.
    #[default]
    Fractal,
    /// Reproduce planets generated by the first releases.
    Legacy,
}

/// When noise fields redraw their variation offset.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, ValueEnum)]
pub enum ReseedSetting {
    /// Only during the second chunk of evaluations.
    #[default]
    FirstChunkOnly,
    /// At the start of every chunk after the first.
    Periodic,
}

/// One noise octave as stored on disk.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NoiseLayerConfig {
    /// Frequency growth per octave.
    pub lacunarity: f64,
    /// Amplitude decay per octave.
    pub persistence: f64,
    /// One bound of the scale factor range.
    pub scale_min: f64,
    /// The other bound; may be below `scale_min`.
    pub scale_max: f64,
    /// One bound of the variation offset range.
    pub variation_min: f64,
    /// The other bound; may be below `variation_min`.
    pub variation_max: f64,
}

impl Default for NoiseLayerConfig {
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

/// Planet configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlanetConfig {
    /// Display name, used in log output.
    pub name: String,
    /// Base radius before displacement.
    pub radius: f64,
    /// Vertices per face edge. Out-of-range values are clamped at generation.
    pub resolution: u32,
    /// Seed every noise layer derives its generator from.
    pub seed: u64,
    /// Cube-to-sphere mapping.
    pub projection: ProjectionSetting,
    /// Octave accumulation.
    pub octave_mode: OctaveSetting,
    /// Variation redraw schedule.
    pub reseed_policy: ReseedSetting,
    /// Evaluations per variation chunk.
    pub variation_chunks: u32,
    /// Noise octaves in order.
    pub layers: Vec<NoiseLayerConfig>,
}

impl Default for PlanetConfig {
    fn default() -> Self {
        Self {
            name: "Planet".to_string(),
            radius: 100.0,
            resolution: 10,
            seed: 0,
            projection: ProjectionSetting::default(),
            octave_mode: OctaveSetting::default(),
            reseed_policy: ReseedSetting::default(),
            variation_chunks: 6,
            layers: vec![
                NoiseLayerConfig::default(),
                NoiseLayerConfig::default(),
                NoiseLayerConfig {
                    persistence: 0.25,
                    ..NoiseLayerConfig::default()
                },
            ],
        }
    }
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Mesh export configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExportConfig {
    /// Write the generated mesh as Wavefront OBJ to this path.
    pub obj_path: Option<PathBuf>,
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(config_dir.join(CONFIG_FILE), serialized).map_err(ConfigError::WriteError)
    }

    /// Re-read `config.ron`: `Some(new_config)` if it differs from `self`.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read(&config_dir.join(CONFIG_FILE))?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        ron::from_str(&contents).map_err(ConfigError::ParseError)
    }
}
