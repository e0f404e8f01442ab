//! Configuration for the planet generator.
//!
//! Settings persist to disk as a RON file, can be overridden from the command
//! line via clap, and deserialize leniently so older and newer files keep
//! loading.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    Config, DebugConfig, ExportConfig, NoiseLayerConfig, OctaveSetting, PlanetConfig,
    ProjectionSetting, ReseedSetting,
};
pub use error::ConfigError;
