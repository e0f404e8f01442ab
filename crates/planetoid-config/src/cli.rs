//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;
use crate::config::OctaveSetting;

/// Planetoid command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "planetoid", about = "Procedural cubesphere planet generator")]
pub struct CliArgs {
    /// Base planet radius.
    #[arg(long)]
    pub radius: Option<f64>,

    /// Vertices per face edge (0 selects the default, values above 255 are clamped).
    #[arg(long)]
    pub resolution: Option<u32>,

    /// Noise seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Octave accumulation mode.
    #[arg(long, value_enum)]
    pub octave_mode: Option<OctaveSetting>,

    /// Write the generated mesh as Wavefront OBJ.
    #[arg(long)]
    pub obj: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(radius) = args.radius {
            self.planet.radius = radius;
        }
        if let Some(resolution) = args.resolution {
            self.planet.resolution = resolution;
        }
        if let Some(seed) = args.seed {
            self.planet.seed = seed;
        }
        if let Some(mode) = args.octave_mode {
            self.planet.octave_mode = mode;
        }
        if let Some(ref path) = args.obj {
            self.export.obj_path = Some(path.clone());
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            radius: Some(6.5),
            seed: Some(31),
            obj: Some(PathBuf::from("planet.obj")),
            ..CliArgs::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.planet.radius, 6.5);
        assert_eq!(config.planet.seed, 31);
        assert_eq!(config.export.obj_path, Some(PathBuf::from("planet.obj")));
        // Non-overridden fields retain defaults
        assert_eq!(config.planet.resolution, 10);
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_cli_parses_flags() {
        let args = CliArgs::try_parse_from([
            "planetoid",
            "--resolution",
            "32",
            "--octave-mode",
            "legacy",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.resolution, Some(32));
        assert_eq!(args.octave_mode, Some(OctaveSetting::Legacy));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(args.radius.is_none());
    }

    #[test]
    fn test_cli_rejects_unknown_octave_mode() {
        let result = CliArgs::try_parse_from(["planetoid", "--octave-mode", "spiral"]);
        assert!(result.is_err());
    }
}
