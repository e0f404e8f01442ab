//! `planetoid`: generate a noise-displaced cubesphere planet from the
//! configuration file and command line, log its statistics and optionally
//! export it as Wavefront OBJ.

mod obj;
mod planet;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use planetoid_config::{CliArgs, Config, ConfigError};
use planetoid_terrain::TerrainError;
use tracing::{error, info};

const APP_NAME: &str = "planetoid";

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error("could not determine OS configuration directory")]
    NoConfigDir,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid planet settings: {0}")]
    Terrain(#[from] TerrainError),

    #[error("failed to export {}: {source}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn config_dir(args: &CliArgs) -> Result<PathBuf, DemoError> {
    match &args.config {
        Some(dir) => Ok(dir.clone()),
        None => dirs::config_dir()
            .map(|base| base.join(APP_NAME))
            .ok_or(DemoError::NoConfigDir),
    }
}

fn run(config: &Config) -> Result<(), DemoError> {
    let settings = &config.planet;
    info!(
        name = %settings.name,
        radius = settings.radius,
        resolution = settings.resolution,
        seed = settings.seed,
        layers = settings.layers.len(),
        "Generating planet"
    );

    let mesh = planet::generate(settings)?;
    let stats = planet::MeshStats::of(&mesh);
    info!(
        "Generated {} vertices, {} triangles (surface distance {:.3} to {:.3})",
        stats.vertices, stats.triangles, stats.min_distance, stats.max_distance
    );

    if let Some(path) = &config.export.obj_path {
        obj::export_obj(&mesh.buffers, &settings.name, path).map_err(|source| {
            DemoError::Export {
                path: path.clone(),
                source,
            }
        })?;
        info!("Wrote {}", path.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = match config_dir(&args) {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    planetoid_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
