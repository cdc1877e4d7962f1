//! Demo binary for the seed bag mechanic.
//!
//! Wires the seed bag plugin to an in-memory voxel world and plays one
//! scripted session against it: a player acquires bags, collects scattered
//! seeds, and plants them over farmland and soul sand.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `seedbags-config.yaml` (or `SEEDBAGS_CONFIG`)
//! 2. Initialize structured logging (tracing)
//! 3. Build the demo farm and scatter seeds from the configured RNG seed
//! 4. Create the plugin with the superstack registry as stacking adapter
//! 5. Run the scripted session
//! 6. Log the report

mod error;
mod session;
mod spawner;

use std::path::{Path, PathBuf};

use rand::SeedableRng;
use rand::rngs::StdRng;
use seedbags_core::config::LogFormat;
use seedbags_core::{Actor, SeedBagConfig, SeedBagPlugin};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;
use crate::spawner::SpawnerConfig;

/// Environment variable overriding the config file location.
const CONFIG_ENV: &str = "SEEDBAGS_CONFIG";

/// Config file looked up in the working directory.
const DEFAULT_CONFIG_PATH: &str = "seedbags-config.yaml";

/// Application entry point for the demo.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the farm cannot be
/// built, or the session is refused a bag it needs.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration. Logging needs its level, so this comes first.
    let config_path = config_path();
    let config = load_config(&config_path)?;

    // 2. Initialize structured logging.
    init_logging(&config);
    info!(
        path = %config_path.display(),
        default_radius = config.dispensing.default_radius,
        leftover_drop = ?config.aggregation.leftover_drop,
        permission = config.command.permission,
        "seedbags-engine starting"
    );

    // 3. Build the farm and scatter seeds.
    let spawner_config = load_spawner_config(&config_path)?;
    info!(
        seed = spawner_config.seed,
        field_radius = spawner_config.field_radius,
        scattered_drops = spawner_config.scattered_drops,
        superstack_size = spawner_config.superstack_size,
        "Spawner configuration loaded"
    );
    let mut farm = spawner::build_farm(&spawner_config)?;
    let mut rng = StdRng::seed_from_u64(spawner_config.seed);
    let scattered = spawner::scatter_seeds(&mut farm, &spawner_config, &mut rng);
    let drops = scattered.items;

    // 4. Create the plugin.
    let mut plugin = SeedBagPlugin::new(&config, Some(Box::new(scattered.stacking)));

    // 5. Run the session.
    let spawn = farm.farmland_center.above().unwrap_or(farm.farmland_center);
    let mut player = Actor::player("Farmer", spawn).with_permission(config.command.permission.as_str());
    let report = session::run(&mut plugin, &mut farm, &mut player, &drops, &mut rng)?;

    // 6. Log results.
    info!(
        bags_given = report.bags_given,
        commands_refused = report.commands_refused,
        pickups_absorbed = report.pickups_absorbed,
        pickups_ignored = report.pickups_ignored,
        seeds_scattered = scattered.units,
        seeds_stored = report.seeds_stored,
        seeds_overflowed = report.seeds_overflowed,
        planted = report.planted,
        vetoed = report.vetoed,
        clicks_without_effect = report.clicks_without_effect,
        "Session complete"
    );
    info!(
        placements = farm.world.placement_log().len(),
        ground_items = farm.world.ground_items().count(),
        final_position = %player.position,
        "seedbags-engine shutdown complete"
    );

    Ok(())
}

/// Where to read configuration from.
fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV).map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from)
}

/// Install the global subscriber. `RUST_LOG` overrides the configured level.
fn init_logging(config: &SeedBagConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);
    match config.logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

/// Load the seed bag configuration.
///
/// A missing file means defaults; a file that exists must parse.
fn load_config(path: &Path) -> Result<SeedBagConfig, EngineError> {
    if path.exists() {
        Ok(SeedBagConfig::from_file(path)?)
    } else {
        Ok(SeedBagConfig::default())
    }
}

/// Load spawner configuration from the `demo` section of the config file.
///
/// If the file does not exist or lacks the `demo` key, defaults are used.
fn load_spawner_config(path: &Path) -> Result<SpawnerConfig, EngineError> {
    if !path.exists() {
        return Ok(SpawnerConfig::default());
    }
    let contents = std::fs::read_to_string(path).map_err(|e| EngineError::Scenario {
        message: format!("failed to read config file: {e}"),
    })?;

    // Parse the full YAML and extract just the "demo" section.
    let raw: serde_yml::Value = serde_yml::from_str(&contents).map_err(|e| EngineError::Scenario {
        message: format!("failed to parse config YAML: {e}"),
    })?;

    raw.get("demo").map_or_else(
        || Ok(SpawnerConfig::default()),
        |demo| {
            serde_yml::from_value(demo.clone()).map_err(|e| EngineError::Scenario {
                message: format!("failed to parse demo config: {e}"),
            })
        },
    )
}
