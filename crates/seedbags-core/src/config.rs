//! Configuration loading and typed config structures for the seed bag
//! mechanic.
//!
//! The canonical configuration lives in `seedbags-config.yaml` at the
//! project root. Every field has a default matching the canonical behavior,
//! so a missing file or a missing key never changes how bags work.

use std::collections::BTreeMap;
use std::path::Path;

use seedbags_types::SeedKind;
use serde::Deserialize;

/// Largest dispensing radius accepted from configuration.
///
/// A radius of 8 scans a 17x17 neighborhood per click.
pub const MAX_RADIUS: u32 = 8;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A value parsed but is outside its allowed range.
    #[error("invalid config value for {field}: {reason}")]
    Invalid {
        /// Dotted path of the offending key.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level seed bag configuration.
///
/// Mirrors the structure of `seedbags-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SeedBagConfig {
    /// Area planting parameters.
    #[serde(default)]
    pub dispensing: DispensingConfig,

    /// Pickup aggregation parameters.
    #[serde(default)]
    pub aggregation: AggregationConfig,

    /// Acquisition command parameters.
    #[serde(default)]
    pub command: CommandConfig,

    /// User-facing message texts.
    #[serde(default)]
    pub messages: MessagesConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SeedBagConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dispensing.default_radius > MAX_RADIUS {
            return Err(ConfigError::Invalid {
                field: String::from("dispensing.default_radius"),
                reason: format!("{} exceeds {MAX_RADIUS}", self.dispensing.default_radius),
            });
        }
        for (kind, radius) in &self.dispensing.radius_overrides {
            if *radius > MAX_RADIUS {
                return Err(ConfigError::Invalid {
                    field: format!("dispensing.radius_overrides.{}", kind.synonym()),
                    reason: format!("{radius} exceeds {MAX_RADIUS}"),
                });
            }
        }
        if self.command.permission.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: String::from("command.permission"),
                reason: String::from("must not be empty"),
            });
        }
        Ok(())
    }
}

/// Area planting parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DispensingConfig {
    /// Radius used for kinds without an override (2 scans a 5x5 area).
    #[serde(default = "default_radius")]
    pub default_radius: u32,

    /// Per-kind radius, keyed by command synonym (`pumpkin: 0`).
    #[serde(default)]
    pub radius_overrides: BTreeMap<SeedKind, u32>,
}

impl DispensingConfig {
    /// The scan radius configured for `kind`.
    pub fn radius_for(&self, kind: SeedKind) -> u32 {
        self.radius_overrides
            .get(&kind)
            .copied()
            .unwrap_or(self.default_radius)
    }
}

impl Default for DispensingConfig {
    fn default() -> Self {
        Self {
            default_radius: default_radius(),
            radius_overrides: BTreeMap::new(),
        }
    }
}

/// Where aggregation leftovers that do not fit the inventory are dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeftoverDrop {
    /// At the picking-up actor's current position.
    #[default]
    ActorPosition,
    /// Where the picked-up ground item was lying.
    PickupPosition,
}

/// Pickup aggregation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AggregationConfig {
    /// Where leftovers that do not fit the inventory land.
    #[serde(default)]
    pub leftover_drop: LeftoverDrop,

    /// Whether bags collect pickups when no stacking subsystem is installed.
    #[serde(default = "default_true")]
    pub enabled_without_stacker: bool,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            leftover_drop: LeftoverDrop::default(),
            enabled_without_stacker: true,
        }
    }
}

/// Acquisition command parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommandConfig {
    /// Permission node an actor needs to run the command.
    #[serde(default = "default_permission")]
    pub permission: String,
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            permission: default_permission(),
        }
    }
}

/// User-facing message texts.
///
/// `bag_received` may contain `{seed}`, replaced by the seed name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MessagesConfig {
    /// Sent when an empty bag is used on farmland.
    #[serde(default = "default_bag_empty")]
    pub bag_empty: String,

    /// Sent when a scan planted nothing.
    #[serde(default = "default_no_suitable_location")]
    pub no_suitable_location: String,

    /// Sent after the acquisition command handed out a bag.
    #[serde(default = "default_bag_received")]
    pub bag_received: String,

    /// Sent when the command has the wrong number of arguments.
    #[serde(default = "default_usage")]
    pub usage: String,

    /// Sent when the command names an unknown seed type.
    #[serde(default = "default_invalid_seed_type")]
    pub invalid_seed_type: String,

    /// Sent when a non-player runs the command.
    #[serde(default = "default_player_only")]
    pub player_only: String,

    /// Sent when the sender lacks the command permission.
    #[serde(default = "default_no_permission")]
    pub no_permission: String,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            bag_empty: default_bag_empty(),
            no_suitable_location: default_no_suitable_location(),
            bag_received: default_bag_received(),
            usage: default_usage(),
            invalid_seed_type: default_invalid_seed_type(),
            player_only: default_player_only(),
            no_permission: default_no_permission(),
        }
    }
}

/// Output format for log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins when set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Line format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

const fn default_radius() -> u32 {
    2
}

const fn default_true() -> bool {
    true
}

fn default_permission() -> String {
    "seedbags.get".to_owned()
}

fn default_bag_empty() -> String {
    "Your seed bag is empty!".to_owned()
}

fn default_no_suitable_location() -> String {
    "No suitable place to plant seeds!".to_owned()
}

fn default_bag_received() -> String {
    "You have received a seed bag for {seed}.".to_owned()
}

fn default_usage() -> String {
    "Usage: /getseedbag <seedtype>".to_owned()
}

fn default_invalid_seed_type() -> String {
    "Invalid seed type.".to_owned()
}

fn default_player_only() -> String {
    "This command can only be run by a player.".to_owned()
}

fn default_no_permission() -> String {
    "You do not have permission to use this command.".to_owned()
}

fn default_log_level() -> String {
    "info".to_owned()
}
