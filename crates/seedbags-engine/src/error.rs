//! Error types for the seed bag demo binary.
//!
//! [`EngineError`] is the top-level error type that wraps every failure mode
//! during startup and the scripted session.

/// Top-level error for the demo binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: seedbags_core::ConfigError,
    },

    /// Building the demo world failed.
    #[error("world error: {source}")]
    World {
        /// The underlying world error.
        #[from]
        source: seedbags_world::WorldError,
    },

    /// The acquisition command refused a scripted request.
    #[error("command error: {source}")]
    Command {
        /// The underlying command error.
        #[from]
        source: seedbags_core::CommandError,
    },

    /// The scenario section of the config could not be used.
    #[error("scenario error: {message}")]
    Scenario {
        /// Description of the scenario failure.
        message: String,
    },
}
