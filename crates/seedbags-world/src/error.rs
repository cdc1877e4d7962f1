//! Error types for the `seedbags-world` crate.
//!
//! All fallible operations in this crate return [`WorldError`] through the
//! standard [`Result`] type.

use seedbags_types::TilePos;

/// Errors that can occur while editing the in-memory world.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// A region's minimum corner lies beyond its maximum corner.
    #[error("invalid region: {min} is not below {max}")]
    InvalidRegion {
        /// The requested minimum corner.
        min: TilePos,
        /// The requested maximum corner.
        max: TilePos,
    },
}
