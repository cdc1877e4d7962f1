//! World host, placement notifications, and item stacking for the seed bag
//! mechanic.
//!
//! This crate holds the seams between the seed bag engines and the host
//! environment, plus an in-memory host for tests and the demo binary.
//!
//! # Modules
//!
//! - [`error`] -- Error types for world edits.
//! - [`host`] -- The [`WorldHost`] trait: tile reads/writes, placement
//!   notifications, ground item entities.
//! - [`placement`] -- [`PlacementNotification`], the [`PlacementListener`]
//!   veto seam, and the [`ProtectedRegion`] listener.
//! - [`stacking`] -- The optional [`StackingAdapter`] collaborator with the
//!   [`NoStacking`] fallback and the in-memory [`SuperstackRegistry`].
//! - [`voxel`] -- [`VoxelWorld`], a sparse in-memory [`WorldHost`].

pub mod error;
pub mod host;
pub mod placement;
pub mod stacking;
pub mod voxel;

// Re-export primary types at crate root.
pub use error::WorldError;
pub use host::WorldHost;
pub use placement::{PlacementListener, PlacementNotification, ProtectedRegion};
pub use stacking::{NoStacking, StackingAdapter, SuperstackRegistry};
pub use voxel::{PlacementRecord, VoxelWorld};
