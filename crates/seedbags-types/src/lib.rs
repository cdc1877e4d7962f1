//! Shared type definitions for the seed bag mechanic.
//!
//! This crate is the leaf of the workspace: plain data with serde support
//! and no behavior beyond lookups.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for actors and ground items
//! - [`enums`] -- Item types, block types, and interaction kinds
//! - [`seed_kind`] -- The [`SeedKind`] registry (base terrain and growth feature per kind)
//! - [`persistent`] -- The typed key-value record attached to an item
//! - [`structs`] -- Tile positions, tile states, item stacks, ground items

pub mod enums;
pub mod ids;
pub mod persistent;
pub mod seed_kind;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{BlockType, InteractAction, ItemType};
pub use ids::{ActorId, GroundItemId};
pub use persistent::{DataValue, PersistentData};
pub use seed_kind::{ACTIVATION_SURFACES, SeedKind, is_activation_surface};
pub use structs::{BlockState, GroundItem, ItemMeta, ItemStack, TilePos};
