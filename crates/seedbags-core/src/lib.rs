//! Seed bags: aggregate picked-up seeds into one item and plant them over an
//! area with a single click.
//!
//! This crate owns the bag model and the two engines that mutate it. The
//! engines are driven one notification at a time by the host and receive the
//! world they act on as an argument; nothing here keeps a reference to a bag
//! or a world between notifications.
//!
//! # Modules
//!
//! - [`actor`] -- Players and other entities, with their inventories and
//!   received messages.
//! - [`aggregation`] -- The pickup engine: seeds flow into matching bags.
//! - [`bag`] -- The bag model: kind, count, and the single clamped mutation
//!   path [`SeedBags::set_count`].
//! - [`command`] -- The `/getseedbag` acquisition command.
//! - [`config`] -- Configuration loading from `seedbags-config.yaml` into
//!   strongly-typed structs.
//! - [`dispensing`] -- The planting engine: deterministic area scan with
//!   vetoable placements.
//! - [`display`] -- Name and lore rendering from `(kind, count)`.
//! - [`error`] -- Command and container errors.
//! - [`inventory`] -- Fixed-size slot containers.
//! - [`plugin`] -- [`SeedBagPlugin`], which wires everything together.
//!
//! [`SeedBags::set_count`]: bag::SeedBags::set_count
//! [`SeedBagPlugin`]: plugin::SeedBagPlugin

pub mod actor;
pub mod aggregation;
pub mod bag;
pub mod command;
pub mod config;
pub mod dispensing;
pub mod display;
pub mod error;
pub mod inventory;
pub mod plugin;

pub use actor::{Actor, ActorKind};
pub use aggregation::{Absorbed, AggregationEngine, PickupEvent, PickupIgnored, PickupOutcome};
pub use bag::{MAX_CAPACITY, SeedBags};
pub use command::{AcquireCommand, COMMAND_NAME, CommandSender};
pub use config::{ConfigError, LeftoverDrop, SeedBagConfig};
pub use dispensing::{
    ClickedTile, DispensingEngine, InteractEvent, InteractIgnored, InteractOutcome,
};
pub use error::{CommandError, InventoryError};
pub use inventory::Container;
pub use plugin::SeedBagPlugin;
