//! The world seam the seed bag engines talk to.
//!
//! [`WorldHost`] abstracts the host environment: tile reads and writes, the
//! cancellable placement notification, and ground item entities. The engines
//! receive the host as an explicit argument on every notification and never
//! keep it between notifications.
//!
//! The host is assumed to dispatch one notification at a time on a single
//! logic thread and run each to completion. Nothing behind this trait is
//! expected to block or interleave with another engine call.

use seedbags_types::{BlockState, BlockType, GroundItem, GroundItemId, ItemStack, TilePos};

use crate::placement::PlacementNotification;

/// Tile, placement, and ground item access offered by the host environment.
pub trait WorldHost {
    /// The full state of the tile at `pos`. Unloaded or unknown tiles are air.
    fn block_at(&self, pos: TilePos) -> BlockState;

    /// Replace the tile at `pos`.
    fn set_block(&mut self, pos: TilePos, state: BlockState);

    /// Offer a pending placement to every listener.
    ///
    /// Returns `true` if the placement was vetoed.
    fn emit_placement(&mut self, notification: PlacementNotification) -> bool;

    /// Look up a ground item entity.
    fn ground_item(&self, id: GroundItemId) -> Option<&GroundItem>;

    /// Remove a ground item entity from the world, returning it.
    fn remove_ground_item(&mut self, id: GroundItemId) -> Option<GroundItem>;

    /// Spawn a ground item entity holding `stack` at `pos`.
    fn drop_item(&mut self, pos: TilePos, stack: ItemStack) -> GroundItemId;

    /// The terrain type of the tile at `pos`.
    fn terrain_of(&self, pos: TilePos) -> BlockType {
        self.block_at(pos).block
    }

    /// Whether the tile at `pos` is empty.
    fn is_empty(&self, pos: TilePos) -> bool {
        self.block_at(pos).is_air()
    }

    /// Put `feature` at growth stage `stage` on the tile at `pos`.
    fn place(&mut self, pos: TilePos, feature: BlockType, stage: u8) {
        self.set_block(pos, BlockState::new(feature).with_age(stage));
    }
}
