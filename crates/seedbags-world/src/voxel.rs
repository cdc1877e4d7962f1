//! An in-memory world host.
//!
//! [`VoxelWorld`] stores tiles sparsely (absent tiles are air), keeps ground
//! item entities keyed by [`GroundItemId`], and runs placement listeners in
//! registration order. Every emitted notification is recorded together with
//! its verdict so callers can audit what the engines attempted.

use std::collections::BTreeMap;

use seedbags_types::{BlockState, GroundItem, GroundItemId, ItemStack, TilePos};
use tracing::debug;

use crate::error::WorldError;
use crate::host::WorldHost;
use crate::placement::{PlacementListener, PlacementNotification};

/// One emitted placement notification and its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementRecord {
    /// The notification as the last listener left it.
    pub notification: PlacementNotification,
    /// Whether the placement was vetoed.
    pub vetoed: bool,
}

/// A sparse tile map with ground items and placement listeners.
#[derive(Default)]
pub struct VoxelWorld {
    /// Non-air tiles indexed by position.
    tiles: BTreeMap<TilePos, BlockState>,
    /// Ground item entities indexed by identifier.
    ground_items: BTreeMap<GroundItemId, GroundItem>,
    /// Placement listeners in registration order.
    listeners: Vec<Box<dyn PlacementListener>>,
    /// Every placement notification emitted so far.
    placement_log: Vec<PlacementRecord>,
}

impl core::fmt::Debug for VoxelWorld {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VoxelWorld")
            .field("tiles", &self.tiles.len())
            .field("ground_items", &self.ground_items.len())
            .field("listeners", &self.listeners.len())
            .field("placements", &self.placement_log.len())
            .finish()
    }
}

impl VoxelWorld {
    /// Create an empty world: every tile is air.
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------
    // Tiles
    // -------------------------------------------------------------------

    /// Fill the box between `min` and `max` (inclusive) with `state`.
    ///
    /// Returns the number of tiles written.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidRegion`] if `min` exceeds `max` on any axis.
    pub fn fill(&mut self, min: TilePos, max: TilePos, state: BlockState) -> Result<u64, WorldError> {
        if min.x > max.x || min.y > max.y || min.z > max.z {
            return Err(WorldError::InvalidRegion { min, max });
        }
        let mut written: u64 = 0;
        for x in min.x..=max.x {
            for y in min.y..=max.y {
                for z in min.z..=max.z {
                    self.set_block(TilePos::new(x, y, z), state);
                    written = written.saturating_add(1);
                }
            }
        }
        Ok(written)
    }

    /// A copy of every non-air tile.
    pub fn snapshot(&self) -> BTreeMap<TilePos, BlockState> {
        self.tiles.clone()
    }

    /// Number of non-air tiles.
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    // -------------------------------------------------------------------
    // Placement listeners
    // -------------------------------------------------------------------

    /// Register a listener. Listeners run in registration order.
    pub fn add_listener(&mut self, listener: impl PlacementListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Every placement notification emitted so far, oldest first.
    pub fn placement_log(&self) -> &[PlacementRecord] {
        &self.placement_log
    }

    // -------------------------------------------------------------------
    // Ground items
    // -------------------------------------------------------------------

    /// Iterate over every ground item entity.
    pub fn ground_items(&self) -> impl Iterator<Item = &GroundItem> {
        self.ground_items.values()
    }

    /// Total units of all ground items of the same type as `stack` at `pos`.
    pub fn ground_amount_at(&self, pos: TilePos, stack: &ItemStack) -> u64 {
        self.ground_items
            .values()
            .filter(|item| item.pos == pos && item.stack.is_similar(stack))
            .fold(0_u64, |sum, item| sum.saturating_add(u64::from(item.stack.amount)))
    }
}

impl WorldHost for VoxelWorld {
    fn block_at(&self, pos: TilePos) -> BlockState {
        self.tiles.get(&pos).copied().unwrap_or(BlockState::AIR)
    }

    fn set_block(&mut self, pos: TilePos, state: BlockState) {
        if state.is_air() {
            self.tiles.remove(&pos);
        } else {
            self.tiles.insert(pos, state);
        }
    }

    fn emit_placement(&mut self, mut notification: PlacementNotification) -> bool {
        for listener in &mut self.listeners {
            listener.on_place(&mut notification);
        }
        let vetoed = notification.is_cancelled();
        if vetoed {
            debug!(pos = %notification.placed, actor = %notification.actor, "Placement vetoed");
        }
        self.placement_log.push(PlacementRecord {
            notification,
            vetoed,
        });
        vetoed
    }

    fn ground_item(&self, id: GroundItemId) -> Option<&GroundItem> {
        self.ground_items.get(&id)
    }

    fn remove_ground_item(&mut self, id: GroundItemId) -> Option<GroundItem> {
        self.ground_items.remove(&id)
    }

    fn drop_item(&mut self, pos: TilePos, stack: ItemStack) -> GroundItemId {
        let id = GroundItemId::new();
        self.ground_items.insert(id, GroundItem { id, pos, stack });
        id
    }
}
