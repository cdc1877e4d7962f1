//! Cancellable placement notifications.
//!
//! Before a growth feature is committed, the world host hands a
//! [`PlacementNotification`] to every registered [`PlacementListener`] in
//! order. Each listener may set or clear the cancelled flag; whatever the
//! flag says after the last listener is the veto decision. The exchange is
//! synchronous: the caller learns the verdict before it touches any counter.

use std::collections::BTreeSet;

use seedbags_types::{ActorId, BlockState, ItemStack, TilePos};

/// A pending block placement that other host systems may veto.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementNotification {
    /// The tile that received the new block.
    pub placed: TilePos,
    /// The state now occupying `placed`.
    pub placed_state: BlockState,
    /// The state `placed` held before the placement.
    pub replaced_state: BlockState,
    /// The tile the block was placed against (the base below it).
    pub against: TilePos,
    /// The actor responsible for the placement.
    pub actor: ActorId,
    /// The item that caused the placement.
    pub cause: ItemStack,
    cancelled: bool,
}

impl PlacementNotification {
    /// Create a notification that is not yet cancelled.
    pub const fn new(
        placed: TilePos,
        placed_state: BlockState,
        replaced_state: BlockState,
        against: TilePos,
        actor: ActorId,
        cause: ItemStack,
    ) -> Self {
        Self {
            placed,
            placed_state,
            replaced_state,
            against,
            actor,
            cause,
            cancelled: false,
        }
    }

    /// Whether a listener has vetoed the placement.
    pub const fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Veto (`true`) or un-veto (`false`) the placement.
    pub const fn set_cancelled(&mut self, cancelled: bool) {
        self.cancelled = cancelled;
    }
}

/// A host system that observes, and may veto, block placements.
pub trait PlacementListener {
    /// Inspect a pending placement and optionally change its cancelled flag.
    fn on_place(&mut self, notification: &mut PlacementNotification);
}

impl<F> PlacementListener for F
where
    F: FnMut(&mut PlacementNotification),
{
    fn on_place(&mut self, notification: &mut PlacementNotification) {
        self(notification);
    }
}

/// A box of tiles where only trusted actors may place blocks.
///
/// Models the land-claim style protection other host systems enforce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectedRegion {
    min: TilePos,
    max: TilePos,
    trusted: BTreeSet<ActorId>,
}

impl ProtectedRegion {
    /// Protect every tile between two corners, inclusive.
    ///
    /// The corners may be given in any order.
    pub fn new(a: TilePos, b: TilePos) -> Self {
        Self {
            min: TilePos::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: TilePos::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
            trusted: BTreeSet::new(),
        }
    }

    /// Allow `actor` to place inside the region.
    #[must_use]
    pub fn trust(mut self, actor: ActorId) -> Self {
        self.trusted.insert(actor);
        self
    }

    /// Whether `pos` lies inside the region.
    pub const fn contains(&self, pos: TilePos) -> bool {
        pos.x >= self.min.x
            && pos.x <= self.max.x
            && pos.y >= self.min.y
            && pos.y <= self.max.y
            && pos.z >= self.min.z
            && pos.z <= self.max.z
    }
}

impl PlacementListener for ProtectedRegion {
    fn on_place(&mut self, notification: &mut PlacementNotification) {
        if self.contains(notification.placed) && !self.trusted.contains(&notification.actor) {
            notification.set_cancelled(true);
        }
    }
}

#[cfg(test)]
mod tests {
    use seedbags_types::{BlockType, ItemType};

    use super::*;

    fn notification_at(pos: TilePos, actor: ActorId) -> PlacementNotification {
        PlacementNotification::new(
            pos,
            BlockState::new(BlockType::Wheat),
            BlockState::AIR,
            TilePos::new(pos.x, pos.y.saturating_sub(1), pos.z),
            actor,
            ItemStack::new(ItemType::Paper, 1),
        )
    }

    #[test]
    fn new_notification_is_not_cancelled() {
        let n = notification_at(TilePos::new(0, 1, 0), ActorId::new());
        assert!(!n.is_cancelled());
    }

    #[test]
    fn region_vetoes_untrusted_actor() {
        let mut region = ProtectedRegion::new(TilePos::new(5, 5, 5), TilePos::new(-5, -5, -5));
        let mut n = notification_at(TilePos::new(0, 1, 0), ActorId::new());
        region.on_place(&mut n);
        assert!(n.is_cancelled());
    }

    #[test]
    fn region_allows_trusted_actor_and_outside_tiles() {
        let owner = ActorId::new();
        let mut region =
            ProtectedRegion::new(TilePos::new(0, 0, 0), TilePos::new(3, 3, 3)).trust(owner);

        let mut inside = notification_at(TilePos::new(1, 1, 1), owner);
        region.on_place(&mut inside);
        assert!(!inside.is_cancelled());

        let mut outside = notification_at(TilePos::new(4, 1, 1), ActorId::new());
        region.on_place(&mut outside);
        assert!(!outside.is_cancelled());
    }

    #[test]
    fn closures_are_listeners() {
        let mut veto_all = |n: &mut PlacementNotification| n.set_cancelled(true);
        let mut n = notification_at(TilePos::new(0, 1, 0), ActorId::new());
        veto_all.on_place(&mut n);
        assert!(n.is_cancelled());
    }
}
