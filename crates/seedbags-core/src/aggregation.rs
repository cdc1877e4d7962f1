//! Pickup aggregation: seeds picked up by a player flow into their bags.
//!
//! The engine runs once per pickup notification. It resolves the true
//! quantity of the ground item (asking the stacking collaborator about merged
//! superstacks), removes the entity, fills every matching bag in slot order,
//! and returns whatever did not fit to the inventory or, failing that, to the
//! ground. All checks happen before the first mutation, so an ignored pickup
//! leaves the world, the stacking subsystem, and every bag untouched.
//!
//! Correctness relies on the host running each notification to completion
//! on a single logic thread: the read-modify-write of a bag's count is not
//! guarded against interleaving.

use seedbags_types::{GroundItem, GroundItemId, ItemStack, SeedKind, TilePos};
use seedbags_world::{StackingAdapter, WorldHost};
use tracing::{debug, info, warn};

use crate::actor::Actor;
use crate::bag::SeedBags;
use crate::config::LeftoverDrop;

/// A pickup notification: an actor is about to pick up a ground item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickupEvent {
    /// The ground item entity being picked up.
    pub item: GroundItemId,
}

/// Why a pickup was left to the host's default handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupIgnored {
    /// Aggregation is switched off (no stacking subsystem and the config
    /// requires one).
    Disabled,
    /// The actor is not a player.
    NotPlayer,
    /// The ground item no longer exists.
    MissingItem,
    /// The item is not a registered seed kind.
    NotASeed,
    /// The actor carries no bag of this kind.
    NoMatchingBag,
    /// The quantity could not be resolved or was zero.
    InvalidQuantity,
}

/// What an absorbed pickup did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Absorbed {
    /// The seed kind collected.
    pub kind: SeedKind,
    /// Units the ground item represented.
    pub quantity: u32,
    /// Units stored into bags.
    pub stored: u32,
    /// Units returned to the inventory as raw seeds.
    pub returned: u32,
    /// Units dropped back into the world.
    pub dropped: u32,
    /// Whether the item was a merged superstack.
    pub superstack: bool,
}

/// Result of handling a pickup notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupOutcome {
    /// Nothing was touched; the default pickup proceeds.
    Ignored(PickupIgnored),
    /// The seeds went into bags; the default pickup must be cancelled.
    Absorbed(Absorbed),
}

impl PickupOutcome {
    /// Whether the host must cancel its default pickup.
    pub const fn cancels_default(&self) -> bool {
        matches!(self, Self::Absorbed(_))
    }
}

/// Moves picked-up seeds into matching bags.
pub struct AggregationEngine {
    bags: SeedBags,
    stacking: Box<dyn StackingAdapter>,
    leftover_drop: LeftoverDrop,
    enabled: bool,
}

impl core::fmt::Debug for AggregationEngine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AggregationEngine")
            .field("leftover_drop", &self.leftover_drop)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

impl AggregationEngine {
    /// Create an engine querying `stacking` for superstack sizes.
    pub fn new(
        bags: SeedBags,
        stacking: Box<dyn StackingAdapter>,
        leftover_drop: LeftoverDrop,
        enabled: bool,
    ) -> Self {
        Self {
            bags,
            stacking,
            leftover_drop,
            enabled,
        }
    }

    /// Whether pickups are aggregated at all.
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Handle one pickup notification.
    pub fn handle_pickup<W>(
        &mut self,
        world: &mut W,
        actor: &mut Actor,
        event: &PickupEvent,
    ) -> PickupOutcome
    where
        W: WorldHost + ?Sized,
    {
        if !self.enabled {
            return PickupOutcome::Ignored(PickupIgnored::Disabled);
        }
        if !actor.is_player() {
            return PickupOutcome::Ignored(PickupIgnored::NotPlayer);
        }
        let Some(ground) = world.ground_item(event.item).cloned() else {
            return PickupOutcome::Ignored(PickupIgnored::MissingItem);
        };
        let Some(kind) = SeedKind::from_item_type(ground.stack.item) else {
            return PickupOutcome::Ignored(PickupIgnored::NotASeed);
        };
        if actor.inventory.first_matching(Some(kind)).is_none() {
            return PickupOutcome::Ignored(PickupIgnored::NoMatchingBag);
        }

        let superstack = self.stacking.is_superstack(&ground);
        let quantity = if superstack {
            self.stacking.size_of(&ground)
        } else {
            Some(ground.stack.amount)
        };
        let Some(quantity) = quantity.filter(|q| *q > 0) else {
            warn!(item = %ground.id, superstack, "Pickup quantity unresolved");
            return PickupOutcome::Ignored(PickupIgnored::InvalidQuantity);
        };

        if world.remove_ground_item(ground.id).is_none() {
            return PickupOutcome::Ignored(PickupIgnored::MissingItem);
        }
        if superstack {
            self.stacking.remove(&ground);
        }

        let remaining = self.fill_bags(actor, kind, quantity);
        let stored = quantity.saturating_sub(remaining);
        let (returned, dropped) = self.return_leftover(world, actor, &ground, kind, remaining);

        info!(
            actor = %actor.id,
            kind = %kind,
            quantity,
            stored,
            returned,
            dropped,
            superstack,
            "Pickup absorbed into seed bags"
        );

        PickupOutcome::Absorbed(Absorbed {
            kind,
            quantity,
            stored,
            returned,
            dropped,
            superstack,
        })
    }

    /// Deposit into every bag of `kind` in slot order until nothing remains.
    ///
    /// Returns the units no bag could take.
    fn fill_bags(&self, actor: &mut Actor, kind: SeedKind, quantity: u32) -> u32 {
        let mut remaining = quantity;
        for slot in actor.inventory.matching_slots(Some(kind)) {
            if remaining == 0 {
                break;
            }
            if let Some(bag) = actor.inventory.get_mut(slot) {
                remaining = self.bags.deposit(bag, remaining);
            }
        }
        remaining
    }

    /// Give `amount` raw seeds back to the actor, dropping what does not fit.
    ///
    /// Returns `(returned, dropped)`.
    fn return_leftover<W>(
        &self,
        world: &mut W,
        actor: &mut Actor,
        ground: &GroundItem,
        kind: SeedKind,
        amount: u32,
    ) -> (u32, u32)
    where
        W: WorldHost + ?Sized,
    {
        if amount == 0 {
            return (0, 0);
        }
        let overflow = actor
            .inventory
            .add_item(ItemStack::new(kind.item_type(), amount));
        let dropped = overflow.as_ref().map_or(0, |stack| stack.amount);
        if let Some(stack) = overflow {
            let pos = self.drop_position(actor, ground);
            let id = world.drop_item(pos, stack);
            debug!(item = %id, pos = %pos, amount = dropped, "Leftover seeds dropped");
        }
        (amount.saturating_sub(dropped), dropped)
    }

    fn drop_position(&self, actor: &Actor, ground: &GroundItem) -> TilePos {
        match self.leftover_drop {
            LeftoverDrop::ActorPosition => actor.position,
            LeftoverDrop::PickupPosition => ground.pos,
        }
    }
}
