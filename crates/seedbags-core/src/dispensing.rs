//! Area planting: a bag used on farmland plants its seeds around the target.
//!
//! Candidates are scanned in row-major order, `dx` outer and `dz` inner, both
//! running from `-radius` to `+radius` around the clicked tile. A candidate
//! accepts a seed when its terrain is the kind's required base and the tile
//! above it is empty. Each placement is offered to the host's listeners
//! before the count is touched; a vetoed placement is reverted to the exact
//! previous tile state and costs nothing. The scan stops the moment the bag
//! runs dry, and the final count is written once through
//! [`SeedBags::set_count`].

use seedbags_types::{
    ActorId, BlockType, InteractAction, ItemStack, SeedKind, TilePos, is_activation_surface,
};
use seedbags_world::{PlacementNotification, WorldHost};
use tracing::{debug, info, warn};

use crate::actor::Actor;
use crate::bag::{self, SeedBags};
use crate::config::{DispensingConfig, MAX_RADIUS, MessagesConfig};

/// The tile an interaction targeted, as the host saw it at dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickedTile {
    /// Position of the clicked tile.
    pub pos: TilePos,
    /// Terrain of the clicked tile.
    pub terrain: BlockType,
}

/// An "use held item" notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractEvent {
    /// The kind of click.
    pub action: InteractAction,
    /// The clicked tile, if the click hit one.
    pub clicked: Option<ClickedTile>,
}

impl InteractEvent {
    /// A right click on `pos`, whose terrain is `terrain`.
    pub const fn right_click_block(pos: TilePos, terrain: BlockType) -> Self {
        Self {
            action: InteractAction::RightClickBlock,
            clicked: Some(ClickedTile { pos, terrain }),
        }
    }
}

/// Why an interaction was left to the host's default handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractIgnored {
    /// Only right clicks on a block plant seeds.
    NotRightClickBlock,
    /// The held item is not a bag.
    NotABag,
    /// The clicked terrain is not an activation surface.
    UnsupportedSurface,
}

/// Result of handling an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractOutcome {
    /// Nothing happened; the default interaction proceeds.
    Ignored(InteractIgnored),
    /// The bag holds no seeds. The world was not inspected.
    BagEmpty,
    /// The bag's kind could not be read. The world was not touched.
    InvalidBag,
    /// Every candidate was unsuitable or vetoed; the bag is unchanged.
    NoSuitableLocation {
        /// Placements offered to listeners.
        attempted: u32,
        /// Placements listeners vetoed.
        vetoed: u32,
    },
    /// At least one seed was planted.
    Planted {
        /// The kind planted.
        kind: SeedKind,
        /// Features placed and kept.
        placed: u32,
        /// Placements listeners vetoed.
        vetoed: u32,
        /// Count left in the bag.
        remaining: u32,
    },
}

impl InteractOutcome {
    /// Whether the host must cancel its default interaction.
    pub const fn cancels_default(&self) -> bool {
        !matches!(self, Self::Ignored(_))
    }
}

/// Counters for one scan.
#[derive(Debug, Clone, Copy, Default)]
struct ScanTally {
    attempted: u32,
    placed: u32,
    vetoed: u32,
}

/// Plants seeds from the held bag around a clicked tile.
#[derive(Debug, Clone)]
pub struct DispensingEngine {
    bags: SeedBags,
    dispensing: DispensingConfig,
    messages: MessagesConfig,
}

impl DispensingEngine {
    /// Create an engine with the given radius and message settings.
    pub const fn new(bags: SeedBags, dispensing: DispensingConfig, messages: MessagesConfig) -> Self {
        Self {
            bags,
            dispensing,
            messages,
        }
    }

    /// Handle one interaction with the actor's held item.
    pub fn handle_interact<W>(
        &self,
        world: &mut W,
        actor: &mut Actor,
        event: &InteractEvent,
    ) -> InteractOutcome
    where
        W: WorldHost + ?Sized,
    {
        if event.action != InteractAction::RightClickBlock {
            return InteractOutcome::Ignored(InteractIgnored::NotRightClickBlock);
        }
        let Some(held) = actor.held_item().filter(|item| bag::matches(item, None)) else {
            return InteractOutcome::Ignored(InteractIgnored::NotABag);
        };
        let Some(clicked) = event.clicked.filter(|tile| is_activation_surface(tile.terrain)) else {
            return InteractOutcome::Ignored(InteractIgnored::UnsupportedSurface);
        };

        let count = bag::count_of(held);
        if count == 0 {
            actor.notify(self.messages.bag_empty.clone());
            return InteractOutcome::BagEmpty;
        }
        let Some(kind) = bag::kind_of(held) else {
            warn!(actor = %actor.id, "Held seed bag has an unreadable kind");
            return InteractOutcome::InvalidBag;
        };

        let cause = held.clone();
        let (tally, remaining) = self.scan(world, actor.id, clicked.pos, kind, count, &cause);

        if tally.placed == 0 {
            actor.notify(self.messages.no_suitable_location.clone());
            info!(
                actor = %actor.id,
                kind = %kind,
                target = %clicked.pos,
                attempted = tally.attempted,
                vetoed = tally.vetoed,
                "No suitable location to plant"
            );
            return InteractOutcome::NoSuitableLocation {
                attempted: tally.attempted,
                vetoed: tally.vetoed,
            };
        }

        let stored = actor
            .held_item_mut()
            .and_then(|bag| self.bags.set_count(bag, i64::from(remaining)));
        info!(
            actor = %actor.id,
            kind = %kind,
            target = %clicked.pos,
            placed = tally.placed,
            vetoed = tally.vetoed,
            remaining = stored.unwrap_or(remaining),
            "Seeds planted"
        );

        InteractOutcome::Planted {
            kind,
            placed: tally.placed,
            vetoed: tally.vetoed,
            remaining,
        }
    }

    /// Walk the neighborhood of `target`, planting until `count` runs out.
    ///
    /// Returns the tally and the count left.
    fn scan<W>(
        &self,
        world: &mut W,
        actor: ActorId,
        target: TilePos,
        kind: SeedKind,
        count: u32,
        cause: &ItemStack,
    ) -> (ScanTally, u32)
    where
        W: WorldHost + ?Sized,
    {
        let radius = i32::try_from(self.dispensing.radius_for(kind).min(MAX_RADIUS)).unwrap_or(0);
        let mut remaining = count;
        let mut tally = ScanTally::default();

        'scan: for dx in -radius..=radius {
            for dz in -radius..=radius {
                let Some(base) = target.offset(dx, 0, dz) else {
                    continue;
                };
                if world.terrain_of(base) != kind.required_base() {
                    continue;
                }
                let Some(above) = base.above() else {
                    continue;
                };
                if !world.is_empty(above) {
                    continue;
                }

                let previous = world.block_at(above);
                world.place(above, kind.growth_feature(), 0);
                tally.attempted = tally.attempted.saturating_add(1);
                let notification = PlacementNotification::new(
                    above,
                    world.block_at(above),
                    previous,
                    base,
                    actor,
                    cause.clone(),
                );
                if world.emit_placement(notification) {
                    world.set_block(above, previous);
                    tally.vetoed = tally.vetoed.saturating_add(1);
                    debug!(pos = %above, "Planting vetoed, tile restored");
                    continue;
                }

                tally.placed = tally.placed.saturating_add(1);
                remaining = remaining.saturating_sub(1);
                if remaining == 0 {
                    break 'scan;
                }
            }
        }

        (tally, remaining)
    }
}

#[cfg(test)]
mod tests {
    use seedbags_types::{BlockState, ItemStack, ItemType};
    use seedbags_world::VoxelWorld;

    use super::*;
    use crate::config::SeedBagConfig;

    fn engine_with(config: &SeedBagConfig) -> DispensingEngine {
        DispensingEngine::new(
            SeedBags::new(config),
            config.dispensing.clone(),
            config.messages.clone(),
        )
    }

    fn engine() -> DispensingEngine {
        engine_with(&SeedBagConfig::default())
    }

    fn holding(kind: SeedKind, count: i64) -> Actor {
        let model = SeedBags::new(&SeedBagConfig::default());
        let mut bag = model.create(kind);
        assert!(model.set_count(&mut bag, count).is_some());
        let mut actor = Actor::player("dana", TilePos::new(0, 1, 0));
        assert!(actor.inventory.set(0, Some(bag)).is_ok());
        actor
    }

    fn field(base: BlockType) -> VoxelWorld {
        let mut world = VoxelWorld::new();
        assert!(
            world
                .fill(TilePos::new(-3, 0, -3), TilePos::new(3, 0, 3), BlockState::new(base))
                .is_ok()
        );
        world
    }

    fn click(world: &VoxelWorld, pos: TilePos) -> InteractEvent {
        InteractEvent::right_click_block(pos, world.terrain_of(pos))
    }

    fn held_count(actor: &Actor) -> Option<u32> {
        actor.held_item().map(bag::count_of)
    }

    #[test]
    fn plants_full_neighborhood() {
        let mut world = field(BlockType::Farmland);
        let mut actor = holding(SeedKind::Carrot, 100);
        let event = click(&world, TilePos::new(0, 0, 0));
        let outcome = engine().handle_interact(
            &mut world,
            &mut actor,
            &event,
        );

        assert_eq!(
            outcome,
            InteractOutcome::Planted { kind: SeedKind::Carrot, placed: 25, vetoed: 0, remaining: 75 }
        );
        assert_eq!(held_count(&actor), Some(75));
        assert_eq!(world.block_at(TilePos::new(2, 1, -2)), BlockState::new(BlockType::Carrots));
        assert!(world.is_empty(TilePos::new(3, 1, 0)));
    }

    #[test]
    fn nether_wart_needs_soul_sand() {
        let mut world = field(BlockType::Farmland);
        let mut actor = holding(SeedKind::NetherWart, 10);
        let event = click(&world, TilePos::new(0, 0, 0));
        let outcome = engine().handle_interact(
            &mut world,
            &mut actor,
            &event,
        );
        assert_eq!(outcome, InteractOutcome::NoSuitableLocation { attempted: 0, vetoed: 0 });
        assert_eq!(
            actor.notices().last().map(String::as_str),
            Some("No suitable place to plant seeds!")
        );
        assert_eq!(held_count(&actor), Some(10));

        let mut nether = field(BlockType::SoulSand);
        let event = click(&nether, TilePos::new(0, 0, 0));
        let outcome = engine().handle_interact(
            &mut nether,
            &mut actor,
            &event,
        );
        assert!(matches!(outcome, InteractOutcome::Planted { placed: 10, remaining: 0, .. }));
    }

    #[test]
    fn occupied_tiles_are_skipped() {
        let mut world = field(BlockType::Farmland);
        world.set_block(TilePos::new(-2, 1, -2), BlockState::new(BlockType::Stone));
        let mut actor = holding(SeedKind::Wheat, 1);
        let event = click(&world, TilePos::new(0, 0, 0));
        let outcome = engine().handle_interact(
            &mut world,
            &mut actor,
            &event,
        );
        assert!(matches!(outcome, InteractOutcome::Planted { placed: 1, .. }));
        assert_eq!(world.terrain_of(TilePos::new(-2, 1, -1)), BlockType::Wheat);
        assert_eq!(world.terrain_of(TilePos::new(-2, 1, -2)), BlockType::Stone);
    }

    #[test]
    fn radius_override_plants_single_tile() {
        let config = SeedBagConfig::parse("dispensing:\n  radius_overrides:\n    pumpkin: 0\n");
        assert!(config.is_ok());
        let config = config.ok().unwrap_or_default();
        let mut world = field(BlockType::Farmland);
        let mut actor = holding(SeedKind::Pumpkin, 9);

        let event = click(&world, TilePos::new(1, 0, 1));

        let outcome = engine_with(&config).handle_interact(
            &mut world,
            &mut actor,
            &event,
        );
        assert!(matches!(outcome, InteractOutcome::Planted { placed: 1, remaining: 8, .. }));
        assert_eq!(world.terrain_of(TilePos::new(1, 1, 1)), BlockType::PumpkinStem);
        assert_eq!(
            actor.held_item().and_then(|b| b.meta.as_ref()).and_then(|m| m.lore.first().cloned()),
            Some(String::from("Plants crops in a 1x1 area."))
        );
    }

    #[test]
    fn ignores_other_actions_items_and_surfaces() {
        let mut world = field(BlockType::Farmland);
        let engine = engine();

        let mut actor = holding(SeedKind::Wheat, 5);
        let air = InteractEvent { action: InteractAction::RightClickAir, clicked: None };
        assert_eq!(
            engine.handle_interact(&mut world, &mut actor, &air),
            InteractOutcome::Ignored(InteractIgnored::NotRightClickBlock)
        );

        world.set_block(TilePos::new(3, 0, 3), BlockState::new(BlockType::Dirt));
        let dirt = click(&world, TilePos::new(3, 0, 3));
        assert_eq!(
            engine.handle_interact(&mut world, &mut actor, &dirt),
            InteractOutcome::Ignored(InteractIgnored::UnsupportedSurface)
        );

        let mut plain = Actor::player("eve", TilePos::new(0, 1, 0));
        assert!(plain.inventory.set(0, Some(ItemStack::new(ItemType::Paper, 1))).is_ok());
        let farmland = click(&world, TilePos::new(0, 0, 0));
        let outcome = engine.handle_interact(&mut world, &mut plain, &farmland);
        assert_eq!(outcome, InteractOutcome::Ignored(InteractIgnored::NotABag));
        assert!(!outcome.cancels_default());
        assert_eq!(world.tile_count(), 49);
    }

    #[test]
    fn empty_bag_reports() {
        let mut world = field(BlockType::Farmland);
        let mut actor = holding(SeedKind::Wheat, 0);
        let event = click(&world, TilePos::new(0, 0, 0));
        let outcome = engine().handle_interact(
            &mut world,
            &mut actor,
            &event,
        );
        assert_eq!(outcome, InteractOutcome::BagEmpty);
        assert!(outcome.cancels_default());
        assert_eq!(actor.notices(), [String::from("Your seed bag is empty!")]);
        assert!(world.placement_log().is_empty());
    }

    #[test]
    fn unreadable_kind_touches_nothing() {
        let mut world = field(BlockType::Farmland);
        let mut actor = holding(SeedKind::Wheat, 5);
        if let Some(meta) = actor.held_item_mut().and_then(|b| b.meta.as_mut()) {
            meta.data.set_string(bag::SEED_TYPE_KEY, "CACTUS");
        }
        let before = world.snapshot();
        let event = click(&world, TilePos::new(0, 0, 0));
        let outcome = engine().handle_interact(
            &mut world,
            &mut actor,
            &event,
        );
        assert_eq!(outcome, InteractOutcome::InvalidBag);
        assert_eq!(world.snapshot(), before);
        assert_eq!(held_count(&actor), Some(5));
    }

    #[test]
    fn vetoed_tiles_cost_nothing() {
        let mut world = field(BlockType::Farmland);
        // Veto everything on the dx = -2 row.
        world.add_listener(|n: &mut PlacementNotification| {
            if n.placed.x == -2 {
                n.set_cancelled(true);
            }
        });
        let mut actor = holding(SeedKind::Beetroot, 2);
        let event = click(&world, TilePos::new(0, 0, 0));
        let outcome = engine().handle_interact(
            &mut world,
            &mut actor,
            &event,
        );

        assert_eq!(
            outcome,
            InteractOutcome::Planted { kind: SeedKind::Beetroot, placed: 2, vetoed: 5, remaining: 0 }
        );
        assert!(world.is_empty(TilePos::new(-2, 1, 0)));
        assert_eq!(world.terrain_of(TilePos::new(-1, 1, -2)), BlockType::Beetroots);
        assert_eq!(world.terrain_of(TilePos::new(-1, 1, -1)), BlockType::Beetroots);
        assert!(world.is_empty(TilePos::new(-1, 1, 0)));
    }

    #[test]
    fn notification_carries_context() {
        let mut world = field(BlockType::Farmland);
        let mut actor = holding(SeedKind::Melon, 1);
        let event = click(&world, TilePos::new(0, 0, 0));
        let outcome = engine().handle_interact(
            &mut world,
            &mut actor,
            &event,
        );
        assert!(outcome.cancels_default());

        let record = world.placement_log().first().cloned();
        let Some(record) = record else {
            panic!("no placement recorded");
        };
        assert!(!record.vetoed);
        let n = record.notification;
        assert_eq!(n.placed, TilePos::new(-2, 1, -2));
        assert_eq!(n.against, TilePos::new(-2, 0, -2));
        assert_eq!(n.placed_state, BlockState::new(BlockType::MelonStem));
        assert_eq!(n.replaced_state, BlockState::AIR);
        assert_eq!(n.actor, actor.id);
        assert!(bag::matches(&n.cause, Some(SeedKind::Melon)));
    }
}
