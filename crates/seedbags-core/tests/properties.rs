//! End-to-end behavior of the seed bag engines against an in-memory world.
//!
//! A recording wrapper around [`VoxelWorld`] logs every tile read, tile
//! write, and placement notification so the tests can assert not just what
//! changed but what the engines looked at.

#![allow(clippy::arithmetic_side_effects)]

use std::cell::RefCell;

use seedbags_core::bag::{self, MAX_CAPACITY};
use seedbags_core::{
    Actor, InteractEvent, InteractOutcome, PickupEvent, PickupOutcome, SeedBagConfig,
    SeedBagPlugin, SeedBags,
};
use seedbags_types::{
    BlockState, BlockType, GroundItem, GroundItemId, ItemStack, ItemType, SeedKind, TilePos,
};
use seedbags_world::{PlacementNotification, VoxelWorld, WorldHost};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Read(TilePos),
    Write(TilePos),
    Emit(TilePos),
}

/// A [`WorldHost`] that records every call before delegating.
#[derive(Debug, Default)]
struct RecordingWorld {
    inner: VoxelWorld,
    ops: RefCell<Vec<Op>>,
}

impl RecordingWorld {
    fn ops(&self) -> Vec<Op> {
        self.ops.borrow().clone()
    }

    fn clear(&self) {
        self.ops.borrow_mut().clear();
    }
}

impl WorldHost for RecordingWorld {
    fn block_at(&self, pos: TilePos) -> BlockState {
        self.ops.borrow_mut().push(Op::Read(pos));
        self.inner.block_at(pos)
    }

    fn set_block(&mut self, pos: TilePos, state: BlockState) {
        self.ops.borrow_mut().push(Op::Write(pos));
        self.inner.set_block(pos, state);
    }

    fn emit_placement(&mut self, notification: PlacementNotification) -> bool {
        self.ops.borrow_mut().push(Op::Emit(notification.placed));
        self.inner.emit_placement(notification)
    }

    fn ground_item(&self, id: GroundItemId) -> Option<&GroundItem> {
        self.inner.ground_item(id)
    }

    fn remove_ground_item(&mut self, id: GroundItemId) -> Option<GroundItem> {
        self.inner.remove_ground_item(id)
    }

    fn drop_item(&mut self, pos: TilePos, stack: ItemStack) -> GroundItemId {
        self.inner.drop_item(pos, stack)
    }
}

const TARGET: TilePos = TilePos::new(10, 64, -7);

fn farm() -> RecordingWorld {
    let mut world = RecordingWorld::default();
    let min = TilePos::new(TARGET.x - 3, TARGET.y, TARGET.z - 3);
    let max = TilePos::new(TARGET.x + 3, TARGET.y, TARGET.z + 3);
    assert!(world.inner.fill(min, max, BlockState::new(BlockType::Farmland)).is_ok());
    world
}

fn plugin() -> SeedBagPlugin {
    SeedBagPlugin::new(&SeedBagConfig::default(), None)
}

fn farmer(plugin: &SeedBagPlugin, kind: SeedKind, count: u32) -> Actor {
    let mut bag = plugin.bags().create(kind);
    assert_eq!(plugin.bags().set_count(&mut bag, i64::from(count)), Some(count));
    let mut actor = Actor::player("farmer", TilePos::new(TARGET.x, TARGET.y + 1, TARGET.z));
    assert!(actor.inventory.set(0, Some(bag)).is_ok());
    actor
}

fn click() -> InteractEvent {
    InteractEvent::right_click_block(TARGET, BlockType::Farmland)
}

fn above(dx: i32, dz: i32) -> TilePos {
    TilePos::new(TARGET.x + dx, TARGET.y + 1, TARGET.z + dz)
}

fn held_count(actor: &Actor) -> Option<u32> {
    actor.held_item().map(bag::count_of)
}

// ---------------------------------------------------------------------------
// Bag model
// ---------------------------------------------------------------------------

#[test]
fn deposits_clamp_with_exact_leftover() {
    let model = SeedBags::new(&SeedBagConfig::default());
    let cases: [(u32, u32); 5] = [
        (0, 0),
        (10, 20),
        (MAX_CAPACITY, 0),
        (MAX_CAPACITY - 1, 5),
        (100_000, 100_000),
    ];
    for (n, m) in cases {
        let mut bag = model.create(SeedKind::Wheat);
        let first = model.deposit(&mut bag, n);
        let second = model.deposit(&mut bag, m);
        let total = u64::from(n) + u64::from(m);
        let expected = total.min(u64::from(MAX_CAPACITY));
        assert_eq!(u64::from(bag::count_of(&bag)), expected, "n={n} m={m}");
        assert_eq!(
            u64::from(first) + u64::from(second),
            total.saturating_sub(u64::from(MAX_CAPACITY)),
            "n={n} m={m}"
        );
    }
}

#[test]
fn display_depends_only_on_kind_and_count() {
    let model = SeedBags::new(&SeedBagConfig::default());

    let mut grown = model.create(SeedKind::Carrot);
    assert_eq!(model.deposit(&mut grown, 700), 0);
    assert!(model.set_count(&mut grown, 42).is_some());

    let mut direct = model.create(SeedKind::Carrot);
    assert!(model.set_count(&mut direct, 42).is_some());

    assert_eq!(grown.meta, direct.meta);
    let expected = model.display(Some(SeedKind::Carrot), 42);
    let meta = grown.meta.unwrap_or_default();
    assert_eq!(meta.display_name, Some(expected.name));
    assert_eq!(meta.lore, expected.lore);
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

#[test]
fn overflow_continues_into_next_bag() {
    let mut plugin = plugin();
    let mut world = VoxelWorld::new();
    let mut actor = farmer(&plugin, SeedKind::Wheat, MAX_CAPACITY - 1);
    assert!(actor.inventory.set(1, Some(plugin.bags().create(SeedKind::Wheat))).is_ok());

    let id = world.drop_item(TilePos::new(0, 1, 0), ItemStack::new(ItemType::WheatSeeds, 5));
    let outcome = plugin.on_pickup(&mut world, &mut actor, &PickupEvent { item: id });

    assert!(outcome.cancels_default());
    assert_eq!(actor.inventory.get(0).map(bag::count_of), Some(MAX_CAPACITY));
    assert_eq!(actor.inventory.get(1).map(bag::count_of), Some(4));
    assert_eq!(actor.inventory.total_of(&ItemStack::new(ItemType::WheatSeeds, 1)), 0);
    assert_eq!(world.ground_items().count(), 0);
}

#[test]
fn other_kinds_of_bag_are_not_filled() {
    let mut plugin = plugin();
    let mut world = VoxelWorld::new();
    let mut actor = farmer(&plugin, SeedKind::Potato, 0);
    assert!(actor.inventory.set(1, Some(plugin.bags().create(SeedKind::Carrot))).is_ok());

    let id = world.drop_item(TilePos::new(0, 1, 0), ItemStack::new(ItemType::Carrot, 9));
    let outcome = plugin.on_pickup(&mut world, &mut actor, &PickupEvent { item: id });

    assert!(matches!(outcome, PickupOutcome::Absorbed(a) if a.stored == 9));
    assert_eq!(actor.inventory.get(0).map(bag::count_of), Some(0));
    assert_eq!(actor.inventory.get(1).map(bag::count_of), Some(9));
}

// ---------------------------------------------------------------------------
// Dispensing
// ---------------------------------------------------------------------------

#[test]
fn plants_first_offsets_in_row_major_order() {
    let plugin = plugin();
    let mut world = farm();
    let mut actor = farmer(&plugin, SeedKind::Wheat, 3);

    let outcome = plugin.on_interact(&mut world, &mut actor, &click());

    assert_eq!(
        outcome,
        InteractOutcome::Planted { kind: SeedKind::Wheat, placed: 3, vetoed: 0, remaining: 0 }
    );
    assert_eq!(held_count(&actor), Some(0));

    let planted: Vec<TilePos> = world
        .inner
        .placement_log()
        .iter()
        .map(|record| record.notification.placed)
        .collect();
    assert_eq!(planted, vec![above(-2, -2), above(-2, -1), above(-2, 0)]);
    for pos in &planted {
        assert_eq!(world.inner.block_at(*pos), BlockState::new(BlockType::Wheat).with_age(0));
    }
    assert!(world.inner.is_empty(above(-2, 1)));
    assert!(world.inner.placement_log().iter().all(|record| !record.vetoed));
}

#[test]
fn single_seed_stops_after_first_success() {
    let plugin = plugin();
    let mut world = farm();
    let mut actor = farmer(&plugin, SeedKind::Wheat, 1);
    world.clear();

    let outcome = plugin.on_interact(&mut world, &mut actor, &click());
    assert!(matches!(outcome, InteractOutcome::Planted { placed: 1, remaining: 0, .. }));

    let ops = world.ops();
    let emits: Vec<usize> = ops
        .iter()
        .enumerate()
        .filter(|(_, op)| matches!(op, Op::Emit(_)))
        .map(|(i, _)| i)
        .collect();
    assert_eq!(emits.len(), 1);
    // Nothing touched the world after the one successful placement.
    assert_eq!(emits.first().copied(), Some(ops.len() - 1));
    assert_eq!(ops.last(), Some(&Op::Emit(above(-2, -2))));
    assert_eq!(world.inner.placement_log().len(), 1);
}

#[test]
fn vetoing_everything_leaves_no_trace() {
    let plugin = plugin();
    let mut world = farm();
    world.inner.add_listener(|n: &mut PlacementNotification| n.set_cancelled(true));
    let before = world.inner.snapshot();
    let mut actor = farmer(&plugin, SeedKind::Beetroot, 12);
    let bag_before = actor.held_item().cloned();

    let outcome = plugin.on_interact(&mut world, &mut actor, &click());

    assert_eq!(outcome, InteractOutcome::NoSuitableLocation { attempted: 25, vetoed: 25 });
    assert_eq!(world.inner.snapshot(), before);
    assert_eq!(actor.held_item().cloned(), bag_before);
    assert_eq!(
        actor.notices().last().map(String::as_str),
        Some("No suitable place to plant seeds!")
    );
}

#[test]
fn empty_bag_never_touches_the_world() {
    let plugin = plugin();
    let mut world = farm();
    let mut actor = farmer(&plugin, SeedKind::Wheat, 0);
    world.clear();

    let outcome = plugin.on_interact(&mut world, &mut actor, &click());

    assert_eq!(outcome, InteractOutcome::BagEmpty);
    assert!(world.ops().is_empty());
    assert_eq!(actor.notices(), [String::from("Your seed bag is empty!")]);
}

#[test]
fn crops_are_not_planted_twice() {
    let plugin = plugin();
    let mut world = farm();
    let mut actor = farmer(&plugin, SeedKind::Potato, 60);

    let first = plugin.on_interact(&mut world, &mut actor, &click());
    assert!(matches!(first, InteractOutcome::Planted { placed: 25, remaining: 35, .. }));

    let second = plugin.on_interact(&mut world, &mut actor, &click());
    assert_eq!(second, InteractOutcome::NoSuitableLocation { attempted: 0, vetoed: 0 });
    assert_eq!(held_count(&actor), Some(35));
}
