//! The scripted play session the demo runs against the spawned farm.
//!
//! One player acquires bags, walks the field picking up every scattered seed
//! item, and then plants: wheat at the farmland center and against the
//! protected corner, carrots at a few random spots, and nether wart on the
//! soul sand. A console attempt and a typo exercise the command's refusal
//! paths.

use rand::Rng;
use rand::rngs::StdRng;
use seedbags_core::bag;
use seedbags_core::{
    Actor, CommandSender, InteractEvent, InteractOutcome, PickupEvent, PickupOutcome,
    SeedBagPlugin,
};
use seedbags_types::{GroundItemId, SeedKind, TilePos};
use seedbags_world::WorldHost;
use tracing::{debug, info, warn};

use crate::error::EngineError;
use crate::spawner::Farm;

/// Number of random carrot clicks.
const CARROT_CLICKS: u32 = 3;

/// Totals gathered over a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionReport {
    /// Bags handed out.
    pub bags_given: u32,
    /// Commands refused.
    pub commands_refused: u32,
    /// Pickups absorbed into bags.
    pub pickups_absorbed: u32,
    /// Pickups left to default handling.
    pub pickups_ignored: u32,
    /// Seed units stored into bags.
    pub seeds_stored: u64,
    /// Seed units that did not fit a bag.
    pub seeds_overflowed: u64,
    /// Crops planted.
    pub planted: u32,
    /// Placements vetoed by listeners.
    pub vetoed: u32,
    /// Clicks that planted nothing.
    pub clicks_without_effect: u32,
}

/// Run the scripted session.
///
/// # Errors
///
/// Returns [`EngineError::Command`] if the player is refused a bag the script
/// depends on.
pub fn run(
    plugin: &mut SeedBagPlugin,
    farm: &mut Farm,
    player: &mut Actor,
    drops: &[GroundItemId],
    rng: &mut StdRng,
) -> Result<SessionReport, EngineError> {
    let mut report = SessionReport::default();

    acquire_bags(plugin, farm, player, &mut report)?;
    collect(plugin, farm, player, drops, &mut report);

    let center = farm.farmland_center;
    plant(plugin, farm, player, SeedKind::Wheat, center, &mut report);

    let r = farm.radius;
    for _ in 0..CARROT_CLICKS {
        let dx = rng.random_range(r.saturating_neg()..=r);
        let dz = rng.random_range(r.saturating_neg()..=r);
        if let Some(target) = farm.farmland_at(dx, dz) {
            plant(plugin, farm, player, SeedKind::Carrot, target, &mut report);
        }
    }

    // The protected corner plot: every placement inside it is vetoed.
    if let Some(corner) = farm.farmland_at(r.saturating_neg(), r.saturating_neg()) {
        plant(plugin, farm, player, SeedKind::Wheat, corner, &mut report);
    }

    let sand = farm.soul_sand_center;
    plant(plugin, farm, player, SeedKind::NetherWart, sand, &mut report);

    for notice in player.take_notices() {
        info!(player = %player.name, "{notice}");
    }
    log_bags(player);

    Ok(report)
}

fn acquire_bags(
    plugin: &SeedBagPlugin,
    farm: &mut Farm,
    player: &mut Actor,
    report: &mut SessionReport,
) -> Result<(), EngineError> {
    if plugin
        .on_command(&mut farm.world, CommandSender::Console, &["wheat"])
        .is_err()
    {
        report.commands_refused = report.commands_refused.saturating_add(1);
    }
    if plugin
        .on_command(&mut farm.world, CommandSender::Player(player), &["cactus"])
        .is_err()
    {
        report.commands_refused = report.commands_refused.saturating_add(1);
    }

    let suggestions = plugin.on_tab_complete(&["p"]);
    debug!(?suggestions, "Tab completion for \"p\"");

    for kind in [SeedKind::Wheat, SeedKind::Carrot, SeedKind::Potato, SeedKind::NetherWart] {
        plugin.on_command(&mut farm.world, CommandSender::Player(player), &[kind.synonym()])?;
        report.bags_given = report.bags_given.saturating_add(1);
    }
    Ok(())
}

fn collect(
    plugin: &mut SeedBagPlugin,
    farm: &mut Farm,
    player: &mut Actor,
    drops: &[GroundItemId],
    report: &mut SessionReport,
) {
    for &item in drops {
        if let Some(ground) = farm.world.ground_item(item) {
            player.position = ground.pos;
        }
        match plugin.on_pickup(&mut farm.world, player, &PickupEvent { item }) {
            PickupOutcome::Absorbed(absorbed) => {
                report.pickups_absorbed = report.pickups_absorbed.saturating_add(1);
                report.seeds_stored = report.seeds_stored.saturating_add(u64::from(absorbed.stored));
                let overflow = absorbed.returned.saturating_add(absorbed.dropped);
                report.seeds_overflowed = report.seeds_overflowed.saturating_add(u64::from(overflow));
            }
            PickupOutcome::Ignored(reason) => {
                debug!(item = %item, ?reason, "Pickup left to default handling");
                report.pickups_ignored = report.pickups_ignored.saturating_add(1);
            }
        }
    }
}

fn plant(
    plugin: &SeedBagPlugin,
    farm: &mut Farm,
    player: &mut Actor,
    kind: SeedKind,
    target: TilePos,
    report: &mut SessionReport,
) {
    let Some(slot) = player.inventory.first_matching(Some(kind)) else {
        warn!(kind = %kind, "No bag to plant with");
        return;
    };
    player.held_slot = slot;
    let event = InteractEvent::right_click_block(target, farm.world.terrain_of(target));

    match plugin.on_interact(&mut farm.world, player, &event) {
        InteractOutcome::Planted { placed, vetoed, .. } => {
            report.planted = report.planted.saturating_add(placed);
            report.vetoed = report.vetoed.saturating_add(vetoed);
        }
        InteractOutcome::NoSuitableLocation { vetoed, .. } => {
            report.vetoed = report.vetoed.saturating_add(vetoed);
            report.clicks_without_effect = report.clicks_without_effect.saturating_add(1);
        }
        InteractOutcome::BagEmpty | InteractOutcome::InvalidBag | InteractOutcome::Ignored(_) => {
            report.clicks_without_effect = report.clicks_without_effect.saturating_add(1);
        }
    }
}

fn log_bags(player: &Actor) {
    for slot in player.inventory.matching_slots(None) {
        let Some(stack) = player.inventory.get(slot) else {
            continue;
        };
        let persisted = serde_json::to_string(stack).unwrap_or_default();
        info!(
            slot,
            kind = ?bag::kind_of(stack),
            count = bag::count_of(stack),
            %persisted,
            "Seed bag"
        );
    }
}
