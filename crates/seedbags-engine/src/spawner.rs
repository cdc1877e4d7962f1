//! Demo world spawner.
//!
//! Builds a farm: a square of farmland around the origin, a soul sand patch
//! to the east, and an optional protected plot in the farmland's north-west
//! corner. Seed items are then scattered over the field from a seeded RNG so
//! every run with the same config produces the same world.

use rand::Rng;
use rand::rngs::StdRng;
use seedbags_types::{BlockState, BlockType, GroundItemId, ItemStack, SeedKind, TilePos};
use seedbags_world::{ProtectedRegion, SuperstackRegistry, VoxelWorld, WorldHost};
use serde::Deserialize;
use tracing::info;

use crate::error::EngineError;

// -----------------------------------------------------------------------
// Configuration
// -----------------------------------------------------------------------

/// Configuration for the demo farm, loaded from the `demo` section of
/// `seedbags-config.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SpawnerConfig {
    /// RNG seed for scattering.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Half-width of the farmland square.
    #[serde(default = "default_field_radius")]
    pub field_radius: u32,

    /// Number of plain seed items scattered over the field.
    #[serde(default = "default_scattered_drops")]
    pub scattered_drops: u32,

    /// Size of the one merged wheat superstack placed in the field.
    #[serde(default = "default_superstack_size")]
    pub superstack_size: u32,

    /// Whether the north-west corner is a protected plot.
    #[serde(default = "default_true")]
    pub protect_corner: bool,
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            field_radius: default_field_radius(),
            scattered_drops: default_scattered_drops(),
            superstack_size: default_superstack_size(),
            protect_corner: true,
        }
    }
}

const fn default_seed() -> u64 {
    42
}

const fn default_field_radius() -> u32 {
    6
}

const fn default_scattered_drops() -> u32 {
    12
}

const fn default_superstack_size() -> u32 {
    2_500
}

const fn default_true() -> bool {
    true
}

/// Largest accepted field radius.
const MAX_FIELD_RADIUS: u32 = 64;

/// Height of the ground layer.
const GROUND_Y: i32 = 0;

// -----------------------------------------------------------------------
// Farm
// -----------------------------------------------------------------------

/// The spawned demo world.
#[derive(Debug)]
pub struct Farm {
    /// The world with terrain and listeners in place.
    pub world: VoxelWorld,
    /// Center of the farmland square.
    pub farmland_center: TilePos,
    /// Center of the soul sand patch.
    pub soul_sand_center: TilePos,
    /// Half-width of the farmland square.
    pub radius: i32,
}

impl Farm {
    /// A farmland tile at `(dx, dz)` from the center.
    pub fn farmland_at(&self, dx: i32, dz: i32) -> Option<TilePos> {
        self.farmland_center.offset(dx, 0, dz)
    }
}

/// Build the farm terrain and register the protected plot listener.
///
/// # Errors
///
/// Returns [`EngineError::Scenario`] if the field radius is out of range,
/// or [`EngineError::World`] if a fill region is invalid.
pub fn build_farm(config: &SpawnerConfig) -> Result<Farm, EngineError> {
    if config.field_radius == 0 || config.field_radius > MAX_FIELD_RADIUS {
        return Err(EngineError::Scenario {
            message: format!(
                "field_radius must be between 1 and {MAX_FIELD_RADIUS}, got {}",
                config.field_radius
            ),
        });
    }
    let radius = i32::try_from(config.field_radius).map_err(|e| EngineError::Scenario {
        message: format!("field_radius: {e}"),
    })?;
    let corner = |dx: i32, dz: i32| TilePos::new(dx, GROUND_Y, dz);

    let mut world = VoxelWorld::new();
    let farmland = world.fill(
        corner(radius.saturating_neg(), radius.saturating_neg()),
        corner(radius, radius),
        BlockState::new(BlockType::Farmland),
    )?;

    let sand_x = radius.saturating_mul(2).saturating_add(4);
    let soul_sand = world.fill(
        corner(sand_x.saturating_sub(2), -2),
        corner(sand_x.saturating_add(2), 2),
        BlockState::new(BlockType::SoulSand),
    )?;

    if config.protect_corner {
        let min = radius.saturating_neg();
        let plot = ProtectedRegion::new(
            TilePos::new(min, GROUND_Y.saturating_add(1), min),
            TilePos::new(min.saturating_add(1), GROUND_Y.saturating_add(1), min.saturating_add(1)),
        );
        world.add_listener(plot);
    }

    info!(
        farmland_tiles = farmland,
        soul_sand_tiles = soul_sand,
        protected_plot = config.protect_corner,
        "Farm terrain built"
    );

    Ok(Farm {
        world,
        farmland_center: corner(0, 0),
        soul_sand_center: corner(sand_x, 0),
        radius,
    })
}

/// What [`scatter_seeds`] put on the ground.
#[derive(Debug)]
pub struct Scattered {
    /// Every spawned ground item, in spawn order.
    pub items: Vec<GroundItemId>,
    /// Superstacks to hand to the plugin.
    pub stacking: SuperstackRegistry,
    /// Total seed units represented, superstacks included.
    pub units: u64,
}

/// Scatter seed items over the farmland and add one wheat superstack.
pub fn scatter_seeds(farm: &mut Farm, config: &SpawnerConfig, rng: &mut StdRng) -> Scattered {
    let mut items = Vec::new();
    let mut units: u64 = 0;
    let r = farm.radius;

    for _ in 0..config.scattered_drops {
        let idx = rng.random_range(0..SeedKind::ALL.len());
        let Some(kind) = SeedKind::ALL.get(idx).copied() else {
            continue;
        };
        let dx = rng.random_range(r.saturating_neg()..=r);
        let dz = rng.random_range(r.saturating_neg()..=r);
        let Some(pos) = farm.farmland_at(dx, dz).and_then(TilePos::above) else {
            continue;
        };
        let amount: u32 = rng.random_range(1..=64);
        items.push(farm.world.drop_item(pos, ItemStack::new(kind.item_type(), amount)));
        units = units.saturating_add(u64::from(amount));
    }

    let mut stacking = SuperstackRegistry::new();
    if config.superstack_size > 0
        && let Some(pos) = farm.farmland_center.above()
    {
        let id = farm
            .world
            .drop_item(pos, ItemStack::new(SeedKind::Wheat.item_type(), 1));
        stacking.track(id, config.superstack_size);
        items.push(id);
        units = units.saturating_add(u64::from(config.superstack_size));
    }

    info!(
        drops = items.len(),
        superstacks = stacking.len(),
        units,
        "Seeds scattered"
    );

    Scattered {
        items,
        stacking,
        units,
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn farm_has_both_surfaces() {
        let farm = build_farm(&SpawnerConfig::default());
        assert!(farm.is_ok());
        let Ok(farm) = farm else { return };

        assert_eq!(farm.world.terrain_of(farm.farmland_center), BlockType::Farmland);
        assert_eq!(farm.world.terrain_of(farm.soul_sand_center), BlockType::SoulSand);
        // 13x13 farmland plus 5x5 soul sand.
        assert_eq!(farm.world.tile_count(), 169 + 25);
    }

    #[test]
    fn rejects_zero_radius() {
        let config = SpawnerConfig {
            field_radius: 0,
            ..SpawnerConfig::default()
        };
        assert!(matches!(build_farm(&config), Err(EngineError::Scenario { .. })));
    }

    #[test]
    fn scattering_is_reproducible() {
        let config = SpawnerConfig::default();
        let positions = |seed: u64| {
            let mut farm = build_farm(&config).ok()?;
            let mut rng = StdRng::seed_from_u64(seed);
            let scattered = scatter_seeds(&mut farm, &config, &mut rng);
            let mut out: Vec<(TilePos, u32)> = farm
                .world
                .ground_items()
                .map(|item| (item.pos, item.stack.amount))
                .collect();
            out.sort();
            Some((out, scattered.units))
        };

        let first = positions(7);
        assert!(first.is_some());
        assert_eq!(first, positions(7));
    }

    #[test]
    fn superstack_is_tracked() {
        let config = SpawnerConfig {
            scattered_drops: 0,
            ..SpawnerConfig::default()
        };
        let Ok(mut farm) = build_farm(&config) else {
            panic!("farm should build");
        };
        let mut rng = StdRng::seed_from_u64(1);
        let scattered = scatter_seeds(&mut farm, &config, &mut rng);

        assert_eq!(scattered.items.len(), 1);
        assert_eq!(scattered.units, 2_500);
        assert!(scattered.items.first().is_some_and(|id| scattered.stacking.is_tracked(*id)));
    }
}
