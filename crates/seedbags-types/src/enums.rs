//! Enumeration types for items, tiles, and interactions.
//!
//! Identifiers serialize in `SCREAMING_SNAKE_CASE` so that persisted item
//! data uses the same spelling the host uses for its materials.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Item types
// ---------------------------------------------------------------------------

/// The type of an item held in a container or lying on the ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemType {
    /// Plain paper. Seed bags are paper items carrying bag data.
    Paper,
    /// Seeds that grow into wheat.
    WheatSeeds,
    /// Seeds that grow into beetroots.
    BeetrootSeeds,
    /// A carrot, planted directly.
    Carrot,
    /// A potato, planted directly.
    Potato,
    /// Nether wart, planted on soul sand.
    NetherWart,
    /// Seeds that grow into a melon stem.
    MelonSeeds,
    /// Seeds that grow into a pumpkin stem.
    PumpkinSeeds,
    /// Harvested wheat.
    Wheat,
    /// A block of dirt.
    Dirt,
    /// A block of stone.
    Stone,
}

impl ItemType {
    /// Every item type, in declaration order.
    pub const ALL: [Self; 11] = [
        Self::Paper,
        Self::WheatSeeds,
        Self::BeetrootSeeds,
        Self::Carrot,
        Self::Potato,
        Self::NetherWart,
        Self::MelonSeeds,
        Self::PumpkinSeeds,
        Self::Wheat,
        Self::Dirt,
        Self::Stone,
    ];

    /// The identifier used in persisted data and log output.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Paper => "PAPER",
            Self::WheatSeeds => "WHEAT_SEEDS",
            Self::BeetrootSeeds => "BEETROOT_SEEDS",
            Self::Carrot => "CARROT",
            Self::Potato => "POTATO",
            Self::NetherWart => "NETHER_WART",
            Self::MelonSeeds => "MELON_SEEDS",
            Self::PumpkinSeeds => "PUMPKIN_SEEDS",
            Self::Wheat => "WHEAT",
            Self::Dirt => "DIRT",
            Self::Stone => "STONE",
        }
    }

    /// Look up an item type by its identifier. Matching is exact.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|item| item.id() == id)
    }

    /// Default maximum number of units in one stack of this item.
    pub const fn max_stack_size(self) -> u32 {
        64
    }
}

impl core::fmt::Display for ItemType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.id())
    }
}

// ---------------------------------------------------------------------------
// Block types
// ---------------------------------------------------------------------------

/// The type of a world tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlockType {
    /// Nothing; the tile is empty.
    Air,
    /// Tilled soil that accepts ordinary crops.
    Farmland,
    /// The special base that accepts nether wart.
    SoulSand,
    /// Untilled dirt.
    Dirt,
    /// Stone.
    Stone,
    /// Growing wheat.
    Wheat,
    /// Growing beetroots.
    Beetroots,
    /// Growing carrots.
    Carrots,
    /// Growing potatoes.
    Potatoes,
    /// Growing nether wart.
    NetherWart,
    /// A melon stem.
    MelonStem,
    /// A pumpkin stem.
    PumpkinStem,
}

impl BlockType {
    /// Whether this is the empty tile.
    pub const fn is_air(self) -> bool {
        matches!(self, Self::Air)
    }

    /// Highest growth stage for ageable blocks, `None` for everything else.
    pub const fn max_age(self) -> Option<u8> {
        match self {
            Self::Wheat | Self::Carrots | Self::Potatoes | Self::MelonStem | Self::PumpkinStem => {
                Some(7)
            }
            Self::Beetroots | Self::NetherWart => Some(3),
            Self::Air | Self::Farmland | Self::SoulSand | Self::Dirt | Self::Stone => None,
        }
    }

    /// Whether this block carries a growth stage.
    pub const fn is_ageable(self) -> bool {
        self.max_age().is_some()
    }
}

// ---------------------------------------------------------------------------
// Interactions
// ---------------------------------------------------------------------------

/// The kind of click an actor performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractAction {
    /// Use the held item on a block.
    RightClickBlock,
    /// Use the held item on nothing.
    RightClickAir,
    /// Attack a block.
    LeftClickBlock,
    /// Swing at nothing.
    LeftClickAir,
}
