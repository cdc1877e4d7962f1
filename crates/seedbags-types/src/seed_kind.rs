//! The closed registry of seed kinds a bag can be bound to.
//!
//! Each [`SeedKind`] maps to the item it collects, the base terrain it must
//! be planted on, and the growth feature it produces. The table is static;
//! nothing here holds state.

use serde::{Deserialize, Serialize};

use crate::enums::{BlockType, ItemType};

/// Terrain types a seed bag may be activated against.
pub const ACTIVATION_SURFACES: [BlockType; 2] = [BlockType::Farmland, BlockType::SoulSand];

/// Whether `block` is a surface that triggers area planting when clicked.
pub fn is_activation_surface(block: BlockType) -> bool {
    ACTIVATION_SURFACES.contains(&block)
}

/// A harvestable seed category.
///
/// Serializes as its command synonym (`wheat`, `nether_wart`, ...), which is
/// also the spelling used for per-kind keys in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedKind {
    /// Wheat seeds.
    Wheat,
    /// Beetroot seeds.
    Beetroot,
    /// Carrots.
    Carrot,
    /// Potatoes.
    Potato,
    /// Nether wart. The one kind that needs soul sand instead of farmland.
    NetherWart,
    /// Melon seeds.
    Melon,
    /// Pumpkin seeds.
    Pumpkin,
}

impl SeedKind {
    /// Every seed kind, in registry order.
    pub const ALL: [Self; 7] = [
        Self::Wheat,
        Self::Beetroot,
        Self::Carrot,
        Self::Potato,
        Self::NetherWart,
        Self::Melon,
        Self::Pumpkin,
    ];

    /// The item this kind collects and plants.
    pub const fn item_type(self) -> ItemType {
        match self {
            Self::Wheat => ItemType::WheatSeeds,
            Self::Beetroot => ItemType::BeetrootSeeds,
            Self::Carrot => ItemType::Carrot,
            Self::Potato => ItemType::Potato,
            Self::NetherWart => ItemType::NetherWart,
            Self::Melon => ItemType::MelonSeeds,
            Self::Pumpkin => ItemType::PumpkinSeeds,
        }
    }

    /// The kind collected from a ground item of type `item`, if any.
    pub const fn from_item_type(item: ItemType) -> Option<Self> {
        match item {
            ItemType::WheatSeeds => Some(Self::Wheat),
            ItemType::BeetrootSeeds => Some(Self::Beetroot),
            ItemType::Carrot => Some(Self::Carrot),
            ItemType::Potato => Some(Self::Potato),
            ItemType::NetherWart => Some(Self::NetherWart),
            ItemType::MelonSeeds => Some(Self::Melon),
            ItemType::PumpkinSeeds => Some(Self::Pumpkin),
            ItemType::Paper | ItemType::Wheat | ItemType::Dirt | ItemType::Stone => None,
        }
    }

    /// The identifier persisted on a bag (the seed item's identifier).
    pub const fn id(self) -> &'static str {
        self.item_type().id()
    }

    /// Look up a kind by its persisted identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        ItemType::from_id(id).and_then(Self::from_item_type)
    }

    /// Short lowercase name accepted by the acquisition command.
    pub const fn synonym(self) -> &'static str {
        match self {
            Self::Wheat => "wheat",
            Self::Beetroot => "beetroot",
            Self::Carrot => "carrot",
            Self::Potato => "potato",
            Self::NetherWart => "nether_wart",
            Self::Melon => "melon",
            Self::Pumpkin => "pumpkin",
        }
    }

    /// Look up a kind by synonym, ignoring ASCII case.
    pub fn from_synonym(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.synonym().eq_ignore_ascii_case(name))
    }

    /// The terrain a tile must have for this kind to be planted above it.
    pub const fn required_base(self) -> BlockType {
        match self {
            Self::NetherWart => BlockType::SoulSand,
            Self::Wheat
            | Self::Beetroot
            | Self::Carrot
            | Self::Potato
            | Self::Melon
            | Self::Pumpkin => BlockType::Farmland,
        }
    }

    /// The block placed when this kind is planted.
    pub const fn growth_feature(self) -> BlockType {
        match self {
            Self::Wheat => BlockType::Wheat,
            Self::Beetroot => BlockType::Beetroots,
            Self::Carrot => BlockType::Carrots,
            Self::Potato => BlockType::Potatoes,
            Self::NetherWart => BlockType::NetherWart,
            Self::Melon => BlockType::MelonStem,
            Self::Pumpkin => BlockType::PumpkinStem,
        }
    }
}

impl core::fmt::Display for SeedKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_mapping_is_bijective() {
        for kind in SeedKind::ALL {
            assert_eq!(SeedKind::from_item_type(kind.item_type()), Some(kind));
            assert_eq!(SeedKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(SeedKind::from_item_type(ItemType::Paper), None);
        assert_eq!(SeedKind::from_id("PAPER"), None);
    }

    #[test]
    fn only_nether_wart_needs_soul_sand() {
        for kind in SeedKind::ALL {
            let expected = if kind == SeedKind::NetherWart {
                BlockType::SoulSand
            } else {
                BlockType::Farmland
            };
            assert_eq!(kind.required_base(), expected);
        }
    }

    #[test]
    fn growth_features_are_ageable() {
        for kind in SeedKind::ALL {
            assert!(kind.growth_feature().is_ageable(), "{kind} feature has no age");
        }
    }

    #[test]
    fn synonyms_ignore_case() {
        assert_eq!(SeedKind::from_synonym("WHEAT"), Some(SeedKind::Wheat));
        assert_eq!(SeedKind::from_synonym("Nether_Wart"), Some(SeedKind::NetherWart));
        assert_eq!(SeedKind::from_synonym("cactus"), None);
    }

    #[test]
    fn activation_surfaces() {
        assert!(is_activation_surface(BlockType::Farmland));
        assert!(is_activation_surface(BlockType::SoulSand));
        assert!(!is_activation_surface(BlockType::Dirt));
    }

    #[test]
    fn serde_uses_synonym() {
        let json = serde_json::to_string(&SeedKind::NetherWart).ok();
        assert_eq!(json.as_deref(), Some("\"nether_wart\""));
    }
}
