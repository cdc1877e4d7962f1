//! Core value types: tile positions, tile states, item stacks, and ground
//! item entities.

use serde::{Deserialize, Serialize};

use crate::enums::{BlockType, ItemType};
use crate::ids::GroundItemId;
use crate::persistent::PersistentData;

// ---------------------------------------------------------------------------
// Tiles
// ---------------------------------------------------------------------------

/// Integer coordinates of a world tile. `y` is the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TilePos {
    /// East-west coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
    /// North-south coordinate.
    pub z: i32,
}

impl TilePos {
    /// Create a position from its coordinates.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The position shifted by the given deltas.
    ///
    /// Returns `None` if any coordinate would overflow.
    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Option<Self> {
        let Some(x) = self.x.checked_add(dx) else {
            return None;
        };
        let Some(y) = self.y.checked_add(dy) else {
            return None;
        };
        let Some(z) = self.z.checked_add(dz) else {
            return None;
        };
        Some(Self { x, y, z })
    }

    /// The tile directly above this one.
    pub const fn above(self) -> Option<Self> {
        self.offset(0, 1, 0)
    }
}

impl core::fmt::Display for TilePos {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// The full state of one tile: its type and, for crops, its growth stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockState {
    /// The tile type.
    pub block: BlockType,
    /// Growth stage, present only for ageable blocks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u8>,
}

impl BlockState {
    /// The empty tile.
    pub const AIR: Self = Self {
        block: BlockType::Air,
        age: None,
    };

    /// A tile of type `block`. Ageable blocks start at stage 0.
    pub const fn new(block: BlockType) -> Self {
        let age = if block.is_ageable() { Some(0) } else { None };
        Self { block, age }
    }

    /// The same block at growth stage `age`, clamped to the block's maximum.
    ///
    /// Non-ageable blocks are returned unchanged.
    pub const fn with_age(self, age: u8) -> Self {
        match self.block.max_age() {
            Some(max) => Self {
                block: self.block,
                age: Some(if age > max { max } else { age }),
            },
            None => self,
        }
    }

    /// Whether this is the empty tile.
    pub const fn is_air(&self) -> bool {
        self.block.is_air()
    }
}

impl Default for BlockState {
    fn default() -> Self {
        Self::AIR
    }
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

/// Optional metadata attached to an item stack.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemMeta {
    /// Custom display name shown instead of the item's default name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Descriptive lines shown under the name.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lore: Vec<String>,
    /// Plugin-owned typed key-value entries.
    #[serde(default, skip_serializing_if = "PersistentData::is_empty")]
    pub data: PersistentData,
    /// Overrides the item type's default maximum stack size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_stack_size: Option<u32>,
}

/// A quantity of one item type, optionally with metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    /// The item type.
    pub item: ItemType,
    /// Number of units in the stack.
    pub amount: u32,
    /// Attached metadata. `None` means the item is plain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ItemMeta>,
}

impl ItemStack {
    /// A plain stack of `amount` units of `item`.
    pub const fn new(item: ItemType, amount: u32) -> Self {
        Self {
            item,
            amount,
            meta: None,
        }
    }

    /// The same stack carrying `meta`.
    #[must_use]
    pub fn with_meta(mut self, meta: ItemMeta) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Maximum units a single stack of this item may hold.
    pub fn max_stack_size(&self) -> u32 {
        self.meta
            .as_ref()
            .and_then(|meta| meta.max_stack_size)
            .unwrap_or_else(|| self.item.max_stack_size())
    }

    /// Whether `other` can merge into this stack (same type, same metadata).
    pub fn is_similar(&self, other: &Self) -> bool {
        self.item == other.item && self.meta == other.meta
    }

    /// Whether the stack holds no units.
    pub const fn is_empty(&self) -> bool {
        self.amount == 0
    }

    /// The persisted data record, if the stack has metadata.
    pub fn data(&self) -> Option<&PersistentData> {
        self.meta.as_ref().map(|meta| &meta.data)
    }
}

/// An item entity lying in the world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundItem {
    /// Entity identifier.
    pub id: GroundItemId,
    /// Tile the entity occupies.
    pub pos: TilePos,
    /// The items the entity represents on its own.
    pub stack: ItemStack,
}
