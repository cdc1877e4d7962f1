//! The seed bag model: reading and writing a bag's kind and count.
//!
//! A bag is an ordinary paper [`ItemStack`] whose metadata carries two
//! persisted entries: the kind identifier (string) and the count (integer).
//! Reads are fail-soft: missing or malformed data reads as an unknown kind
//! and a count of zero. [`SeedBags::set_count`] is the only way a count ever
//! changes, and it clamps into `0..=MAX_CAPACITY` and re-renders the display
//! on every call.

use seedbags_types::{ItemMeta, ItemStack, ItemType, SeedKind};
use tracing::debug;

use crate::config::{DispensingConfig, SeedBagConfig};
use crate::display::{self, BagDisplay};

/// Maximum number of seeds one bag holds.
pub const MAX_CAPACITY: u32 = 128_000;

/// Persisted key holding the bag's kind identifier.
pub const SEED_TYPE_KEY: &str = "seedbags:seed_type";

/// Persisted key holding the bag's count.
pub const SEED_COUNT_KEY: &str = "seedbags:seed_count";

/// The item type every bag is made of.
pub const CARRIER: ItemType = ItemType::Paper;

/// Whether `item` is a bag, and of `kind` when one is given.
///
/// An item is structurally a bag when it is made of [`CARRIER`] and carries
/// a string under [`SEED_TYPE_KEY`].
pub fn matches(item: &ItemStack, kind: Option<SeedKind>) -> bool {
    let Some(data) = item.data().filter(|_| item.item == CARRIER) else {
        return false;
    };
    if !data.has_string(SEED_TYPE_KEY) {
        return false;
    }
    kind.is_none_or(|kind| data.get_string(SEED_TYPE_KEY) == Some(kind.id()))
}

/// The bag's kind, or `None` if it is missing or not a registered kind.
pub fn kind_of(bag: &ItemStack) -> Option<SeedKind> {
    bag.data()
        .and_then(|data| data.get_string(SEED_TYPE_KEY))
        .and_then(SeedKind::from_id)
}

/// The bag's count. Missing or malformed data reads as zero.
pub fn count_of(bag: &ItemStack) -> u32 {
    bag.data()
        .and_then(|data| data.get_integer(SEED_COUNT_KEY))
        .map_or(0, clamp_count)
}

/// Clamp a raw count into `0..=MAX_CAPACITY`.
pub fn clamp_count(raw: i64) -> u32 {
    if raw <= 0 {
        return 0;
    }
    u32::try_from(raw).map_or(MAX_CAPACITY, |n| n.min(MAX_CAPACITY))
}

/// Units that still fit into a bag holding `count`.
pub const fn free_space(count: u32) -> u32 {
    MAX_CAPACITY.saturating_sub(count)
}

/// Creates bags and performs every count mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedBags {
    dispensing: DispensingConfig,
}

impl SeedBags {
    /// Create the model for the given configuration.
    pub fn new(config: &SeedBagConfig) -> Self {
        Self {
            dispensing: config.dispensing.clone(),
        }
    }

    /// A new, empty bag bound to `kind`.
    ///
    /// This is the only place a kind is ever written: a bag's kind never
    /// changes after creation.
    pub fn create(&self, kind: SeedKind) -> ItemStack {
        let mut meta = ItemMeta {
            max_stack_size: Some(1),
            ..ItemMeta::default()
        };
        meta.data.set_string(SEED_TYPE_KEY, kind.id());
        meta.data.set_integer(SEED_COUNT_KEY, 0);
        let mut bag = ItemStack::new(CARRIER, 1).with_meta(meta);
        self.refresh_display(&mut bag);
        bag
    }

    /// The display a bag of `kind` holding `count` seeds shows.
    pub fn display(&self, kind: Option<SeedKind>, count: u32) -> BagDisplay {
        let radius = kind.map_or(self.dispensing.default_radius, |kind| {
            self.dispensing.radius_for(kind)
        });
        display::render(kind, count, radius, MAX_CAPACITY)
    }

    /// Store a new count, clamped into `0..=MAX_CAPACITY`, and re-render the
    /// bag's display.
    ///
    /// Returns the stored count, or `None` if `bag` has no metadata to write
    /// into (it is not a bag).
    pub fn set_count(&self, bag: &mut ItemStack, count: i64) -> Option<u32> {
        let clamped = clamp_count(count);
        let meta = bag.meta.as_mut()?;
        meta.data.set_integer(SEED_COUNT_KEY, i64::from(clamped));
        self.refresh_display(bag);
        debug!(count = clamped, requested = count, "Bag count stored");
        Some(clamped)
    }

    /// Add up to `amount` seeds to `bag`, returning how many did not fit.
    pub fn deposit(&self, bag: &mut ItemStack, amount: u32) -> u32 {
        let current = count_of(bag);
        let accepted = amount.min(free_space(current));
        if accepted == 0 {
            return amount;
        }
        let target = i64::from(current).saturating_add(i64::from(accepted));
        match self.set_count(bag, target) {
            Some(_) => amount.saturating_sub(accepted),
            None => amount,
        }
    }

    /// Re-render name and lore from the stored kind and count.
    fn refresh_display(&self, bag: &mut ItemStack) {
        let rendered = self.display(kind_of(bag), count_of(bag));
        if let Some(meta) = bag.meta.as_mut() {
            meta.display_name = Some(rendered.name);
            meta.lore = rendered.lore;
        }
    }
}
