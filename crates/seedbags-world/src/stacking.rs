//! Optional item-stacking collaborator.
//!
//! Some hosts run a stacking subsystem that collapses many identical ground
//! items into one entity (a superstack) whose real quantity is far larger
//! than the entity's own stack amount. [`StackingAdapter`] is the seam the
//! aggregation engine queries. When no such subsystem is installed,
//! [`NoStacking`] is injected so the engine always follows the same path.

use std::collections::BTreeMap;

use seedbags_types::{GroundItem, GroundItemId};
use tracing::debug;

/// Queries against the host's item-stacking subsystem.
pub trait StackingAdapter {
    /// Whether `item` is tracked as a merged superstack.
    fn is_superstack(&self, item: &GroundItem) -> bool;

    /// Total quantity the superstack represents.
    ///
    /// `None` if the item is not tracked or the subsystem lost track of it.
    fn size_of(&self, item: &GroundItem) -> Option<u32>;

    /// Forget the superstack after its entity was consumed.
    fn remove(&mut self, item: &GroundItem);
}

/// The adapter used when no stacking subsystem is installed.
///
/// Nothing is ever a superstack, so every ground item counts as its own
/// declared amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoStacking;

impl StackingAdapter for NoStacking {
    fn is_superstack(&self, _item: &GroundItem) -> bool {
        false
    }

    fn size_of(&self, _item: &GroundItem) -> Option<u32> {
        None
    }

    fn remove(&mut self, _item: &GroundItem) {}
}

/// An in-memory stacking subsystem keyed by ground item entity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuperstackRegistry {
    stacks: BTreeMap<GroundItemId, u32>,
}

impl SuperstackRegistry {
    /// Create a registry with no tracked stacks.
    pub const fn new() -> Self {
        Self {
            stacks: BTreeMap::new(),
        }
    }

    /// Track the entity `id` as a superstack of `size` units.
    pub fn track(&mut self, id: GroundItemId, size: u32) {
        self.stacks.insert(id, size);
    }

    /// Whether `id` is tracked.
    pub fn is_tracked(&self, id: GroundItemId) -> bool {
        self.stacks.contains_key(&id)
    }

    /// Number of tracked superstacks.
    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    /// Whether no superstack is tracked.
    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }
}

impl StackingAdapter for SuperstackRegistry {
    fn is_superstack(&self, item: &GroundItem) -> bool {
        self.is_tracked(item.id)
    }

    fn size_of(&self, item: &GroundItem) -> Option<u32> {
        self.stacks.get(&item.id).copied()
    }

    fn remove(&mut self, item: &GroundItem) {
        if let Some(size) = self.stacks.remove(&item.id) {
            debug!(item = %item.id, size, "Superstack removed");
        }
    }
}
