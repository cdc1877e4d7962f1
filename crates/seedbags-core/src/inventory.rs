//! Slot containers for actors.
//!
//! A [`Container`] is a fixed-size array of optional item stacks. Insertion
//! merges into similar stacks first and then fills empty slots, using checked
//! arithmetic throughout -- no silent overflows, no panics. The bag model
//! never holds a reference into a container across notifications; every
//! engine call re-reads the slots it needs.

use seedbags_types::{ItemStack, SeedKind};

use crate::bag;
use crate::error::InventoryError;

/// Number of slots in a player container.
pub const PLAYER_SLOTS: usize = 36;

/// A fixed number of item slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    slots: Vec<Option<ItemStack>>,
}

impl Container {
    /// A container with `size` empty slots.
    pub fn new(size: usize) -> Self {
        Self {
            slots: vec![None; size],
        }
    }

    /// An empty player-sized container.
    pub fn player() -> Self {
        Self::new(PLAYER_SLOTS)
    }

    /// Number of slots.
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// The stack in `slot`, if any.
    pub fn get(&self, slot: usize) -> Option<&ItemStack> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    /// Mutable access to the stack in `slot`, if any.
    pub fn get_mut(&mut self, slot: usize) -> Option<&mut ItemStack> {
        self.slots.get_mut(slot).and_then(Option::as_mut)
    }

    /// Replace the contents of `slot`, returning what was there.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::SlotOutOfRange`] if `slot` does not exist.
    pub fn set(
        &mut self,
        slot: usize,
        stack: Option<ItemStack>,
    ) -> Result<Option<ItemStack>, InventoryError> {
        let size = self.slots.len();
        let entry = self
            .slots
            .get_mut(slot)
            .ok_or(InventoryError::SlotOutOfRange { slot, size })?;
        Ok(core::mem::replace(entry, stack))
    }

    /// Iterate over `(slot, stack)` for every occupied slot.
    pub fn slots(&self) -> impl Iterator<Item = (usize, &ItemStack)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|stack| (i, stack)))
    }

    /// The first slot holding a bag of `kind` (any bag when `kind` is `None`).
    pub fn first_matching(&self, kind: Option<SeedKind>) -> Option<usize> {
        self.slots()
            .find(|(_, stack)| bag::matches(stack, kind))
            .map(|(i, _)| i)
    }

    /// Every slot holding a bag of `kind`, in slot order.
    pub fn matching_slots(&self, kind: Option<SeedKind>) -> Vec<usize> {
        self.slots()
            .filter(|(_, stack)| bag::matches(stack, kind))
            .map(|(i, _)| i)
            .collect()
    }

    /// Insert `stack`, merging into similar stacks before using empty slots.
    ///
    /// Returns the part that did not fit, or `None` if everything was stored.
    pub fn add_item(&mut self, stack: ItemStack) -> Option<ItemStack> {
        let max = stack.max_stack_size();
        let mut remaining = stack.amount;

        for existing in self.slots.iter_mut().flatten() {
            if remaining == 0 {
                break;
            }
            if !existing.is_similar(&stack) {
                continue;
            }
            let room = max.saturating_sub(existing.amount);
            let moved = room.min(remaining);
            let Some(merged) = existing.amount.checked_add(moved) else {
                continue;
            };
            existing.amount = merged;
            remaining = remaining.saturating_sub(moved);
        }

        for slot in &mut self.slots {
            if remaining == 0 || max == 0 {
                break;
            }
            if slot.is_some() {
                continue;
            }
            let moved = max.min(remaining);
            let mut placed = stack.clone();
            placed.amount = moved;
            *slot = Some(placed);
            remaining = remaining.saturating_sub(moved);
        }

        (remaining > 0).then(|| {
            let mut leftover = stack;
            leftover.amount = remaining;
            leftover
        })
    }

    /// Total units of stacks similar to `like` across all slots.
    pub fn total_of(&self, like: &ItemStack) -> u64 {
        self.slots()
            .filter(|(_, stack)| stack.is_similar(like))
            .fold(0_u64, |sum, (_, stack)| sum.saturating_add(u64::from(stack.amount)))
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::player()
    }
}
