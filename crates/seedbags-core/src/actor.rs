//! Actors that pick up items, click tiles, and run commands.

use std::collections::BTreeSet;

use seedbags_types::{ActorId, ItemStack, TilePos};

use crate::inventory::Container;

/// What kind of entity an actor is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActorKind {
    /// A player with an inventory.
    Player,
    /// Any other entity (mobs, hoppers). Never triggers bag logic.
    Other,
}

/// An entity that interacts with the world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// Unique identifier.
    pub id: ActorId,
    /// Display name.
    pub name: String,
    /// Player or other entity.
    pub kind: ActorKind,
    /// The tile the actor stands on.
    pub position: TilePos,
    /// The actor's item slots.
    pub inventory: Container,
    /// Index of the slot currently held in hand.
    pub held_slot: usize,
    permissions: BTreeSet<String>,
    notices: Vec<String>,
}

impl Actor {
    /// A player at `position` with an empty inventory, holding slot 0.
    pub fn player(name: impl Into<String>, position: TilePos) -> Self {
        Self::with_kind(name, ActorKind::Player, position)
    }

    /// A non-player entity at `position`.
    pub fn other(name: impl Into<String>, position: TilePos) -> Self {
        Self::with_kind(name, ActorKind::Other, position)
    }

    fn with_kind(name: impl Into<String>, kind: ActorKind, position: TilePos) -> Self {
        Self {
            id: ActorId::new(),
            name: name.into(),
            kind,
            position,
            inventory: Container::player(),
            held_slot: 0,
            permissions: BTreeSet::new(),
            notices: Vec::new(),
        }
    }

    /// Whether the actor is a player.
    pub fn is_player(&self) -> bool {
        self.kind == ActorKind::Player
    }

    /// Grant a permission node.
    #[must_use]
    pub fn with_permission(mut self, node: impl Into<String>) -> Self {
        self.permissions.insert(node.into());
        self
    }

    /// Whether the actor holds the permission node.
    pub fn has_permission(&self, node: &str) -> bool {
        self.permissions.contains(node)
    }

    /// Send a user-facing message to the actor.
    pub fn notify(&mut self, message: impl Into<String>) {
        self.notices.push(message.into());
    }

    /// Messages received so far, oldest first.
    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    /// Drain received messages.
    pub fn take_notices(&mut self) -> Vec<String> {
        core::mem::take(&mut self.notices)
    }

    /// The stack in the held slot.
    pub fn held_item(&self) -> Option<&ItemStack> {
        self.inventory.get(self.held_slot)
    }

    /// Mutable access to the stack in the held slot.
    pub fn held_item_mut(&mut self) -> Option<&mut ItemStack> {
        self.inventory.get_mut(self.held_slot)
    }
}
