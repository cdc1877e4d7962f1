//! Type-safe identifier wrappers around [`Uuid`].
//!
//! Actors and ground item entities get strongly-typed IDs so that the two
//! can never be mixed up at a call site. All IDs use UUID v7 (time-ordered)
//! so that map iteration follows creation order.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Declares an opaque id newtype. Ids serialize as the bare UUID string.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub Uuid);

        impl $name {
            /// A fresh, time-ordered identifier.
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id! {
    /// Unique identifier for an actor (a player or any inventory owner).
    ActorId
}

define_id! {
    /// Unique identifier for an item entity lying on the ground.
    GroundItemId
}
