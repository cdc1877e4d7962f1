//! Error types for the seedbags-core crate.
//!
//! The pickup and interaction engines never fail: their negative outcomes are
//! ordinary values. Errors here cover container slot access and the
//! acquisition command, whose failures are reported back to the sender.

use crate::config::MessagesConfig;

/// Errors raised by container slot access.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    /// The slot index is outside the container.
    #[error("slot {slot} out of range for container of size {size}")]
    SlotOutOfRange {
        /// The requested slot.
        slot: usize,
        /// Number of slots in the container.
        size: usize,
    },
}

/// Reasons the acquisition command refused to hand out a bag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// The sender is not a player.
    #[error("command can only be run by a player")]
    PlayerOnly,

    /// Wrong number of arguments.
    #[error("expected exactly one argument")]
    Usage,

    /// The argument names no registered seed kind.
    #[error("invalid seed type: {0}")]
    InvalidSeedType(String),

    /// The sender lacks the command permission.
    #[error("missing permission {0}")]
    PermissionDenied(String),
}

impl CommandError {
    /// The user-facing message for this error.
    pub fn message<'a>(&self, messages: &'a MessagesConfig) -> &'a str {
        match self {
            Self::PlayerOnly => &messages.player_only,
            Self::Usage => &messages.usage,
            Self::InvalidSeedType(_) => &messages.invalid_seed_type,
            Self::PermissionDenied(_) => &messages.no_permission,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_errors_map_to_configured_messages() {
        let messages = MessagesConfig::default();
        assert_eq!(
            CommandError::Usage.message(&messages),
            "Usage: /getseedbag <seedtype>"
        );
        assert_eq!(
            CommandError::InvalidSeedType(String::from("cactus")).message(&messages),
            "Invalid seed type."
        );
        assert_eq!(
            CommandError::PlayerOnly.message(&messages),
            "This command can only be run by a player."
        );
    }

    #[test]
    fn error_display_names_the_cause() {
        let err = CommandError::InvalidSeedType(String::from("cactus"));
        assert_eq!(err.to_string(), "invalid seed type: cactus");
        let err = InventoryError::SlotOutOfRange { slot: 40, size: 36 };
        assert!(err.to_string().contains("40"));
    }
}
