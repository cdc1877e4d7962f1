//! The `/getseedbag <seedtype>` acquisition command.

use seedbags_types::SeedKind;
use seedbags_world::WorldHost;
use tracing::{debug, info};

use crate::actor::Actor;
use crate::bag::SeedBags;
use crate::config::{CommandConfig, MessagesConfig};
use crate::error::CommandError;

/// Name the command is registered under.
pub const COMMAND_NAME: &str = "getseedbag";

/// Who ran the command.
#[derive(Debug)]
pub enum CommandSender<'a> {
    /// The server console.
    Console,
    /// A player.
    Player(&'a mut Actor),
}

/// Hands a fresh, empty bag to the invoking player.
#[derive(Debug, Clone)]
pub struct AcquireCommand {
    bags: SeedBags,
    permission: String,
    messages: MessagesConfig,
    /// Completion candidates, sorted.
    synonyms: Vec<&'static str>,
}

impl AcquireCommand {
    /// Create the command.
    pub fn new(bags: SeedBags, command: &CommandConfig, messages: MessagesConfig) -> Self {
        Self {
            bags,
            permission: command.permission.clone(),
            messages,
            synonyms: sorted_synonyms(),
        }
    }

    /// Run the command with the given arguments.
    ///
    /// On success the new bag is in the player's inventory, or on the ground
    /// at their feet if the inventory was full. Every outcome is reported to
    /// the sender.
    ///
    /// # Errors
    ///
    /// Returns a [`CommandError`] describing why no bag was handed out.
    pub fn execute<W>(
        &self,
        world: &mut W,
        sender: CommandSender<'_>,
        args: &[&str],
    ) -> Result<SeedKind, CommandError>
    where
        W: WorldHost + ?Sized,
    {
        let CommandSender::Player(player) = sender else {
            info!(command = COMMAND_NAME, "{}", self.messages.player_only);
            return Err(CommandError::PlayerOnly);
        };
        match self.give(world, player, args) {
            Ok(kind) => {
                let name = kind.synonym().replace('_', " ");
                player.notify(self.messages.bag_received.replace("{seed}", &name));
                Ok(kind)
            }
            Err(err) => {
                debug!(actor = %player.id, error = %err, "Seed bag command refused");
                player.notify(err.message(&self.messages));
                Err(err)
            }
        }
    }

    fn give<W>(&self, world: &mut W, player: &mut Actor, args: &[&str]) -> Result<SeedKind, CommandError>
    where
        W: WorldHost + ?Sized,
    {
        if !player.has_permission(&self.permission) {
            return Err(CommandError::PermissionDenied(self.permission.clone()));
        }
        let [arg] = args else {
            return Err(CommandError::Usage);
        };
        let kind =
            SeedKind::from_synonym(arg).ok_or_else(|| CommandError::InvalidSeedType((*arg).to_owned()))?;

        if let Some(overflow) = player.inventory.add_item(self.bags.create(kind)) {
            let id = world.drop_item(player.position, overflow);
            debug!(actor = %player.id, item = %id, "Inventory full, seed bag dropped");
        }
        info!(actor = %player.id, name = %player.name, kind = %kind, "Seed bag handed out");
        Ok(kind)
    }

    /// Suggestions for the argument being typed.
    ///
    /// Only the first argument is completed.
    pub fn complete(&self, args: &[&str]) -> Vec<String> {
        let [partial] = args else {
            return Vec::new();
        };
        let partial = partial.to_lowercase();
        self.synonyms
            .iter()
            .filter(|synonym| synonym.starts_with(&partial))
            .map(|synonym| (*synonym).to_owned())
            .collect()
    }
}

fn sorted_synonyms() -> Vec<&'static str> {
    let mut synonyms: Vec<&'static str> = SeedKind::ALL.into_iter().map(SeedKind::synonym).collect();
    synonyms.sort_unstable();
    synonyms
}
