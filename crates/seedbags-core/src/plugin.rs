//! Wiring: one value that owns both engines and the command.
//!
//! The host constructs a [`SeedBagPlugin`] once, handing it the configuration
//! and, if one is installed, the stacking subsystem. Each notification is then
//! dispatched to the matching `on_*` method together with the world it
//! concerns. There is no global instance.

use seedbags_types::SeedKind;
use seedbags_world::{NoStacking, StackingAdapter, WorldHost};
use tracing::info;

use crate::actor::Actor;
use crate::aggregation::{AggregationEngine, PickupEvent, PickupOutcome};
use crate::bag::SeedBags;
use crate::command::{AcquireCommand, CommandSender};
use crate::config::SeedBagConfig;
use crate::dispensing::{DispensingEngine, InteractEvent, InteractOutcome};
use crate::error::CommandError;

/// The seed bag mechanic, ready to receive host notifications.
#[derive(Debug)]
pub struct SeedBagPlugin {
    bags: SeedBags,
    aggregation: AggregationEngine,
    dispensing: DispensingEngine,
    command: AcquireCommand,
}

impl SeedBagPlugin {
    /// Build the plugin from `config`.
    ///
    /// When `stacking` is `None` a [`NoStacking`] adapter is injected and
    /// pickup aggregation follows `aggregation.enabled_without_stacker`.
    pub fn new(config: &SeedBagConfig, stacking: Option<Box<dyn StackingAdapter>>) -> Self {
        let bags = SeedBags::new(config);
        let has_stacker = stacking.is_some();
        let enabled = has_stacker || config.aggregation.enabled_without_stacker;
        let stacking = stacking.unwrap_or_else(|| Box::new(NoStacking));

        info!(
            stacker = has_stacker,
            aggregation = enabled,
            radius = config.dispensing.default_radius,
            "Seed bag plugin enabled"
        );

        Self {
            aggregation: AggregationEngine::new(
                bags.clone(),
                stacking,
                config.aggregation.leftover_drop,
                enabled,
            ),
            dispensing: DispensingEngine::new(
                bags.clone(),
                config.dispensing.clone(),
                config.messages.clone(),
            ),
            command: AcquireCommand::new(bags.clone(), &config.command, config.messages.clone()),
            bags,
        }
    }

    /// The bag model this plugin writes with.
    pub const fn bags(&self) -> &SeedBags {
        &self.bags
    }

    /// Whether pickups are aggregated into bags.
    pub const fn aggregates_pickups(&self) -> bool {
        self.aggregation.is_enabled()
    }

    /// An actor is about to pick up a ground item.
    pub fn on_pickup<W>(&mut self, world: &mut W, actor: &mut Actor, event: &PickupEvent) -> PickupOutcome
    where
        W: WorldHost + ?Sized,
    {
        self.aggregation.handle_pickup(world, actor, event)
    }

    /// An actor used their held item.
    pub fn on_interact<W>(
        &self,
        world: &mut W,
        actor: &mut Actor,
        event: &InteractEvent,
    ) -> InteractOutcome
    where
        W: WorldHost + ?Sized,
    {
        self.dispensing.handle_interact(world, actor, event)
    }

    /// Someone ran `/getseedbag`.
    ///
    /// # Errors
    ///
    /// Returns the [`CommandError`] that was reported to the sender.
    pub fn on_command<W>(
        &self,
        world: &mut W,
        sender: CommandSender<'_>,
        args: &[&str],
    ) -> Result<SeedKind, CommandError>
    where
        W: WorldHost + ?Sized,
    {
        self.command.execute(world, sender, args)
    }

    /// Someone is typing `/getseedbag` arguments.
    pub fn on_tab_complete(&self, args: &[&str]) -> Vec<String> {
        self.command.complete(args)
    }
}
