//! Core plugin that sets up the clock, global events and step ordering.

use bevy::prelude::*;

use super::clock::*;
use super::events::*;
use super::input::InputVector;

/// Phases of one simulation step, run in this order every frame.
///
/// Overlaps for step N are resolved against positions as they stand at
/// the end of step N's movement, so the external collision layer puts
/// its overlap-reporting systems in [`BrawlerSet::Physics`].
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum BrawlerSet {
    Clock,
    Player,
    Enemies,
    Physics,
    Resolve,
    Sweep,
}

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - The game clock and the input snapshot resources
/// - Global events (OverlapEvent, EnemyKilled, PlayerDefeated, etc.)
/// - The ordering of the step phases
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            .init_resource::<GameClock>()
            .init_resource::<InputVector>()

            // Register global events
            .add_event::<OverlapEvent>()
            .add_event::<EnemyHit>()
            .add_event::<EnemyKilled>()
            .add_event::<EnemyRemoved>()
            .add_event::<EnemyAttacked>()
            .add_event::<PlayerHit>()
            .add_event::<PlayerDefeated>()
            .add_event::<ArenaCleared>()

            .configure_sets(
                Update,
                (
                    BrawlerSet::Clock,
                    BrawlerSet::Player,
                    BrawlerSet::Enemies,
                    BrawlerSet::Physics,
                    BrawlerSet::Resolve,
                    BrawlerSet::Sweep,
                )
                    .chain(),
            )
            .add_systems(Update, tick_game_clock.in_set(BrawlerSet::Clock));
    }
}
