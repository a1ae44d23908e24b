//! Arena plugin - setup and roster maintenance.

use bevy::prelude::*;

use super::roster::{sweep_dead_enemies, ArenaStatus};
use super::setup::spawn_arena;
use crate::core::BrawlerSet;

/// Arena plugin - spawns the level and sweeps dead enemies each step.
pub struct ArenaPlugin {
    /// Spawn the player and enemies from [`crate::config::ArenaLayout`]
    /// at startup. Drivers that place actors themselves turn this off.
    pub spawn_on_startup: bool,
}

impl Default for ArenaPlugin {
    fn default() -> Self {
        Self {
            spawn_on_startup: true,
        }
    }
}

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ArenaStatus>()
            .add_systems(Update, sweep_dead_enemies.in_set(BrawlerSet::Sweep));

        if self.spawn_on_startup {
            app.add_systems(Startup, spawn_arena);
        }
    }
}
