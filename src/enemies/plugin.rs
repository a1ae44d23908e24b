//! Enemy plugin - registers all enemy systems.

use bevy::prelude::*;

use super::ai;
use super::data::{load_enemy_definitions, EnemyRegistry};
use crate::core::BrawlerSet;

/// Enemy plugin - handles enemy definitions and AI.
pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app
            .init_resource::<EnemyRegistry>()
            // Definitions must exist before the arena spawns anything
            .add_systems(PreStartup, load_enemy_definitions)
            // AI runs after the player has moved this step
            .add_systems(Update, ai::update_enemies.in_set(BrawlerSet::Enemies));
    }
}
