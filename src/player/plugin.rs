//! Player plugin - action state machine and player-related systems.

use bevy::prelude::*;

use super::systems;
use crate::core::BrawlerSet;

/// Player plugin - runs the player's step before any enemy decides.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, systems::update_player.in_set(BrawlerSet::Player));
    }
}
