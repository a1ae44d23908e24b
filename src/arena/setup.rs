//! Arena setup - spawn the player and the configured enemies.

use bevy::prelude::*;

use super::roster::ArenaStatus;
use crate::config::{ArenaLayout, PlayerTuning};
use crate::enemies::{enemy_positions, placement_rng, spawn_enemy, EnemyRegistry};
use crate::player::spawn_player;

/// Spawn the player and every enemy described by [`ArenaLayout`].
pub fn spawn_arena(
    mut commands: Commands,
    layout: Res<ArenaLayout>,
    tuning: Res<PlayerTuning>,
    registry: Res<EnemyRegistry>,
    mut status: ResMut<ArenaStatus>,
) {
    let (x, y) = layout.player_spawn;
    spawn_player(&mut commands, Vec2::new(x, y), &tuning);

    let stats = registry.stats_for(&layout.enemy_type);
    let positions = enemy_positions(&layout, &mut placement_rng(&layout));
    for position in &positions {
        spawn_enemy(&mut commands, *position, &layout.enemy_type, stats.clone());
    }

    *status = ArenaStatus {
        remaining: positions.len() as u32,
        ..default()
    };
    info!(
        "Arena ready: {} x '{}' between {:?}",
        positions.len(),
        layout.enemy_type,
        layout.bounds
    );
}
