//! The active enemy roster and its mark-and-sweep removal.
//!
//! Enemies killed during a step are only marked [`EnemyState::Dead`];
//! they are despawned here, after every other system of the step has
//! finished iterating over them.

use bevy::prelude::*;

use crate::core::{ArenaCleared, EnemyRemoved};
use crate::enemies::{Enemy, EnemyState};

/// Progress through the current arena.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct ArenaStatus {
    /// Enemies removed from the roster so far
    pub defeated: u32,
    /// Enemies still alive after the last sweep
    pub remaining: u32,
    /// Set once the last enemy has been removed; the exit is open
    pub cleared: bool,
}

/// Despawn dead enemies and update [`ArenaStatus`].
pub fn sweep_dead_enemies(
    mut commands: Commands,
    enemy_query: Query<(Entity, &Enemy)>,
    mut status: ResMut<ArenaStatus>,
    mut removed_events: EventWriter<EnemyRemoved>,
    mut cleared_events: EventWriter<ArenaCleared>,
) {
    let mut remaining = 0;
    let mut swept = 0;

    for (entity, enemy) in enemy_query.iter() {
        if enemy.state() == EnemyState::Dead {
            commands.entity(entity).despawn_recursive();
            removed_events.send(EnemyRemoved { enemy: entity });
            swept += 1;
        } else {
            remaining += 1;
        }
    }

    status.defeated += swept;
    status.remaining = remaining;

    if swept > 0 && remaining == 0 && !status.cleared {
        status.cleared = true;
        info!("Arena cleared ({} enemies defeated)", status.defeated);
        cleared_events.send(ArenaCleared);
    }
}
