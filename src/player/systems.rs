//! Player systems - drive the action state machine once per step.

use bevy::prelude::*;

use super::blocking::blocked_directions;
use super::components::*;
use crate::config::PlayerTuning;
use crate::core::{plane_position, Facing, GameClock, GroundContact, InputVector, Velocity};
use crate::enemies::Enemy;

/// Read the input snapshot, update the player and publish its intent.
pub fn update_player(
    clock: Res<GameClock>,
    input: Res<InputVector>,
    tuning: Res<PlayerTuning>,
    mut player_query: Query<(
        &mut Player,
        &Transform,
        &GroundContact,
        &mut Velocity,
        &mut Facing,
        &mut PlayerIntent,
    )>,
    enemy_query: Query<(&Transform, &Enemy), Without<Player>>,
) {
    let Ok((mut player, transform, ground, mut velocity, mut facing, mut intent)) =
        player_query.get_single_mut()
    else {
        return;
    };

    let position = plane_position(transform);
    let nearby = enemy_query
        .iter()
        .filter(|(_, enemy)| !enemy.is_dead())
        .map(|(enemy_transform, _)| plane_position(enemy_transform));
    let ctx = PlayerContext {
        position,
        grounded: ground.0,
        blocked: blocked_directions(position, nearby, tuning.blocking_distance, tuning.blocking_height),
    };

    let next = player.update(&input, &ctx, clock.now(), &tuning);
    if let Some(action) = next.action {
        debug!("Player action {:?} at {}ms", action, clock.now());
    }

    velocity.0.x = next.velocity_x;
    if let Some(impulse) = next.jump_impulse {
        velocity.0.y = impulse;
    }
    *facing = next.facing;
    *intent = next;
}

/// Components of a freshly spawned player.
pub fn player_bundle(position: Vec2, tuning: &PlayerTuning) -> impl Bundle {
    (
        Player::new(tuning),
        PlayerIntent::default(),
        Velocity::default(),
        Facing::Right,
        GroundContact(true),
        Transform::from_translation(position.extend(0.0)),
    )
}

/// Spawn the player entity.
pub fn spawn_player(commands: &mut Commands, position: Vec2, tuning: &PlayerTuning) -> Entity {
    commands.spawn(player_bundle(position, tuning)).id()
}
