//! Brawler - headless demo driver.
//!
//! Runs one arena with a scripted player: walk right, punch whatever is
//! in reach. A minimal stand-in for the physics layer integrates
//! velocities and reports overlaps so the combat rules have something
//! to resolve. Rendering and real input capture live elsewhere.

use bevy::log::LogPlugin;
use bevy::prelude::*;

use brawler::arena::ArenaStatus;
use brawler::config::ArenaLayout;
use brawler::core::{BrawlerSet, GameClock, GroundContact, InputVector, Millis, OverlapEvent, Velocity};
use brawler::enemies::Enemy;
use brawler::player::Player;
use brawler::BrawlerPlugin;

const STEP_MS: Millis = 16;
const MAX_STEPS: u32 = 60 * 120;
const GRAVITY: f32 = 500.0;
const PLAYER_BODY: Vec2 = Vec2::new(50.0, 90.0);
const ENEMY_BODY: Vec2 = Vec2::new(32.0, 48.0);

fn main() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(LogPlugin::default())
        .insert_resource(GameClock::manual(0))
        .add_plugins(BrawlerPlugin::from_dir("assets/data"))
        .add_systems(Update, scripted_input.before(BrawlerSet::Player))
        .add_systems(Update, (integrate_motion, report_overlaps).chain().in_set(BrawlerSet::Physics));

    for step in 0..MAX_STEPS {
        app.world_mut().resource_mut::<GameClock>().advance(STEP_MS);
        app.update();

        let cleared = app.world().resource::<ArenaStatus>().cleared;
        let defeated = app
            .world_mut()
            .query::<&Player>()
            .iter(app.world())
            .any(|player| player.is_defeated());
        if cleared || defeated {
            info!("Finished after {} steps (cleared: {}, defeated: {})", step + 1, cleared, defeated);
            return;
        }
    }
    info!("Stopped after {} steps without a result", MAX_STEPS);
}

/// Walk toward the nearest enemy and punch once it is close.
fn scripted_input(
    mut input: ResMut<InputVector>,
    player_query: Query<&Transform, With<Player>>,
    enemy_query: Query<&Transform, With<Enemy>>,
) {
    let Ok(player) = player_query.get_single() else {
        return;
    };

    let nearest = enemy_query
        .iter()
        .map(|enemy| enemy.translation.x - player.translation.x)
        .min_by(|a, b| a.abs().total_cmp(&b.abs()));

    *input = match nearest {
        Some(dx) => InputVector {
            left: dx < 0.0,
            right: dx > 0.0,
            punch: dx.abs() < 80.0,
            ..default()
        },
        None => InputVector::default(),
    };
}

/// Stand-in physics: apply velocity, gravity and the arena walls.
fn integrate_motion(
    layout: Res<ArenaLayout>,
    mut query: Query<(&mut Transform, &mut Velocity, Option<&mut GroundContact>)>,
) {
    let dt = STEP_MS as f32 / 1000.0;
    let (left, right) = layout.bounds;

    for (mut transform, mut velocity, ground) in query.iter_mut() {
        velocity.0.y -= GRAVITY * dt;
        transform.translation.x = (transform.translation.x + velocity.0.x * dt).clamp(left, right);
        transform.translation.y += velocity.0.y * dt;

        let on_ground = transform.translation.y <= layout.ground_y;
        if on_ground {
            transform.translation.y = layout.ground_y;
            velocity.0.y = 0.0;
        }
        if let Some(mut ground) = ground {
            ground.0 = on_ground;
        }
    }
}

/// Stand-in collision: report hitbox and body overlaps as AABB tests.
fn report_overlaps(
    clock: Res<GameClock>,
    player_query: Query<(Entity, &Player, &Transform)>,
    enemy_query: Query<(Entity, &Transform), With<Enemy>>,
    mut overlaps: EventWriter<OverlapEvent>,
) {
    let Ok((player_entity, player, player_transform)) = player_query.get_single() else {
        return;
    };
    let body = player_transform.translation.truncate();
    let hitbox = player.hitbox();

    for (enemy_entity, enemy_transform) in enemy_query.iter() {
        let enemy = enemy_transform.translation.truncate();
        if hitbox.is_open(clock.now()) && overlaps_aabb(hitbox.center, hitbox.size, enemy, ENEMY_BODY) {
            overlaps.send(OverlapEvent::AttackHit {
                player: player_entity,
                enemy: enemy_entity,
            });
        }
        if overlaps_aabb(body, PLAYER_BODY, enemy, ENEMY_BODY) {
            overlaps.send(OverlapEvent::BodyContact {
                player: player_entity,
                enemy: enemy_entity,
            });
        }
    }
}

fn overlaps_aabb(a: Vec2, a_size: Vec2, b: Vec2, b_size: Vec2) -> bool {
    let gap = (a - b).abs();
    let reach = (a_size + b_size) / 2.0;
    gap.x < reach.x && gap.y < reach.y
}
