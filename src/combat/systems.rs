//! Combat systems - resolve this step's overlaps.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use super::components::DamageOutcome;
use super::resolver::{resolve_attack_hit, resolve_contact, AttackHitResult};
use crate::config::PlayerTuning;
use crate::core::{plane_position, EnemyHit, EnemyKilled, GameClock, OverlapEvent, PlayerDefeated, PlayerHit};
use crate::enemies::{Enemy, EnemyStats};
use crate::player::Player;

/// Outcome events written by [`resolve_overlaps`].
#[derive(SystemParam)]
pub struct CombatEvents<'w> {
    enemy_hits: EventWriter<'w, EnemyHit>,
    enemy_kills: EventWriter<'w, EnemyKilled>,
    player_hits: EventWriter<'w, PlayerHit>,
    player_defeats: EventWriter<'w, PlayerDefeated>,
}

/// Apply every overlap reported this step.
///
/// Attack hits are all resolved before any body contact, so a killing
/// blow prevents a retaliatory contact hit from the same enemy in the
/// same step. Events naming entities that no longer exist are dropped.
pub fn resolve_overlaps(
    clock: Res<GameClock>,
    tuning: Res<PlayerTuning>,
    mut overlaps: EventReader<OverlapEvent>,
    mut player_query: Query<(&mut Player, &Transform)>,
    mut enemy_query: Query<(&mut Enemy, &EnemyStats, &Transform), Without<Player>>,
    mut events: CombatEvents,
) {
    let now = clock.now();
    let (attack_hits, contacts): (Vec<OverlapEvent>, Vec<OverlapEvent>) = overlaps
        .read()
        .copied()
        .partition(|event| matches!(event, OverlapEvent::AttackHit { .. }));

    for event in attack_hits.into_iter().chain(contacts) {
        match event {
            OverlapEvent::AttackHit { player, enemy } => {
                let Ok((mut attacker, player_transform)) = player_query.get_mut(player) else {
                    continue;
                };
                let Ok((mut target, stats, enemy_transform)) = enemy_query.get_mut(enemy) else {
                    continue;
                };

                let positions = (plane_position(player_transform), plane_position(enemy_transform));
                match resolve_attack_hit(&mut attacker, enemy, &mut target, positions, now, &tuning, stats) {
                    AttackHitResult::Hit { remaining, knockback } => {
                        debug!("Enemy {:?} hit, {} health left", enemy, remaining);
                        events.enemy_hits.send(EnemyHit {
                            enemy,
                            remaining,
                            knockback,
                        });
                    }
                    AttackHitResult::Killed { knockback } => {
                        info!("Enemy {:?} killed", enemy);
                        events.enemy_hits.send(EnemyHit {
                            enemy,
                            remaining: 0,
                            knockback,
                        });
                        events.enemy_kills.send(EnemyKilled {
                            enemy,
                            killed_by: player,
                        });
                    }
                    AttackHitResult::Rejected => {}
                }
            }
            OverlapEvent::BodyContact { player, enemy } => {
                let Ok((mut defender, _)) = player_query.get_mut(player) else {
                    continue;
                };
                let Ok((source, stats, _)) = enemy_query.get(enemy) else {
                    continue;
                };

                let amount = stats.contact_damage;
                match resolve_contact(&mut defender, source, now, &tuning, stats) {
                    DamageOutcome::Damaged { remaining } => {
                        debug!("Player touched by {:?}, {} health left", enemy, remaining);
                        events.player_hits.send(PlayerHit {
                            player,
                            source: enemy,
                            amount,
                            remaining,
                        });
                    }
                    DamageOutcome::Killed => {
                        events.player_hits.send(PlayerHit {
                            player,
                            source: enemy,
                            amount,
                            remaining: 0,
                        });
                        info!("Player defeated by contact with {:?}", enemy);
                        events.player_defeats.send(PlayerDefeated { player });
                    }
                    DamageOutcome::Ignored => {}
                }
            }
        }
    }
}
