//! Enemy AI behavior.
//!
//! Zones by distance to the player decide what an enemy does:
//! attack range (stand and strike), chase range (walk toward the
//! player), beyond (idle). A stun suspends every decision until it
//! expires; death ends them for good.

use bevy::prelude::*;

use super::components::*;
use crate::combat::DamageOutcome;
use crate::config::PlayerTuning;
use crate::core::{EnemyAttacked, Facing, GameClock, Millis, PlayerDefeated, PlayerHit, Velocity};
use crate::player::Player;

impl Enemy {
    /// Decide this step's movement and whether an attack fires.
    pub fn update(&mut self, own: Vec2, player: Vec2, now: Millis, stats: &EnemyStats) -> EnemyIntent {
        if self.state == EnemyState::Dead {
            return self.standing(None);
        }

        if self.stun.is_active(now) {
            self.state = EnemyState::Stunned;
            return self.standing(None);
        }

        let dx = player.x - own.x;
        let distance = stats.metric.distance(own, player);
        self.facing = Facing::toward(dx, self.facing);

        if distance <= stats.attack_range {
            self.state = EnemyState::Attacking;
            let attack = self.try_attack(dx, now, stats);
            return self.standing(attack);
        }

        if distance <= stats.chase_range {
            self.state = EnemyState::Approaching;
            let velocity_x = if dx.abs() <= stats.stop_distance {
                0.0
            } else {
                stats.speed * dx.signum()
            };
            return EnemyIntent {
                velocity_x,
                facing: self.facing,
                state: self.state,
                attack: None,
            };
        }

        self.state = EnemyState::Idle;
        self.standing(None)
    }

    /// Take a hit. Dead enemies ignore it; survivors are stunned.
    pub fn damage(&mut self, amount: i32, now: Millis, stats: &EnemyStats) -> DamageOutcome {
        if self.state == EnemyState::Dead {
            return DamageOutcome::Ignored;
        }

        let outcome = self.health.take_damage(amount, now, 0);
        match outcome {
            DamageOutcome::Killed => {
                self.state = EnemyState::Dead;
                self.stun.clear();
                self.attack_window.clear();
            }
            DamageOutcome::Damaged { .. } => {
                self.state = EnemyState::Stunned;
                self.stun.start(now, stats.stun_ms);
                self.attack_window.clear();
            }
            DamageOutcome::Ignored => {}
        }
        outcome
    }

    /// Fire an attack if not mid-swing and off cooldown. Whether it
    /// lands is decided by the looser strike range at execution time.
    fn try_attack(&mut self, dx: f32, now: Millis, stats: &EnemyStats) -> Option<EnemyAttack> {
        if self.attack_window.is_active(now) || !self.attack_cooldown.is_ready(now) {
            return None;
        }

        self.attack_cooldown.arm(now, stats.attack_cooldown_ms);
        self.attack_window.start(now, stats.attack_duration_ms);
        Some(EnemyAttack {
            landed: dx.abs() <= stats.strike_range,
            damage: stats.attack_damage,
        })
    }

    fn standing(&self, attack: Option<EnemyAttack>) -> EnemyIntent {
        EnemyIntent {
            velocity_x: 0.0,
            facing: self.facing,
            state: self.state,
            attack,
        }
    }
}

/// Run every enemy's AI against the player and apply landed strikes.
///
/// Strikes call the player's damage contract directly; they do not go
/// through the overlap events.
pub fn update_enemies(
    clock: Res<GameClock>,
    tuning: Res<PlayerTuning>,
    mut player_query: Query<(Entity, &mut Player, &Transform)>,
    mut enemy_query: Query<
        (Entity, &mut Enemy, &EnemyStats, &Transform, &mut Velocity, &mut Facing, &mut EnemyIntent),
        Without<Player>,
    >,
    mut attacked_events: EventWriter<EnemyAttacked>,
    mut hit_events: EventWriter<PlayerHit>,
    mut defeated_events: EventWriter<PlayerDefeated>,
) {
    let Ok((player_entity, mut player, player_transform)) = player_query.get_single_mut() else {
        return;
    };
    let now = clock.now();
    let player_pos = player_transform.translation.truncate();

    for (entity, mut enemy, stats, transform, mut velocity, mut facing, mut intent) in enemy_query.iter_mut() {
        if enemy.is_dead() {
            continue;
        }

        let next = enemy.update(transform.translation.truncate(), player_pos, now, stats);
        velocity.0.x = next.velocity_x;
        *facing = next.facing;
        *intent = next;

        let Some(attack) = next.attack else {
            continue;
        };
        debug!("Enemy {:?} attacks (landed: {})", entity, attack.landed);
        attacked_events.send(EnemyAttacked {
            enemy: entity,
            landed: attack.landed,
        });
        if !attack.landed {
            continue;
        }

        match player.damage(attack.damage, now, &tuning) {
            DamageOutcome::Damaged { remaining } => {
                hit_events.send(PlayerHit {
                    player: player_entity,
                    source: entity,
                    amount: attack.damage,
                    remaining,
                });
            }
            DamageOutcome::Killed => {
                hit_events.send(PlayerHit {
                    player: player_entity,
                    source: entity,
                    amount: attack.damage,
                    remaining: 0,
                });
                info!("Player defeated by {:?}", entity);
                defeated_events.send(PlayerDefeated {
                    player: player_entity,
                });
            }
            DamageOutcome::Ignored => {}
        }
    }
}
