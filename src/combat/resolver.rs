//! Combat rules applied to overlaps reported by the collision layer.

use bevy::prelude::*;

use super::components::{Combatant, DamageOutcome};
use crate::config::PlayerTuning;
use crate::core::Millis;
use crate::enemies::{Enemy, EnemyStats};
use crate::player::Player;

/// Outcome of the player's hitbox touching an enemy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttackHitResult {
    /// No open attack window, enemy already dead, or already struck by
    /// this swing.
    Rejected,
    Hit { remaining: i32, knockback: Vec2 },
    Killed { knockback: Vec2 },
}

/// Knockback pushing an enemy away from the player, with a small hop.
pub fn knockback(player: &Player, player_pos: Vec2, enemy_pos: Vec2, tuning: &PlayerTuning) -> Vec2 {
    let away = enemy_pos.x - player_pos.x;
    let direction = if away == 0.0 {
        player.facing().sign()
    } else {
        away.signum()
    };
    let (push, hop) = tuning.knockback;
    Vec2::new(push * direction, hop)
}

/// Attack hitbox overlapping an enemy.
///
/// Damage applies only while the player's attack window is open and the
/// enemy is alive, and at most once per enemy per swing.
pub fn resolve_attack_hit(
    player: &mut Player,
    enemy_id: Entity,
    enemy: &mut Enemy,
    positions: (Vec2, Vec2),
    now: Millis,
    tuning: &PlayerTuning,
    stats: &EnemyStats,
) -> AttackHitResult {
    if !player.is_attacking(now) || !enemy.is_alive() {
        return AttackHitResult::Rejected;
    }
    if !player.hitbox_mut().register_strike(enemy_id) {
        return AttackHitResult::Rejected;
    }

    let (player_pos, enemy_pos) = positions;
    let amount = player.hitbox().damage(tuning);
    let knockback = knockback(player, player_pos, enemy_pos, tuning);
    match enemy.damage(amount, now, stats) {
        DamageOutcome::Damaged { remaining } => AttackHitResult::Hit { remaining, knockback },
        DamageOutcome::Killed => AttackHitResult::Killed { knockback },
        DamageOutcome::Ignored => AttackHitResult::Rejected,
    }
}

/// Player body overlapping an enemy: contact damage unless the enemy is
/// dead or the player is invulnerable.
pub fn resolve_contact(
    player: &mut Player,
    enemy: &Enemy,
    now: Millis,
    tuning: &PlayerTuning,
    stats: &EnemyStats,
) -> DamageOutcome {
    if !enemy.is_alive() {
        return DamageOutcome::Ignored;
    }
    player.damage(stats.contact_damage, now, tuning)
}
