//! Global events used for cross-system communication.
//!
//! The collision layer reports overlaps as [`OverlapEvent`]s carrying
//! entity ids; the combat systems answer with the outcome events below
//! for rendering, audio and the roster to react to.

use bevy::prelude::*;

/// An overlap reported by the external collision layer for this step.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlapEvent {
    /// The player's attack hitbox overlaps an enemy body.
    AttackHit { player: Entity, enemy: Entity },
    /// The player's body overlaps an enemy body.
    BodyContact { player: Entity, enemy: Entity },
}

/// Sent when a player attack lands on an enemy.
#[derive(Event, Debug, Clone, Copy)]
pub struct EnemyHit {
    /// Enemy that was struck
    pub enemy: Entity,
    /// Health left after the hit
    pub remaining: i32,
    /// Knockback impulse for the physics layer
    pub knockback: Vec2,
}

/// Sent once when an enemy's health reaches zero.
#[derive(Event, Debug, Clone, Copy)]
pub struct EnemyKilled {
    pub enemy: Entity,
    pub killed_by: Entity,
}

/// Sent when a dead enemy has been swept from the roster.
#[derive(Event, Debug, Clone, Copy)]
pub struct EnemyRemoved {
    pub enemy: Entity,
}

/// Sent when an enemy fires an attack, whether or not it connects.
#[derive(Event, Debug, Clone, Copy)]
pub struct EnemyAttacked {
    pub enemy: Entity,
    /// The strike was within reach and the damage call was made
    pub landed: bool,
}

/// Sent when the player loses health.
#[derive(Event, Debug, Clone, Copy)]
pub struct PlayerHit {
    pub player: Entity,
    /// Enemy responsible for the damage
    pub source: Entity,
    pub amount: i32,
    pub remaining: i32,
}

/// Sent once when the player's health reaches zero. Game over is up to
/// whoever listens.
#[derive(Event, Debug, Clone, Copy)]
pub struct PlayerDefeated {
    pub player: Entity,
}

/// Sent once when the last enemy of the arena has been removed.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ArenaCleared;
