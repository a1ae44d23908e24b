//! Enemy-related components.

use bevy::prelude::*;
use serde::Deserialize;

use crate::combat::{Combatant, Health};
use crate::core::{Cooldown, Facing, Millis, TimedFlag};

/// Enemy type identifier (matches RON file name).
#[derive(Component, Clone, Debug)]
pub struct EnemyType(pub String);

/// AI state machine for enemy behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnemyState {
    /// Player out of chase range; standing still.
    #[default]
    Idle,
    /// Moving toward the player.
    Approaching,
    /// Within attack range, striking whenever the cooldown allows.
    Attacking,
    /// Hit recently; no movement and no attacks until the stun ends.
    Stunned,
    /// Health reached zero. Waiting to be swept from the roster.
    Dead,
}

/// How the AI measures its distance to the player.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceMetric {
    #[default]
    Euclidean,
    /// Ignore the vertical offset.
    Horizontal,
}

impl DistanceMetric {
    pub fn distance(self, from: Vec2, to: Vec2) -> f32 {
        match self {
            DistanceMetric::Euclidean => from.distance(to),
            DistanceMetric::Horizontal => (to.x - from.x).abs(),
        }
    }
}

/// Enemy stats loaded from RON data files.
#[derive(Component, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EnemyStats {
    pub max_health: i32,
    /// Horizontal speed in units per second
    pub speed: f32,
    /// Damage of a strike that lands
    pub attack_damage: i32,
    /// Damage dealt by touching the player
    pub contact_damage: i32,
    /// Distance at which the enemy stops and decides to attack
    pub attack_range: f32,
    /// Distance beyond which the enemy loses interest
    pub chase_range: f32,
    /// Horizontal reach checked when the strike executes
    pub strike_range: f32,
    /// Horizontal offset under which chasing stops
    pub stop_distance: f32,
    pub attack_cooldown_ms: Millis,
    /// How long one attack swing lasts
    pub attack_duration_ms: Millis,
    pub stun_ms: Millis,
    pub metric: DistanceMetric,
}

impl Default for EnemyStats {
    fn default() -> Self {
        Self {
            max_health: 2,
            speed: 50.0,
            attack_damage: 10,
            contact_damage: 10,
            attack_range: 50.0,
            chase_range: 400.0,
            strike_range: 80.0,
            stop_distance: 30.0,
            attack_cooldown_ms: 1_000,
            attack_duration_ms: 400,
            stun_ms: 500,
            metric: DistanceMetric::Euclidean,
        }
    }
}

/// A fired enemy attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyAttack {
    /// The player was within strike range when the swing executed
    pub landed: bool,
    pub damage: i32,
}

/// What an enemy wants this step, for physics and rendering.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct EnemyIntent {
    pub velocity_x: f32,
    pub facing: Facing,
    pub state: EnemyState,
    pub attack: Option<EnemyAttack>,
}

/// The enemy actor and its AI state.
#[derive(Component, Debug, Clone)]
pub struct Enemy {
    pub(super) health: Health,
    pub(super) facing: Facing,
    pub(super) state: EnemyState,
    pub(super) attack_cooldown: Cooldown,
    pub(super) attack_window: TimedFlag,
    pub(super) stun: TimedFlag,
}

impl Enemy {
    pub fn new(stats: &EnemyStats) -> Self {
        Self {
            health: Health::new(stats.max_health),
            facing: Facing::Left,
            state: EnemyState::Idle,
            attack_cooldown: Cooldown::default(),
            attack_window: TimedFlag::default(),
            stun: TimedFlag::default(),
        }
    }

    pub fn state(&self) -> EnemyState {
        self.state
    }

    pub fn health(&self) -> i32 {
        self.health.current()
    }

    pub fn is_dead(&self) -> bool {
        self.state == EnemyState::Dead
    }
}

impl Combatant for Enemy {
    fn health_model(&self) -> &Health {
        &self.health
    }

    fn facing(&self) -> Facing {
        self.facing
    }

    fn is_alive(&self) -> bool {
        self.state != EnemyState::Dead
    }
}
