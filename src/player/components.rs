//! Player-related components.

use bevy::prelude::*;

use crate::combat::{Combatant, Health};
use crate::config::PlayerTuning;
use crate::core::{Cooldown, Facing, Millis, TimedFlag};

/// An action that takes the player's exclusive action lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriorityAction {
    Jump,
    Punch,
    StrongAttack,
    SpecialItem,
}

/// Animation the rendering layer should play for an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationKey {
    Still,
    Run,
    Jump,
    /// Attack variant 1..=3
    Attack(u8),
    Special,
}

/// Per-action cooldowns.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionCooldowns {
    pub jump: Cooldown,
    pub attack: Cooldown,
    pub strong_attack: Cooldown,
    pub special_item: Cooldown,
}

/// Combo chain of regular punches.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComboTracker {
    count: u8,
    window: TimedFlag,
}

impl ComboTracker {
    pub fn count(&self) -> u8 {
        self.count
    }

    /// Reset the chain once the clock has passed its deadline. A punch
    /// landing exactly on the deadline still continues it.
    pub fn decay(&mut self, now: Millis) {
        if self.count > 0 && !self.window.expires_at().is_some_and(|deadline| now <= deadline) {
            self.count = 0;
        }
    }

    /// Register a punch and return the attack variant it plays (1..=3).
    pub fn advance(&mut self, now: Millis, window: Millis) -> u8 {
        let variant = self.count + 1;
        self.window.start(now, window);
        self.count = (self.count + 1) % 3;
        variant
    }

    pub fn deadline(&self) -> Option<Millis> {
        self.window.expires_at()
    }
}

/// Which hit shape an open hitbox uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HitProfile {
    #[default]
    Punch,
    Strong,
}

/// The player's transient attack shape.
///
/// Repositioned every step in front of the player. While its window is
/// open the player counts as attacking; each swing may damage a given
/// enemy only once.
#[derive(Debug, Clone, Default)]
pub struct AttackHitbox {
    pub center: Vec2,
    pub size: Vec2,
    pub profile: HitProfile,
    window: TimedFlag,
    struck: Vec<Entity>,
}

impl AttackHitbox {
    pub fn is_open(&self, now: Millis) -> bool {
        self.window.is_active(now)
    }

    pub fn open(&mut self, now: Millis, duration: Millis, profile: HitProfile, size: (f32, f32)) {
        self.window.start(now, duration);
        self.profile = profile;
        self.size = Vec2::new(size.0, size.1);
        self.struck.clear();
    }

    pub fn close(&mut self) {
        self.window.clear();
        self.struck.clear();
    }

    pub fn place(&mut self, position: Vec2, facing: Facing, offset: f32) {
        self.center = Vec2::new(position.x + offset * facing.sign(), position.y);
    }

    /// Record a strike on `enemy`; false if this swing already hit it.
    pub fn register_strike(&mut self, enemy: Entity) -> bool {
        if self.struck.contains(&enemy) {
            return false;
        }
        self.struck.push(enemy);
        true
    }

    pub fn damage(&self, tuning: &PlayerTuning) -> i32 {
        match self.profile {
            HitProfile::Punch => tuning.punch_damage,
            HitProfile::Strong => tuning.strong_attack_damage,
        }
    }
}

/// What the player wants this step, for physics and rendering.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct PlayerIntent {
    /// Horizontal velocity in units per second
    pub velocity_x: f32,
    /// Upward velocity to apply this step, if a jump fired
    pub jump_impulse: Option<f32>,
    pub facing: Facing,
    /// Priority action that fired this step
    pub action: Option<PriorityAction>,
    /// `None` while a priority action holds the animation
    pub animation: Option<AnimationKey>,
}

impl Default for PlayerIntent {
    fn default() -> Self {
        Self {
            velocity_x: 0.0,
            jump_impulse: None,
            facing: Facing::Right,
            action: None,
            animation: Some(AnimationKey::Still),
        }
    }
}

/// Which horizontal directions nearby enemies block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockedDirections {
    pub left: bool,
    pub right: bool,
}

/// Physics facts the player update needs besides input.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerContext {
    pub position: Vec2,
    pub grounded: bool,
    pub blocked: BlockedDirections,
}

/// The player actor and its action state machine.
#[derive(Component, Debug, Clone)]
pub struct Player {
    pub(super) health: Health,
    pub(super) facing: Facing,
    pub(super) lock: Option<PriorityAction>,
    pub(super) lock_timer: TimedFlag,
    pub(super) combo: ComboTracker,
    pub(super) cooldowns: ActionCooldowns,
    pub(super) hitbox: AttackHitbox,
    pub(super) defeated: bool,
}

impl Player {
    pub fn new(tuning: &PlayerTuning) -> Self {
        Self {
            health: Health::new(tuning.max_health),
            facing: Facing::Right,
            lock: None,
            lock_timer: TimedFlag::default(),
            combo: ComboTracker::default(),
            cooldowns: ActionCooldowns::default(),
            hitbox: AttackHitbox::default(),
            defeated: false,
        }
    }

    pub fn combo_count(&self) -> u8 {
        self.combo.count()
    }

    pub fn combo_deadline(&self) -> Option<Millis> {
        self.combo.deadline()
    }

    /// The priority action holding the lock at `now`, if any.
    pub fn locked_action(&self, now: Millis) -> Option<PriorityAction> {
        self.lock.filter(|_| self.lock_timer.is_active(now))
    }

    pub fn is_attacking(&self, now: Millis) -> bool {
        !self.defeated && self.hitbox.is_open(now)
    }

    pub fn is_invulnerable(&self, now: Millis) -> bool {
        self.health.is_invulnerable(now)
    }

    pub fn is_defeated(&self) -> bool {
        self.defeated
    }

    pub fn hitbox(&self) -> &AttackHitbox {
        &self.hitbox
    }

    pub(crate) fn hitbox_mut(&mut self) -> &mut AttackHitbox {
        &mut self.hitbox
    }
}

impl Combatant for Player {
    fn health_model(&self) -> &Health {
        &self.health
    }

    fn facing(&self) -> Facing {
        self.facing
    }
}
