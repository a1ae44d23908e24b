//! Health and the damage contract shared by the player and enemies.

use crate::core::{Facing, Millis, TimedFlag};

/// Result of a damage call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Invulnerable, already dead, or a non-positive amount.
    Ignored,
    /// Health went down but the actor is still alive.
    Damaged { remaining: i32 },
    /// This hit brought health to zero or below.
    Killed,
}

impl DamageOutcome {
    pub fn landed(&self) -> bool {
        !matches!(self, DamageOutcome::Ignored)
    }
}

/// Health with an optional invulnerability window.
///
/// Health never drops below zero, and once at zero it stays there: a
/// dead actor ignores every further hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    current: i32,
    maximum: i32,
    invulnerable: TimedFlag,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self {
            current: max.max(0),
            maximum: max.max(0),
            invulnerable: TimedFlag::default(),
        }
    }

    pub fn current(&self) -> i32 {
        self.current
    }

    pub fn maximum(&self) -> i32 {
        self.maximum
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0
    }

    pub fn is_invulnerable(&self, now: Millis) -> bool {
        self.invulnerable.is_active(now)
    }

    /// Open (or stretch) an invulnerability window.
    pub fn grant_invulnerability(&mut self, now: Millis, duration: Millis) {
        self.invulnerable.extend(now, duration);
    }

    /// Apply `amount` unless invulnerable or dead. A surviving actor is
    /// then invulnerable for `invulnerability` ms (zero for none).
    pub fn take_damage(&mut self, amount: i32, now: Millis, invulnerability: Millis) -> DamageOutcome {
        if amount <= 0 || self.is_dead() || self.is_invulnerable(now) {
            return DamageOutcome::Ignored;
        }

        self.current = (self.current - amount).max(0);
        if self.is_dead() {
            self.invulnerable.clear();
            return DamageOutcome::Killed;
        }

        if invulnerability > 0 {
            self.invulnerable.start(now, invulnerability);
        }
        DamageOutcome::Damaged {
            remaining: self.current,
        }
    }

    pub fn percentage(&self) -> f32 {
        if self.maximum == 0 {
            return 0.0;
        }
        self.current as f32 / self.maximum as f32
    }
}

/// What the combat rules need from any actor.
pub trait Combatant {
    fn health_model(&self) -> &Health;
    fn facing(&self) -> Facing;

    fn is_alive(&self) -> bool {
        !self.health_model().is_dead()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_reduces_health() {
        let mut health = Health::new(100);
        assert_eq!(health.take_damage(10, 0, 0), DamageOutcome::Damaged { remaining: 90 });
        assert_eq!(health.current(), 90);
        assert_eq!(health.percentage(), 0.9);
    }

    #[test]
    fn invulnerability_window_absorbs_repeat_hits() {
        let mut health = Health::new(100);
        assert!(health.take_damage(10, 1_000, 500).landed());

        for t in [1_000, 1_100, 1_499] {
            assert_eq!(health.take_damage(10, t, 500), DamageOutcome::Ignored);
        }
        assert_eq!(health.current(), 90);

        assert!(health.take_damage(10, 1_500, 500).landed());
        assert_eq!(health.current(), 80);
    }

    #[test]
    fn killing_blow_clamps_at_zero_and_is_terminal() {
        let mut health = Health::new(2);
        assert_eq!(health.take_damage(5, 0, 0), DamageOutcome::Killed);
        assert_eq!(health.current(), 0);
        assert_eq!(health.take_damage(1, 10, 0), DamageOutcome::Ignored);
        assert_eq!(health.current(), 0);
    }

    #[test]
    fn granted_invulnerability_blocks_damage() {
        let mut health = Health::new(10);
        health.grant_invulnerability(0, 2_000);
        assert_eq!(health.take_damage(3, 1_999, 0), DamageOutcome::Ignored);
        assert!(health.take_damage(3, 2_000, 0).landed());
    }

    #[test]
    fn zero_damage_is_ignored() {
        let mut health = Health::new(10);
        assert_eq!(health.take_damage(0, 0, 500), DamageOutcome::Ignored);
        assert!(!health.is_invulnerable(0));
    }
}
