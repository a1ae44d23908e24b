//! The player's action state machine.
//!
//! Each step evaluates priority actions in a fixed order (jump, punch,
//! strong attack, special item). The first one whose trigger is held,
//! whose cooldown is ready and which finds the lock free takes the lock;
//! the rest are dropped for this step. Movement runs every step, locked
//! or not: the lock only suppresses the movement animation.

use super::components::*;
use crate::combat::DamageOutcome;
use crate::config::PlayerTuning;
use crate::core::{Facing, InputVector, Millis};

impl Player {
    pub fn update(
        &mut self,
        input: &InputVector,
        ctx: &PlayerContext,
        now: Millis,
        tuning: &PlayerTuning,
    ) -> PlayerIntent {
        if self.defeated {
            return PlayerIntent {
                velocity_x: 0.0,
                jump_impulse: None,
                facing: self.facing,
                action: None,
                animation: None,
            };
        }

        self.combo.decay(now);

        let mut fired = None;
        if self.locked_action(now).is_none() {
            fired = self.try_priority_actions(input, ctx.grounded, now, tuning);
        }

        let velocity_x = self.steer(input, ctx.blocked, tuning);
        self.hitbox.place(ctx.position, self.facing, tuning.hitbox_offset);

        let animation = match fired {
            Some((_, key)) => Some(key),
            None if self.locked_action(now).is_some() => None,
            None if velocity_x != 0.0 => Some(AnimationKey::Run),
            None => Some(AnimationKey::Still),
        };

        let action = fired.map(|(action, _)| action);
        PlayerIntent {
            velocity_x,
            jump_impulse: (action == Some(PriorityAction::Jump)).then_some(tuning.jump_impulse),
            facing: self.facing,
            action,
            animation,
        }
    }

    /// Apply incoming damage. Ignored while invulnerable or defeated.
    pub fn damage(&mut self, amount: i32, now: Millis, tuning: &PlayerTuning) -> DamageOutcome {
        if self.defeated {
            return DamageOutcome::Ignored;
        }

        let outcome = self.health.take_damage(amount, now, tuning.invulnerability_ms);
        if outcome == DamageOutcome::Killed {
            self.defeated = true;
            self.lock = None;
            self.lock_timer.clear();
            self.hitbox.close();
        }
        outcome
    }

    pub fn health(&self) -> i32 {
        self.health.current()
    }

    fn try_priority_actions(
        &mut self,
        input: &InputVector,
        grounded: bool,
        now: Millis,
        tuning: &PlayerTuning,
    ) -> Option<(PriorityAction, AnimationKey)> {
        if input.wants_jump() && grounded && self.cooldowns.jump.is_ready(now) {
            self.cooldowns.jump.arm(now, tuning.jump_lock_ms);
            self.lock_for(PriorityAction::Jump, now, tuning.jump_lock_ms);
            return Some((PriorityAction::Jump, AnimationKey::Jump));
        }

        if input.punch && self.cooldowns.attack.is_ready(now) {
            let duration = tuning.attack_cooldown_ms;
            let variant = self.combo.advance(now, tuning.combo_window_ms);
            self.cooldowns.attack.arm(now, duration);
            self.lock_for(PriorityAction::Punch, now, duration);
            self.hitbox.open(now, duration, HitProfile::Punch, tuning.punch_hitbox);
            return Some((PriorityAction::Punch, AnimationKey::Attack(variant)));
        }

        if input.strong_attack && self.cooldowns.strong_attack.is_ready(now) {
            let duration = tuning.strong_attack_cooldown_ms;
            self.cooldowns.strong_attack.arm(now, duration);
            self.lock_for(PriorityAction::StrongAttack, now, duration);
            self.hitbox.open(now, duration, HitProfile::Strong, tuning.strong_hitbox);
            return Some((PriorityAction::StrongAttack, AnimationKey::Attack(3)));
        }

        if input.special_item && self.cooldowns.special_item.is_ready(now) {
            let duration = tuning.special_item_cooldown_ms;
            self.cooldowns.special_item.arm(now, duration);
            self.lock_for(PriorityAction::SpecialItem, now, duration);
            self.health
                .grant_invulnerability(now, tuning.special_invulnerability_ms);
            return Some((PriorityAction::SpecialItem, AnimationKey::Special));
        }

        None
    }

    fn lock_for(&mut self, action: PriorityAction, now: Millis, duration: Millis) {
        self.lock = Some(action);
        self.lock_timer.start(now, duration);
    }

    /// Turn toward the requested direction and return the horizontal
    /// velocity, zero if that way is blocked.
    fn steer(&mut self, input: &InputVector, blocked: BlockedDirections, tuning: &PlayerTuning) -> f32 {
        match input.horizontal() {
            -1 => {
                self.facing = Facing::Left;
                if blocked.left { 0.0 } else { -tuning.move_speed }
            }
            1 => {
                self.facing = Facing::Right;
                if blocked.right { 0.0 } else { tuning.move_speed }
            }
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::prelude::*;

    fn grounded() -> PlayerContext {
        PlayerContext {
            position: Vec2::new(100.0, 350.0),
            grounded: true,
            blocked: BlockedDirections::default(),
        }
    }

    fn press_punch() -> InputVector {
        InputVector {
            punch: true,
            ..default()
        }
    }

    #[test]
    fn punches_cycle_the_combo_within_the_window() {
        let tuning = PlayerTuning::default();
        let mut player = Player::new(&tuning);

        let mut variants = Vec::new();
        let mut counts = Vec::new();
        for step in 0..6 {
            let now = step * 400;
            let intent = player.update(&press_punch(), &grounded(), now, &tuning);
            assert_eq!(intent.action, Some(PriorityAction::Punch));
            variants.push(intent.animation);
            counts.push(player.combo_count());
        }

        let attack = |n| Some(AnimationKey::Attack(n));
        assert_eq!(variants, vec![attack(1), attack(2), attack(3), attack(1), attack(2), attack(3)]);
        assert_eq!(counts, vec![1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn combo_resets_after_window_without_new_punch() {
        let tuning = PlayerTuning::default();
        let mut player = Player::new(&tuning);
        player.update(&press_punch(), &grounded(), 0, &tuning);
        assert_eq!(player.combo_count(), 1);

        player.update(&InputVector::default(), &grounded(), 1_000, &tuning);
        assert_eq!(player.combo_count(), 1);

        player.update(&InputVector::default(), &grounded(), 1_001, &tuning);
        assert_eq!(player.combo_count(), 0);
    }

    #[test]
    fn punch_on_the_deadline_continues_the_chain() {
        let tuning = PlayerTuning::default();
        let mut player = Player::new(&tuning);
        player.update(&press_punch(), &grounded(), 0, &tuning);
        player.update(&press_punch(), &grounded(), 300, &tuning);
        assert_eq!(player.combo_deadline(), Some(1_300));

        let intent = player.update(&press_punch(), &grounded(), 1_300, &tuning);
        assert_eq!(intent.animation, Some(AnimationKey::Attack(3)));
        assert_eq!(player.combo_count(), 0);
    }

    #[test]
    fn late_punch_starts_a_fresh_chain() {
        let tuning = PlayerTuning::default();
        let mut player = Player::new(&tuning);
        player.update(&press_punch(), &grounded(), 0, &tuning);

        let intent = player.update(&press_punch(), &grounded(), 1_500, &tuning);
        assert_eq!(intent.animation, Some(AnimationKey::Attack(1)));
    }

    #[test]
    fn held_punch_is_dropped_until_cooldown_ready() {
        let tuning = PlayerTuning::default();
        let mut player = Player::new(&tuning);
        assert!(player.update(&press_punch(), &grounded(), 0, &tuning).action.is_some());

        for now in [16, 150, 299] {
            let intent = player.update(&press_punch(), &grounded(), now, &tuning);
            assert_eq!(intent.action, None);
            assert_eq!(intent.animation, None, "animation suppressed while locked");
        }
        assert!(player.update(&press_punch(), &grounded(), 300, &tuning).action.is_some());
    }

    #[test]
    fn jump_outranks_attacks_and_needs_ground() {
        let tuning = PlayerTuning::default();
        let mut player = Player::new(&tuning);
        let everything = InputVector {
            jump: true,
            punch: true,
            strong_attack: true,
            special_item: true,
            ..default()
        };

        let airborne = PlayerContext {
            grounded: false,
            ..grounded()
        };
        let intent = player.update(&everything, &airborne, 0, &tuning);
        assert_eq!(intent.action, Some(PriorityAction::Punch));

        let mut player = Player::new(&tuning);
        let intent = player.update(&everything, &grounded(), 0, &tuning);
        assert_eq!(intent.action, Some(PriorityAction::Jump));
        assert_eq!(intent.jump_impulse, Some(tuning.jump_impulse));
        assert_eq!(player.locked_action(100), Some(PriorityAction::Jump));
        assert!(!player.is_attacking(100));
    }

    #[test]
    fn only_one_action_holds_the_lock() {
        let tuning = PlayerTuning::default();
        let mut player = Player::new(&tuning);
        let strong = InputVector {
            strong_attack: true,
            ..default()
        };
        let intent = player.update(&strong, &grounded(), 0, &tuning);
        assert_eq!(intent.animation, Some(AnimationKey::Attack(3)));
        assert_eq!(player.combo_count(), 0, "strong attack stays out of the combo");

        // Punch cooldown is ready but the strong attack still holds the lock.
        let intent = player.update(&press_punch(), &grounded(), 500, &tuning);
        assert_eq!(intent.action, None);
        assert_eq!(player.locked_action(500), Some(PriorityAction::StrongAttack));
        assert_eq!(player.hitbox().profile, HitProfile::Strong);

        let intent = player.update(&press_punch(), &grounded(), 1_000, &tuning);
        assert_eq!(intent.action, Some(PriorityAction::Punch));
    }

    #[test]
    fn special_item_grants_invulnerability() {
        let tuning = PlayerTuning::default();
        let mut player = Player::new(&tuning);
        let special = InputVector {
            special_item: true,
            ..default()
        };
        let intent = player.update(&special, &grounded(), 0, &tuning);
        assert_eq!(intent.animation, Some(AnimationKey::Special));
        assert!(player.is_invulnerable(1_999));
        assert_eq!(player.damage(10, 1_000, &tuning), DamageOutcome::Ignored);
        assert!(!player.is_invulnerable(2_000));
    }

    #[test]
    fn movement_applies_during_lock() {
        let tuning = PlayerTuning::default();
        let mut player = Player::new(&tuning);
        player.update(&press_punch(), &grounded(), 0, &tuning);

        let left_and_punch = InputVector {
            left: true,
            punch: true,
            ..default()
        };
        let intent = player.update(&left_and_punch, &grounded(), 100, &tuning);
        assert_eq!(intent.velocity_x, -tuning.move_speed);
        assert_eq!(intent.facing, Facing::Left);
        assert_eq!(intent.animation, None);
    }

    #[test]
    fn blocked_direction_stops_but_still_turns() {
        let tuning = PlayerTuning::default();
        let mut player = Player::new(&tuning);
        let ctx = PlayerContext {
            blocked: BlockedDirections {
                left: true,
                right: false,
            },
            ..grounded()
        };
        let left = InputVector {
            left: true,
            ..default()
        };
        let intent = player.update(&left, &ctx, 0, &tuning);
        assert_eq!(intent.velocity_x, 0.0);
        assert_eq!(intent.facing, Facing::Left);
        assert_eq!(intent.animation, Some(AnimationKey::Still));

        let right = InputVector {
            right: true,
            ..default()
        };
        let intent = player.update(&right, &ctx, 16, &tuning);
        assert_eq!(intent.velocity_x, tuning.move_speed);
        assert_eq!(intent.animation, Some(AnimationKey::Run));
    }

    #[test]
    fn hitbox_follows_facing() {
        let tuning = PlayerTuning::default();
        let mut player = Player::new(&tuning);
        let left = InputVector {
            left: true,
            ..default()
        };
        player.update(&left, &grounded(), 0, &tuning);
        assert_eq!(player.hitbox().center, Vec2::new(50.0, 350.0));
    }

    #[test]
    fn damage_grants_invulnerability_once_per_window() {
        let tuning = PlayerTuning::default();
        let mut player = Player::new(&tuning);

        assert!(player.damage(10, 0, &tuning).landed());
        for _ in 0..5 {
            assert_eq!(player.damage(10, 200, &tuning), DamageOutcome::Ignored);
        }
        assert_eq!(player.health(), 90);
    }

    #[test]
    fn defeat_is_terminal() {
        let tuning = PlayerTuning {
            max_health: 10,
            ..default()
        };
        let mut player = Player::new(&tuning);
        assert_eq!(player.damage(10, 0, &tuning), DamageOutcome::Killed);
        assert!(player.is_defeated());

        let intent = player.update(&press_punch(), &grounded(), 5_000, &tuning);
        assert_eq!(intent.action, None);
        assert!(!player.is_attacking(5_000));
        assert_eq!(player.damage(10, 6_000, &tuning), DamageOutcome::Ignored);
        assert_eq!(player.health(), 0);
    }
}
