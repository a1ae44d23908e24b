//! Game clock and polled-expiry timers.
//!
//! Every timed rule in the simulation (cooldowns, action locks, stun,
//! invulnerability) is an expiry timestamp compared against the clock
//! once per step. Nothing is scheduled, so nothing needs cancelling: a
//! timer owned by a despawned actor simply stops being looked at.

use bevy::prelude::*;

/// Milliseconds on the game clock.
pub type Millis = u64;

/// Where [`GameClock`] takes its time from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockSource {
    /// Follow Bevy's `Time::elapsed()` every frame.
    #[default]
    Engine,
    /// The driver sets `now` itself (tests, replays, scripted demos).
    Manual,
}

/// Monotonic simulation clock, read by every step.
#[derive(Resource, Debug, Clone, Default)]
pub struct GameClock {
    now: Millis,
    pub source: ClockSource,
}

impl GameClock {
    pub fn manual(start: Millis) -> Self {
        Self {
            now: start,
            source: ClockSource::Manual,
        }
    }

    pub fn now(&self) -> Millis {
        self.now
    }

    /// Move the clock to `now`. The clock never runs backward; earlier
    /// values are ignored.
    pub fn set(&mut self, now: Millis) {
        if now > self.now {
            self.now = now;
        }
    }

    pub fn advance(&mut self, delta: Millis) {
        self.now = self.now.saturating_add(delta);
    }
}

/// Copy the engine time into the game clock.
pub fn tick_game_clock(time: Res<Time>, mut clock: ResMut<GameClock>) {
    if clock.source == ClockSource::Engine {
        clock.set(time.elapsed().as_millis() as Millis);
    }
}

/// A reusable cooldown: ready once the clock reaches `ready_at`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cooldown {
    ready_at: Millis,
}

impl Cooldown {
    pub fn is_ready(&self, now: Millis) -> bool {
        now >= self.ready_at
    }

    pub fn arm(&mut self, now: Millis, duration: Millis) {
        self.ready_at = now.saturating_add(duration);
    }

    pub fn remaining(&self, now: Millis) -> Millis {
        self.ready_at.saturating_sub(now)
    }
}

/// A flag that stays raised until its expiry timestamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimedFlag {
    expires_at: Option<Millis>,
}

impl TimedFlag {
    pub fn start(&mut self, now: Millis, duration: Millis) {
        self.expires_at = Some(now.saturating_add(duration));
    }

    /// Like [`TimedFlag::start`] but never shortens a window that is
    /// already open for longer.
    pub fn extend(&mut self, now: Millis, duration: Millis) {
        let until = now.saturating_add(duration);
        match self.expires_at {
            Some(current) if current >= until => {}
            _ => self.expires_at = Some(until),
        }
    }

    pub fn is_active(&self, now: Millis) -> bool {
        self.expires_at.is_some_and(|until| now < until)
    }

    pub fn clear(&mut self) {
        self.expires_at = None;
    }

    pub fn expires_at(&self) -> Option<Millis> {
        self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cooldown_is_ready_before_first_arm() {
        assert!(Cooldown::default().is_ready(0));
    }

    #[test]
    fn cooldown_blocks_for_exactly_its_duration() {
        let mut cooldown = Cooldown::default();
        cooldown.arm(1_000, 300);

        for t in [1_000, 1_001, 1_150, 1_299] {
            assert!(!cooldown.is_ready(t), "ready too early at {t}");
        }
        for t in [1_300, 1_301, 5_000] {
            assert!(cooldown.is_ready(t), "still cooling down at {t}");
        }
        assert_eq!(cooldown.remaining(1_100), 200);
        assert_eq!(cooldown.remaining(2_000), 0);
    }

    #[test]
    fn timed_flag_expires() {
        let mut flag = TimedFlag::default();
        assert!(!flag.is_active(0));

        flag.start(100, 500);
        assert!(flag.is_active(100));
        assert!(flag.is_active(599));
        assert!(!flag.is_active(600));

        flag.clear();
        assert!(!flag.is_active(200));
    }

    #[test]
    fn extend_keeps_the_later_expiry() {
        let mut flag = TimedFlag::default();
        flag.start(0, 2_000);
        flag.extend(100, 500);
        assert_eq!(flag.expires_at(), Some(2_000));

        flag.extend(1_900, 500);
        assert_eq!(flag.expires_at(), Some(2_400));
    }

    #[test]
    fn clock_never_runs_backward() {
        let mut clock = GameClock::manual(500);
        clock.set(400);
        assert_eq!(clock.now(), 500);
        clock.advance(16);
        assert_eq!(clock.now(), 516);
    }
}
