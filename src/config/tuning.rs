//! Tuning values for the player and the arena, loaded from RON.

use bevy::prelude::*;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::error::ConfigError;
use crate::core::Millis;

/// Playable character. Each one starts from its own tuning preset.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Character {
    #[default]
    Fighter,
    Shinobi,
    Samurai,
}

/// Player combat and movement constants.
#[derive(Resource, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PlayerTuning {
    pub max_health: i32,
    /// Horizontal speed in units per second
    pub move_speed: f32,
    /// Upward velocity applied on jump
    pub jump_impulse: f32,
    /// How long a jump holds the action lock
    pub jump_lock_ms: Millis,
    /// Punch cooldown, also the punch lock and hitbox window
    pub attack_cooldown_ms: Millis,
    pub combo_window_ms: Millis,
    pub strong_attack_cooldown_ms: Millis,
    pub special_item_cooldown_ms: Millis,
    /// Invulnerability granted by the special item
    pub special_invulnerability_ms: Millis,
    /// Invulnerability after taking a hit
    pub invulnerability_ms: Millis,
    pub punch_damage: i32,
    pub strong_attack_damage: i32,
    /// Distance from the body center to the hitbox center, along facing
    pub hitbox_offset: f32,
    /// Punch hitbox (width, height)
    pub punch_hitbox: (f32, f32),
    /// Strong attack hitbox (width, height)
    pub strong_hitbox: (f32, f32),
    /// Horizontal reach within which an enemy blocks movement
    pub blocking_distance: f32,
    /// Vertical offset below which an enemy counts as blocking
    pub blocking_height: f32,
    /// Knockback given to a struck enemy (horizontal push, upward hop)
    pub knockback: (f32, f32),
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            max_health: 100,
            move_speed: 160.0,
            jump_impulse: 330.0,
            jump_lock_ms: 500,
            attack_cooldown_ms: 300,
            combo_window_ms: 1_000,
            strong_attack_cooldown_ms: 1_000,
            special_item_cooldown_ms: 500,
            special_invulnerability_ms: 2_000,
            invulnerability_ms: 500,
            punch_damage: 1,
            strong_attack_damage: 2,
            hitbox_offset: 50.0,
            punch_hitbox: (30.0, 100.0),
            strong_hitbox: (60.0, 100.0),
            blocking_distance: 70.0,
            blocking_height: 70.0,
            knockback: (60.0, 200.0),
        }
    }
}

impl PlayerTuning {
    /// Preset tuning for a character.
    pub fn for_character(character: Character) -> Self {
        match character {
            Character::Fighter => Self::default(),
            Character::Shinobi => Self {
                move_speed: 180.0,
                attack_cooldown_ms: 250,
                special_item_cooldown_ms: 2_000,
                invulnerability_ms: 750,
                ..Self::default()
            },
            Character::Samurai => Self {
                move_speed: 150.0,
                strong_attack_damage: 3,
                strong_hitbox: (80.0, 100.0),
                special_item_cooldown_ms: 5_000,
                invulnerability_ms: 1_000,
                ..Self::default()
            },
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_health <= 0 {
            return Err(ConfigError::Invalid(format!(
                "player max_health must be positive, got {}",
                self.max_health
            )));
        }
        if self.move_speed < 0.0 || self.blocking_distance < 0.0 || self.blocking_height < 0.0 {
            return Err(ConfigError::Invalid(
                "player speeds and blocking thresholds must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// How enemies are placed when the arena is set up.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub enum Placement {
    /// `start_x + i * spacing` for the i-th enemy.
    Fixed { start_x: f32, spacing: f32 },
    /// Uniform within `[min_x, max_x]`. A seed makes placement repeatable.
    Random {
        min_x: f32,
        max_x: f32,
        #[serde(default)]
        seed: Option<u64>,
    },
}

/// Arena bounds and what to spawn in it.
#[derive(Resource, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ArenaLayout {
    /// Left and right walls
    pub bounds: (f32, f32),
    pub ground_y: f32,
    pub player_spawn: (f32, f32),
    /// Enemy definition name (file stem under `enemies/`)
    pub enemy_type: String,
    pub enemy_count: usize,
    pub placement: Placement,
}

impl Default for ArenaLayout {
    fn default() -> Self {
        Self {
            bounds: (10.0, 790.0),
            ground_y: 348.0,
            player_spawn: (100.0, 350.0),
            enemy_type: "zombie".to_string(),
            enemy_count: 3,
            placement: Placement::Fixed {
                start_x: 450.0,
                spacing: 100.0,
            },
        }
    }
}

impl ArenaLayout {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (left, right) = self.bounds;
        if left >= right {
            return Err(ConfigError::Invalid(format!(
                "arena bounds are empty: ({left}, {right})"
            )));
        }
        if let Placement::Random { min_x, max_x, .. } = self.placement {
            if min_x > max_x {
                return Err(ConfigError::Invalid(format!(
                    "random placement range is empty: ({min_x}, {max_x})"
                )));
            }
        }
        Ok(())
    }
}

/// Top-level tuning file (`tuning.ron`).
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Tuning {
    pub character: Character,
    /// Overrides the character preset entirely when present
    pub player: Option<PlayerTuning>,
    pub arena: ArenaLayout,
}

impl Tuning {
    pub fn player_tuning(&self) -> PlayerTuning {
        self.player
            .clone()
            .unwrap_or_else(|| PlayerTuning::for_character(self.character))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.player_tuning().validate()?;
        self.arena.validate()
    }

    pub fn from_ron(source: &str, origin: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = parse_ron(source, origin)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = read_file(path)?;
        Self::from_ron(&contents, &path.display().to_string())
    }
}

pub(crate) fn read_file(path: &Path) -> Result<String, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }
    fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.display().to_string(),
        details: e.to_string(),
    })
}

pub(crate) fn parse_ron<T: DeserializeOwned>(source: &str, origin: &str) -> Result<T, ConfigError> {
    ron::from_str::<T>(source).map_err(|e| ConfigError::ParseError {
        path: origin.to_string(),
        details: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let tuning = Tuning::from_ron("()", "inline").unwrap();
        assert_eq!(tuning, Tuning::default());
        assert_eq!(tuning.player_tuning().attack_cooldown_ms, 300);
    }

    #[test]
    fn character_preset_is_used_without_override() {
        let tuning = Tuning::from_ron("(character: Samurai)", "inline").unwrap();
        assert_eq!(tuning.player_tuning().special_item_cooldown_ms, 5_000);
    }

    #[test]
    fn explicit_player_overrides_preset() {
        let source = r#"(
            character: Shinobi,
            player: Some((combo_window_ms: 800)),
        )"#;
        let player = Tuning::from_ron(source, "inline").unwrap().player_tuning();
        assert_eq!(player.combo_window_ms, 800);
        // Unlisted fields come from the plain defaults, not the preset.
        assert_eq!(player.move_speed, 160.0);
    }

    #[test]
    fn random_placement_parses() {
        let source = r#"(
            arena: (
                enemy_count: 5,
                placement: Random(min_x: 300.0, max_x: 700.0, seed: Some(7)),
            ),
        )"#;
        let tuning = Tuning::from_ron(source, "inline").unwrap();
        assert_eq!(tuning.arena.enemy_count, 5);
        assert_eq!(
            tuning.arena.placement,
            Placement::Random {
                min_x: 300.0,
                max_x: 700.0,
                seed: Some(7)
            }
        );
    }

    #[test]
    fn malformed_source_is_a_parse_error() {
        let err = Tuning::from_ron("(character: Ninja)", "tuning.ron").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { ref path, .. } if path == "tuning.ron"));
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let err = Tuning::from_ron("(arena: (bounds: (500.0, 100.0)))", "inline").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn missing_file_is_reported() {
        let err = Tuning::load(Path::new("does/not/exist.ron")).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }
}
