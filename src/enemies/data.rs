//! Enemy data loading from RON files.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::components::EnemyStats;
use crate::config::{parse_ron, read_file, ConfigError, DataDirectory};

/// Name of the enemy type that is always available.
pub const DEFAULT_ENEMY: &str = "zombie";

/// Enemy definition loaded from RON file.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct EnemyDefinition {
    pub name: String,
    #[serde(default)]
    pub stats: EnemyStats,
}

impl EnemyDefinition {
    pub fn from_ron(source: &str, origin: &str) -> Result<Self, ConfigError> {
        let definition: EnemyDefinition = parse_ron(source, origin)?;
        definition.stats.validate().map_err(|e| match e {
            ConfigError::Invalid(details) => ConfigError::Invalid(format!("{origin}: {details}")),
            other => other,
        })?;
        Ok(definition)
    }
}

impl EnemyStats {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_health <= 0 {
            return Err(ConfigError::Invalid(format!(
                "max_health must be positive, got {}",
                self.max_health
            )));
        }
        if self.attack_range > self.chase_range {
            return Err(ConfigError::Invalid(format!(
                "attack_range {} exceeds chase_range {}",
                self.attack_range, self.chase_range
            )));
        }
        if self.stop_distance > self.attack_range {
            return Err(ConfigError::Invalid(format!(
                "stop_distance {} exceeds attack_range {}",
                self.stop_distance, self.attack_range
            )));
        }
        Ok(())
    }
}

/// Resource holding all loaded enemy definitions.
#[derive(Resource)]
pub struct EnemyRegistry {
    pub definitions: HashMap<String, EnemyDefinition>,
}

impl Default for EnemyRegistry {
    fn default() -> Self {
        let mut definitions = HashMap::new();
        definitions.insert(
            DEFAULT_ENEMY.to_string(),
            EnemyDefinition {
                name: "Zombie".to_string(),
                stats: EnemyStats::default(),
            },
        );
        Self { definitions }
    }
}

impl EnemyRegistry {
    /// Get an enemy definition by type name.
    pub fn get(&self, enemy_type: &str) -> Option<&EnemyDefinition> {
        self.definitions.get(enemy_type)
    }

    /// Stats for a type name, falling back to the defaults.
    pub fn stats_for(&self, enemy_type: &str) -> EnemyStats {
        match self.get(enemy_type) {
            Some(definition) => definition.stats.clone(),
            None => {
                warn!("Unknown enemy type '{}', using default stats", enemy_type);
                EnemyStats::default()
            }
        }
    }

    /// Load every `*.ron` in `dir`, keyed by file stem. Broken files are
    /// logged and skipped.
    pub fn load_dir(&mut self, dir: &Path) -> usize {
        let Ok(entries) = fs::read_dir(dir) else {
            warn!("Failed to read enemy definitions directory {:?}", dir);
            return 0;
        };

        let mut loaded = 0;
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.extension().is_some_and(|ext| ext == "ron") {
                continue;
            }

            let enemy_type = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("unknown")
                .to_string();

            let result = read_file(&path)
                .and_then(|contents| EnemyDefinition::from_ron(&contents, &path.display().to_string()));
            match result {
                Ok(definition) => {
                    info!("Loaded enemy definition: {} ({})", definition.name, enemy_type);
                    self.definitions.insert(enemy_type, definition);
                    loaded += 1;
                }
                Err(e) => error!("Skipping enemy definition: {}", e),
            }
        }
        loaded
    }
}

/// Load all enemy definitions from `<data dir>/enemies/`.
pub fn load_enemy_definitions(data_dir: Res<DataDirectory>, mut registry: ResMut<EnemyRegistry>) {
    let Some(root) = &data_dir.0 else {
        return;
    };

    let enemies_dir = root.join("enemies");
    if !enemies_dir.exists() {
        warn!("Enemy definitions directory not found: {:?}", enemies_dir);
        return;
    }

    let loaded = registry.load_dir(&enemies_dir);
    info!("Loaded {} enemy definitions", loaded);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn definition_parses_with_partial_stats() {
        let source = r#"(
            name: "Brute",
            stats: (max_health: 5, speed: 35.0, metric: Horizontal),
        )"#;
        let definition = EnemyDefinition::from_ron(source, "brute.ron").unwrap();
        assert_eq!(definition.stats.max_health, 5);
        assert_eq!(definition.stats.attack_range, 50.0);
    }

    #[test]
    fn stop_distance_beyond_attack_range_is_invalid() {
        let source = r#"(name: "Odd", stats: (attack_range: 40.0, stop_distance: 60.0))"#;
        let err = EnemyDefinition::from_ron(source, "odd.ron").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref msg) if msg.starts_with("odd.ron")));
    }

    #[test]
    fn registry_always_knows_the_default_enemy() {
        let registry = EnemyRegistry::default();
        assert_eq!(registry.stats_for(DEFAULT_ENEMY), EnemyStats::default());
        assert_eq!(registry.stats_for("dragon"), EnemyStats::default());
    }
}
