//! Enemies module - enemy entities, AI, and definitions.

mod ai;
mod components;
pub mod data;
mod plugin;
mod spawning;

pub use ai::update_enemies;
pub use components::*;
pub use data::{EnemyDefinition, EnemyRegistry, DEFAULT_ENEMY};
pub use plugin::EnemyPlugin;
pub use spawning::{enemy_bundle, enemy_positions, placement_rng, spawn_enemy};
