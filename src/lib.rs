//! Brawler - combat and AI core of a 2D side-scrolling brawler in Bevy.
//!
//! A player fights waves of melee enemies across a bounded arena. This
//! crate owns the rules only: rendering, physics broad-phase, device
//! input and UI are external collaborators that talk to it through
//! components, resources and events.
//!
//! # Architecture
//!
//! The simulation is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game clock, input snapshot, shared components, events, step ordering
//! - **Config**: Tuning values and character presets loaded from RON
//! - **Player**: Action state machine, combos, cooldowns, movement blocking
//! - **Enemies**: Zone-driven AI, enemy definitions, spawning
//! - **Combat**: Health, damage contract, overlap resolution
//! - **Arena**: Level setup and the mark-and-sweep enemy roster
//!
//! # Step
//!
//! Each frame runs [`core::BrawlerSet`] in order: clock, player, enemies,
//! the external physics slot, overlap resolution, roster sweep.

pub mod arena;
pub mod combat;
pub mod config;
pub mod core;
pub mod enemies;
pub mod player;

use bevy::prelude::*;
use std::path::PathBuf;

/// Main simulation plugin that adds all sub-plugins.
#[derive(Default)]
pub struct BrawlerPlugin {
    /// Directory with `tuning.ron` and `enemies/`; built-in defaults if `None`
    pub data_dir: Option<PathBuf>,
    /// Leave actor placement to the driver instead of the arena layout
    pub manual_spawning: bool,
}

impl BrawlerPlugin {
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: Some(dir.into()),
            ..default()
        }
    }
}

impl Plugin for BrawlerPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Tuning data
            .add_plugins(config::ConfigPlugin {
                data_dir: self.data_dir.clone(),
            })

            // Player systems
            .add_plugins(player::PlayerPlugin)

            // Enemy systems
            .add_plugins(enemies::EnemyPlugin)

            // Combat systems
            .add_plugins(combat::CombatPlugin)

            // Arena setup and roster
            .add_plugins(arena::ArenaPlugin {
                spawn_on_startup: !self.manual_spawning,
            });
    }
}
