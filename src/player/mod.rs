//! Player module - player entity, action state machine, and movement blocking.

mod actions;
mod blocking;
mod components;
mod plugin;
mod systems;

pub use blocking::blocked_directions;
pub use components::*;
pub use plugin::PlayerPlugin;
pub use systems::{player_bundle, spawn_player, update_player};
