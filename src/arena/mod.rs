//! Arena module - level setup from configuration and the enemy roster.

mod plugin;
mod roster;
mod setup;

pub use plugin::ArenaPlugin;
pub use roster::{sweep_dead_enemies, ArenaStatus};
pub use setup::spawn_arena;
