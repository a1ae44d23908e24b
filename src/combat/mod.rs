//! Combat module - health, damage contract, and overlap resolution.

mod components;
mod plugin;
mod resolver;
mod systems;

pub use components::*;
pub use plugin::CombatPlugin;
pub use resolver::{knockback, resolve_attack_hit, resolve_contact, AttackHitResult};
pub use systems::{resolve_overlaps, CombatEvents};
