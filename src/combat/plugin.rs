//! Combat plugin - overlap resolution.

use bevy::prelude::*;

use super::systems;
use crate::core::BrawlerSet;

/// Combat plugin - resolves overlaps once movement and AI have run.
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, systems::resolve_overlaps.in_set(BrawlerSet::Resolve));
    }
}
