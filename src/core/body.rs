//! Components shared with the external physics and rendering layers.

use bevy::prelude::*;

/// Horizontal facing of an actor.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Facing for a horizontal delta; zero keeps the current facing.
    pub fn toward(dx: f32, current: Facing) -> Facing {
        if dx > 0.0 {
            Facing::Right
        } else if dx < 0.0 {
            Facing::Left
        } else {
            current
        }
    }

    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// Velocity written by the simulation and consumed by physics.
///
/// Only `x` is owned by the simulation every step; `y` is written only
/// on a jump impulse and otherwise left to gravity.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct Velocity(pub Vec2);

/// Ground contact reported by physics for this step.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroundContact(pub bool);

/// Horizontal plane position of an entity, as the simulation sees it.
pub fn plane_position(transform: &Transform) -> Vec2 {
    transform.translation.truncate()
}
