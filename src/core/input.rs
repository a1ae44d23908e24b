//! The normalized input snapshot the simulation reads once per step.

use bevy::prelude::*;

/// Boolean intents merged from every input device upstream.
///
/// The simulation never knows which device raised a flag. An all-false
/// vector is valid and simply produces no movement and no actions.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputVector {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub jump: bool,
    pub punch: bool,
    pub strong_attack: bool,
    pub special_item: bool,
}

impl InputVector {
    /// Combine two sources; a flag is set if either source sets it.
    pub fn merge(self, other: InputVector) -> InputVector {
        InputVector {
            left: self.left || other.left,
            right: self.right || other.right,
            up: self.up || other.up,
            down: self.down || other.down,
            jump: self.jump || other.jump,
            punch: self.punch || other.punch,
            strong_attack: self.strong_attack || other.strong_attack,
            special_item: self.special_item || other.special_item,
        }
    }

    pub fn wants_jump(&self) -> bool {
        self.up || self.jump
    }

    /// Horizontal direction requested: -1, 0 or +1. Left wins if both
    /// are held.
    pub fn horizontal(&self) -> i8 {
        if self.left {
            -1
        } else if self.right {
            1
        } else {
            0
        }
    }
}
