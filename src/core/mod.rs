//! Core module - clock, input, shared components, events and step ordering.
//!
//! This module provides the foundation that all other simulation systems build upon.

mod body;
mod clock;
mod events;
mod input;
mod plugin;

pub use body::*;
pub use clock::*;
pub use events::*;
pub use input::*;
pub use plugin::{BrawlerSet, CorePlugin};
