//! Config module - tuning data, character presets and load errors.

mod error;
mod plugin;
mod tuning;

pub use error::ConfigError;
pub use plugin::{ConfigPlugin, DataDirectory};
pub use tuning::*;
pub(crate) use tuning::{parse_ron, read_file};
