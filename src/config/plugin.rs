//! Config plugin - loads tuning before any system runs.

use bevy::prelude::*;
use std::path::PathBuf;

use super::tuning::{ArenaLayout, PlayerTuning, Tuning};

/// Directory holding `tuning.ron` and `enemies/*.ron`, if any.
#[derive(Resource, Debug, Clone, Default)]
pub struct DataDirectory(pub Option<PathBuf>);

/// Config plugin - inserts [`PlayerTuning`] and [`ArenaLayout`].
///
/// Without a data directory the built-in defaults are used. A missing or
/// broken file is logged and also falls back to the defaults.
#[derive(Default)]
pub struct ConfigPlugin {
    pub data_dir: Option<PathBuf>,
}

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        let tuning = match &self.data_dir {
            Some(dir) => load_or_default(dir.join("tuning.ron")),
            None => Tuning::default(),
        };

        app.insert_resource(DataDirectory(self.data_dir.clone()));

        // Keep tuning a test or driver inserted before the plugin.
        if !app.world().contains_resource::<PlayerTuning>() {
            app.insert_resource(tuning.player_tuning());
        }
        if !app.world().contains_resource::<ArenaLayout>() {
            app.insert_resource(tuning.arena);
        }
    }
}

fn load_or_default(path: PathBuf) -> Tuning {
    match Tuning::load(&path) {
        Ok(tuning) => {
            info!("Loaded tuning from {:?} ({:?})", path, tuning.character);
            tuning
        }
        Err(e) => {
            warn!("Using default tuning: {}", e);
            Tuning::default()
        }
    }
}
