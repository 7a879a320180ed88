//! Content domain: controller settings loaded from RON at startup.

mod data;
mod loader;
#[cfg(test)]
mod tests;
mod validation;

pub use data::{ControllerSettings, WorldDef};
pub use loader::load_settings;
pub use validation::validate_settings;

use avian2d::prelude::Gravity;
use bevy::prelude::*;
use std::path::Path;

pub const SETTINGS_PATH: &str = "assets/data/controller.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let settings = match load_settings(Path::new(SETTINGS_PATH)) {
            Ok(settings) => {
                info!("Loaded controller settings from {}", SETTINGS_PATH);
                settings
            }
            Err(e) => {
                warn!("{}, using default controller settings", e);
                ControllerSettings::default()
            }
        };

        let issues = validate_settings(&settings);
        for issue in &issues {
            warn!("Controller settings: {}", issue);
        }

        let tick_hz = if settings.world.fixed_timestep_hz > 0.0 {
            settings.world.fixed_timestep_hz
        } else {
            WorldDef::default().fixed_timestep_hz
        };

        app.insert_resource(Gravity(settings.world.gravity()))
            .insert_resource(Time::<Fixed>::from_hz(tick_hz))
            .insert_resource(settings);
    }
}
