//! Debug tooling for tuning the controller.
//!
//! Features:
//! - Toggle the ground probe overlay (F1 / backtick)
//! - Dump controller state to the log (Ctrl+L)

mod state;
mod systems;

pub use state::DebugState;

use bevy::prelude::*;

use crate::debug::systems::{draw_ground_probes, log_controller_state, toggle_probe_overlay};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, (toggle_probe_overlay, log_controller_state))
            .add_systems(
                Update,
                draw_ground_probes
                    .after(toggle_probe_overlay)
                    .run_if(|state: Res<DebugState>| state.probe_overlay),
            );
    }
}
