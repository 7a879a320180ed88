//! Debug domain: state for debug tooling.

use bevy::prelude::*;

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether ground probes of inspected characters are drawn
    pub probe_overlay: bool,
}

impl DebugState {
    pub fn toggle_probe_overlay(&mut self) -> bool {
        self.probe_overlay = !self.probe_overlay;
        self.probe_overlay
    }
}
