//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::ControllerConfig;
use crate::movement::probe::GroundProbe;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Player character
    Player,
}

/// Builds a single mask out of a list of layers.
pub fn layer_mask(layers: &[GameLayer]) -> LayerMask {
    LayerMask(layers.iter().fold(0, |bits, layer| bits | layer.to_bits()))
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Characters carrying this marker get their ground probe drawn by the debug overlay.
#[derive(Component, Debug)]
pub struct Inspected;

/// Ground probe geometry plus the result of the latest cast.
#[derive(Component, Debug, Clone)]
pub struct GroundSensor {
    pub probe: GroundProbe,
    pub shape: Collider,
    pub grounded: bool,
}

impl GroundSensor {
    pub fn new(probe: GroundProbe) -> Self {
        Self {
            shape: probe.shape(),
            probe,
            grounded: false,
        }
    }
}

impl Default for GroundSensor {
    fn default() -> Self {
        Self::new(GroundProbe::new(ControllerConfig::default().probe_offset))
    }
}
