//! Data definitions for the controller settings file.
//!
//! These structs mirror the structure in assets/data/controller.ron and are
//! used for deserialization.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::{ControllerConfig, GameLayer, layer_mask};

// ============================================================================
// Top level (controller.ron)
// ============================================================================

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ControllerSettings {
    pub schema_version: u32,
    pub controller: ControllerDef,
    pub world: WorldDef,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            schema_version: 1,
            controller: ControllerDef::default(),
            world: WorldDef::default(),
        }
    }
}

// ============================================================================
// Character tunables
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ControllerDef {
    pub move_speed: f32,
    pub jump_force: f32,
    pub gravity_scale: f32,
    pub probe_offset: f32,
    pub jump_buffer_duration: f32,
    pub ground_layers: Vec<GameLayer>,
}

impl Default for ControllerDef {
    fn default() -> Self {
        let config = ControllerConfig::default();
        Self {
            move_speed: config.move_speed,
            jump_force: config.jump_force,
            gravity_scale: config.gravity_scale,
            probe_offset: config.probe_offset,
            jump_buffer_duration: config.jump_buffer_duration,
            ground_layers: vec![GameLayer::Ground],
        }
    }
}

impl ControllerDef {
    pub fn to_config(&self) -> ControllerConfig {
        ControllerConfig {
            move_speed: self.move_speed,
            jump_force: self.jump_force,
            gravity_scale: self.gravity_scale,
            probe_offset: self.probe_offset,
            jump_buffer_duration: self.jump_buffer_duration,
            ground_layers: layer_mask(&self.ground_layers),
        }
    }
}

// ============================================================================
// World settings
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WorldDef {
    /// World gravity vector, in units per second squared.
    pub gravity: [f32; 2],
    /// Rate of the fixed simulation tick.
    pub fixed_timestep_hz: f64,
}

impl Default for WorldDef {
    fn default() -> Self {
        Self {
            gravity: [0.0, -9.81],
            fixed_timestep_hz: 50.0,
        }
    }
}

impl WorldDef {
    pub fn gravity(&self) -> Vec2 {
        Vec2::from_array(self.gravity)
    }
}
