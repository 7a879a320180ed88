//! Movement domain: platformer locomotion with buffered jumps.

mod bootstrap;
mod components;
mod controller;
mod events;
mod probe;
mod systems;

pub use components::{GameLayer, Ground, GroundSensor, Inspected, Player, layer_mask};
pub use controller::{CharacterController, ControllerConfig, PlatformerController, TickStep};
pub use events::{JumpInput, MoveInput};
pub use probe::GroundProbe;

use bevy::prelude::*;

use crate::movement::bootstrap::{spawn_player, spawn_test_room};
use crate::movement::systems::{apply_input, detect_ground, read_input, step_controllers};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<MoveInput>()
            .add_message::<JumpInput>()
            .add_systems(Startup, (spawn_test_room, spawn_player))
            .add_systems(Update, (read_input, apply_input).chain())
            .add_systems(FixedUpdate, (detect_ground, step_controllers).chain());
    }
}
