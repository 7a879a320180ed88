//! Movement domain: engine-agnostic platformer controller.
//!
//! Everything in here is plain math over [`ControllerConfig`] and
//! [`ControllerState`]. The Bevy systems in `systems/` feed it input and
//! ground contact and copy the resulting velocity onto the rigid body.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::components::{GameLayer, GroundSensor};

/// Tunables for one character. Fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerConfig {
    /// Horizontal speed at full stick deflection.
    pub move_speed: f32,
    /// Vertical speed set when a jump fires.
    pub jump_force: f32,
    /// Multiplier applied to world gravity.
    pub gravity_scale: f32,
    /// Distance below the character origin where the ground probe starts.
    pub probe_offset: f32,
    /// How long a jump press stays valid while waiting for ground contact.
    pub jump_buffer_duration: f32,
    /// Layers the ground probe can hit.
    pub ground_layers: LayerMask,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            jump_force: 7.0,
            gravity_scale: 3.0,
            probe_offset: 0.45,
            jump_buffer_duration: 0.15,
            ground_layers: LayerMask::from(GameLayer::Ground),
        }
    }
}

impl ControllerConfig {
    /// Peak height of a jump from rest under the given (negative) gravity.
    pub fn jump_height(&self, gravity: f32) -> f32 {
        let g = -gravity * self.gravity_scale;
        if g <= 0.0 {
            return f32::INFINITY;
        }
        self.jump_force * self.jump_force / (2.0 * g)
    }
}

/// Live simulation state of one character.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControllerState {
    /// Latest move input. Only `x` drives motion.
    pub move_axis: Vec2,
    /// Integrated vertical speed. Positive is up.
    pub vertical_velocity: f32,
    /// Game time of the pending jump press, if any.
    pub buffered_jump_at: Option<f32>,
}

/// Inputs for a single fixed tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickStep {
    /// Tick duration in seconds.
    pub dt: f32,
    /// Game time at this tick.
    pub now: f32,
    /// Vertical component of world gravity (negative is down).
    pub gravity: f32,
    /// Result of this tick's ground probe.
    pub grounded: bool,
}

/// What happened during a tick, for logging and debug overlays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub jumped: bool,
    pub expired_press: bool,
}

/// The seam between host input/physics and the controller math.
pub trait CharacterController {
    /// Overwrites the stored move axis.
    fn on_move(&mut self, axis: Vec2);

    /// Records a jump press made at game time `time`.
    fn on_jump_pressed(&mut self, time: f32);

    /// Advances one fixed tick and returns the velocity to write onto the body.
    fn tick(&mut self, step: TickStep) -> (Vec2, TickReport);
}

/// A character driven by [`CharacterController`]. Spawning one without a body
/// gives it a dynamic, rotation-locked rigid body with avian gravity disabled.
#[derive(Component, Debug, Clone, Default)]
#[require(
    RigidBody::Dynamic,
    LockedAxes::ROTATION_LOCKED,
    GravityScale(0.0),
    LinearVelocity,
    GroundSensor
)]
pub struct PlatformerController {
    config: ControllerConfig,
    state: ControllerState,
}

impl PlatformerController {
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            config,
            state: ControllerState::default(),
        }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    pub fn has_buffered_jump(&self) -> bool {
        self.state.buffered_jump_at.is_some()
    }
}

impl CharacterController for PlatformerController {
    fn on_move(&mut self, axis: Vec2) {
        self.state.move_axis = axis;
    }

    fn on_jump_pressed(&mut self, time: f32) {
        self.state.buffered_jump_at = Some(time);
    }

    fn tick(&mut self, step: TickStep) -> (Vec2, TickReport) {
        let config = &self.config;
        let state = &mut self.state;

        state.vertical_velocity += step.gravity * config.gravity_scale * step.dt;

        let mut report = TickReport::default();

        // Rising characters never touch the buffer, so a press made on the way up
        // waits for the landing instead of firing a second jump mid-air.
        if step.grounded && state.vertical_velocity < 0.0 {
            match state.buffered_jump_at.take() {
                Some(pressed_at) if step.now - pressed_at <= config.jump_buffer_duration => {
                    state.vertical_velocity = config.jump_force;
                    report.jumped = true;
                }
                pressed_at => {
                    state.vertical_velocity = 0.0;
                    report.expired_press = pressed_at.is_some();
                }
            }
        }

        let velocity = Vec2::new(
            state.move_axis.x * config.move_speed,
            state.vertical_velocity,
        );
        (velocity, report)
    }
}
