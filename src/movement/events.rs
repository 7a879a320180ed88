//! Movement domain: input messages delivered to character controllers.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// The move action changed value. Expected range is [-1, 1] per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveInput {
    pub axis: Vec2,
}

impl Message for MoveInput {}

/// The jump action changed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpInput {
    pub pressed: bool,
}

impl Message for JumpInput {}
