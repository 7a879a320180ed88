//! Movement domain: input sampling and delivery to controllers.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::{CharacterController, JumpInput, MoveInput, PlatformerController, Player};

const STICK_DEADZONE: f32 = 0.1;

/// Samples keyboard and gamepads, emitting a message whenever an action changes.
pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    gamepads: Query<&Gamepad>,
    mut last_axis: Local<Vec2>,
    mut moves: MessageWriter<MoveInput>,
    mut jumps: MessageWriter<JumpInput>,
) {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    // Vertical axis (carried along with the move action, unused by the controller)
    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    let mut axis = Vec2::new(x, y);
    let mut jump_pressed =
        keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyK);
    let mut jump_released =
        keyboard.just_released(KeyCode::Space) || keyboard.just_released(KeyCode::KeyK);

    for gamepad in &gamepads {
        let stick = gamepad.left_stick() + gamepad.dpad();
        if stick.length() > STICK_DEADZONE {
            axis = (axis + stick).clamp(Vec2::NEG_ONE, Vec2::ONE);
        }
        jump_pressed |= gamepad.just_pressed(GamepadButton::South);
        jump_released |= gamepad.just_released(GamepadButton::South);
    }

    if axis != *last_axis {
        *last_axis = axis;
        moves.write(MoveInput { axis });
    }
    if jump_pressed {
        jumps.write(JumpInput { pressed: true });
    } else if jump_released {
        jumps.write(JumpInput { pressed: false });
    }
}

/// Feeds this frame's input messages into every player controller.
/// Only the latest move axis survives; releases are ignored.
pub(crate) fn apply_input(
    time: Res<Time>,
    mut moves: MessageReader<MoveInput>,
    mut jumps: MessageReader<JumpInput>,
    mut query: Query<&mut PlatformerController, With<Player>>,
) {
    let latest_axis = moves.read().last().map(|input| input.axis);
    let jump_pressed = jumps
        .read()
        .fold(false, |pressed, input| pressed || input.pressed);

    if latest_axis.is_none() && !jump_pressed {
        return;
    }

    let now = time.elapsed_secs();
    for mut controller in &mut query {
        if let Some(axis) = latest_axis {
            controller.on_move(axis);
        }
        if jump_pressed {
            if controller.has_buffered_jump() {
                debug!("Jump press at t={:.3} replaces a pending press", now);
            } else {
                debug!("Jump buffered at t={:.3}", now);
            }
            controller.on_jump_pressed(now);
        }
    }
}
