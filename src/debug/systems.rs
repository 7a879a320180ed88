//! Debug domain: hotkeys and ground probe gizmos.

use bevy::color::palettes::css::{GREEN, RED, YELLOW};
use bevy::prelude::*;

use crate::debug::state::DebugState;
use crate::movement::{GroundSensor, Inspected, PlatformerController, Player};

/// Toggle the probe overlay with F1 or backtick key
pub(crate) fn toggle_probe_overlay(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
) {
    if keyboard.just_pressed(KeyCode::F1) || keyboard.just_pressed(KeyCode::Backquote) {
        let visible = debug_state.toggle_probe_overlay();
        info!("[DEBUG] Probe overlay {}", if visible { "ON" } else { "OFF" });
    }
}

/// Ctrl+L: dump controller state of every player to the log
pub(crate) fn log_controller_state(
    keyboard: Res<ButtonInput<KeyCode>>,
    query: Query<(&Transform, &PlatformerController, &GroundSensor), With<Player>>,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if !ctrl || !keyboard.just_pressed(KeyCode::KeyL) {
        return;
    }

    for (transform, controller, sensor) in &query {
        let state = controller.state();
        info!(
            "[DEBUG] pos={:?} axis={:?} vy={:.3} buffered_jump_at={:?} grounded={}",
            transform.translation.truncate(),
            state.move_axis,
            state.vertical_velocity,
            state.buffered_jump_at,
            sensor.grounded
        );
    }
}

/// Draw the probe start box, end box and sweep line.
pub(crate) fn draw_ground_probes(
    mut gizmos: Gizmos,
    query: Query<(&Transform, &GroundSensor), With<Inspected>>,
) {
    for (transform, sensor) in &query {
        let position = transform.translation.truncate();
        let probe = &sensor.probe;
        let origin = probe.origin(position);
        let end = probe.end(position);

        gizmos.rect_2d(Isometry2d::from_translation(origin), probe.size(), GREEN);
        gizmos.rect_2d(Isometry2d::from_translation(end), probe.size(), RED);
        gizmos.line_2d(origin, end, YELLOW);
    }
}
