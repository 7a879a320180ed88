//! Movement domain: fixed-tick controller integration.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{CharacterController, GroundSensor, PlatformerController, TickStep};

/// Advances every controller by one fixed tick and overrides its body velocity.
pub(crate) fn step_controllers(
    time: Res<Time>,
    gravity: Res<Gravity>,
    mut query: Query<(
        Entity,
        &mut PlatformerController,
        &GroundSensor,
        &mut LinearVelocity,
    )>,
) {
    let dt = time.delta_secs();
    let now = time.elapsed_secs();

    for (entity, mut controller, sensor, mut linear_velocity) in &mut query {
        let (velocity, report) = controller.tick(TickStep {
            dt,
            now,
            gravity: gravity.0.y,
            grounded: sensor.grounded,
        });
        linear_velocity.0 = velocity;

        if report.jumped {
            debug!("Jump: entity={:?}, t={:.3}, vy={}", entity, now, velocity.y);
        } else if report.expired_press {
            debug!("Buffered jump expired: entity={:?}, t={:.3}", entity, now);
        }
    }
}
