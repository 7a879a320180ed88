//! Movement domain: ground detection.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GroundSensor, PlatformerController};

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    mut query: Query<(Entity, &Transform, &PlatformerController, &mut GroundSensor)>,
) {
    for (entity, transform, controller, mut sensor) in &mut query {
        let was_on_ground = sensor.grounded;

        let filter = SpatialQueryFilter::from_mask(controller.config().ground_layers)
            .with_excluded_entities([entity]);
        let position = transform.translation.truncate();

        sensor.grounded = sensor
            .probe
            .cast(&spatial_query, &sensor.shape, position, &filter);

        if sensor.grounded && !was_on_ground {
            debug!("Landed: entity={:?}, y={:.3}", entity, position.y);
        } else if !sensor.grounded && was_on_ground {
            debug!("Left ground: entity={:?}, y={:.3}", entity, position.y);
        }
    }
}
