//! Movement domain: box-cast ground probe geometry.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Half extents of the probe box: a thin slab about as wide as the character's feet.
pub const PROBE_HALF_EXTENTS: Vec2 = Vec2::new(0.4, 0.03);

/// How far below its origin the probe box is swept.
pub const PROBE_MAX_DISTANCE: f32 = 0.2;

/// A downward box sweep starting `offset` below the character origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundProbe {
    pub offset: f32,
    pub half_extents: Vec2,
    pub max_distance: f32,
}

impl GroundProbe {
    pub fn new(offset: f32) -> Self {
        Self {
            offset,
            half_extents: PROBE_HALF_EXTENTS,
            max_distance: PROBE_MAX_DISTANCE,
        }
    }

    /// Center of the probe box before the sweep.
    pub fn origin(&self, position: Vec2) -> Vec2 {
        position + Vec2::NEG_Y * self.offset
    }

    /// Center of the probe box at the end of the sweep.
    pub fn end(&self, position: Vec2) -> Vec2 {
        self.origin(position) + Vec2::NEG_Y * self.max_distance
    }

    /// Full size of the probe box.
    pub fn size(&self) -> Vec2 {
        self.half_extents * 2.0
    }

    pub fn shape(&self) -> Collider {
        let size = self.size();
        Collider::rectangle(size.x, size.y)
    }

    /// Sweeps `shape` downward from the probe origin. Only hit/no-hit is reported.
    pub fn cast(
        &self,
        spatial_query: &SpatialQuery,
        shape: &Collider,
        position: Vec2,
        filter: &SpatialQueryFilter,
    ) -> bool {
        spatial_query
            .cast_shape(
                shape,
                self.origin(position),
                0.0,
                Dir2::NEG_Y,
                &ShapeCastConfig::from_max_distance(self.max_distance),
                filter,
            )
            .is_some()
    }
}
