use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::transform::{Rotation, Transform};

/// Wireframe topology of a cuboid as pairs of corner indices.
///
/// The indices follow the corner order of [`BoundingBox::local_vertices`].
pub const CUBOID_EDGES: [[usize; 2]; 12] = [
    [0, 1],
    [1, 3],
    [3, 2],
    [2, 0],
    [0, 4],
    [4, 5],
    [5, 1],
    [5, 7],
    [7, 6],
    [6, 4],
    [6, 2],
    [7, 3],
];

/// An oriented bounding box attached to an actor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Center offset relative to the actor origin
    #[serde(default)]
    pub location: DVec3,
    /// Half extents along the box axes (length / 2, width / 2, height / 2)
    pub extent: DVec3,
    /// Orientation relative to the actor
    #[serde(default)]
    pub rotation: Rotation,
}

impl BoundingBox {
    /// Create a new axis aligned box relative to the actor.
    pub fn new(location: DVec3, extent: DVec3) -> Self {
        Self {
            location,
            extent,
            rotation: Rotation::default(),
        }
    }

    /// The 8 corners in the actor frame.
    ///
    /// Corner `k` takes the sign of `extent.x` from bit 2, `extent.y` from bit 1
    /// and `extent.z` from bit 0 of `k`, where a set bit means positive.
    pub fn local_vertices(&self) -> [DVec3; 8] {
        std::array::from_fn(|k| {
            let sign = |bit: usize| if k & bit != 0 { 1.0 } else { -1.0 };
            let corner = DVec3::new(
                sign(0b100) * self.extent.x,
                sign(0b010) * self.extent.y,
                sign(0b001) * self.extent.z,
            );
            self.rotation.rotate_vector(corner) + self.location
        })
    }

    /// The 8 corners in world coordinates given the owning actor transform.
    pub fn world_vertices(&self, actor_transform: &Transform) -> [DVec3; 8] {
        self.local_vertices()
            .map(|vertex| actor_transform.transform_point(vertex))
    }
}
