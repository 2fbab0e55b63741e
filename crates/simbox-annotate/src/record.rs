use serde::{Deserialize, Serialize};
use simbox_3d::bbox3d::{Cuboid3D, Vector3D};
use simbox_imgproc::segmentation::BBox2D;

/// A 2d rectangle with inclusive pixel bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect2D {
    /// Minimum column
    pub xmin: usize,
    /// Minimum row
    pub ymin: usize,
    /// Maximum column
    pub xmax: usize,
    /// Maximum row
    pub ymax: usize,
}

impl From<&BBox2D> for Rect2D {
    fn from(bbox: &BBox2D) -> Self {
        Self {
            xmin: bbox.xmin,
            ymin: bbox.ymin,
            xmax: bbox.xmax,
            ymax: bbox.ymax,
        }
    }
}

/// The exported annotation of one actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectRecord {
    /// Actor id
    pub id: u32,
    /// Semantic class name
    pub class: String,
    /// Blueprint id of the actor
    pub blueprint_id: String,
    /// Linear velocity in world coordinates
    pub velocity: Vector3D,
    /// Ego relative cuboid
    pub bbox_3d: Cuboid3D,
    /// Image rectangle, `None` when the actor is not visible in the segmentation
    pub bbox_2d: Option<Rect2D>,
}

/// The exported annotation of one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameRecord {
    /// Simulation frame number
    pub frame_id: u64,
    /// Elapsed simulation time in seconds
    pub timestamp: f64,
    /// Annotated actors
    pub objects: Vec<ObjectRecord>,
}
