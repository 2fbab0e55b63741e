use glam::{DMat4, DVec3};
use serde::{Deserialize, Serialize};

use crate::bbox::CUBOID_EDGES;
use crate::camera::{CameraConfig, CameraIntrinsics, CameraSide};
use crate::error::GeometryError;
use crate::projection::{point_in_canvas, project_point};
use crate::transform::Transform;

/// A line segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSegment {
    /// x coordinate of the first endpoint
    pub x0: i64,
    /// y coordinate of the first endpoint
    pub y0: i64,
    /// x coordinate of the second endpoint
    pub x1: i64,
    /// y coordinate of the second endpoint
    pub y1: i64,
}

impl LineSegment {
    /// Build a segment from two image points, truncating towards zero.
    pub fn from_points(p0: [f64; 2], p1: [f64; 2]) -> Self {
        Self {
            x0: p0[0] as i64,
            y0: p0[1] as i64,
            x1: p1[0] as i64,
            y1: p1[1] as i64,
        }
    }
}

/// A camera snapshot holding everything needed to project a cuboid wireframe.
///
/// Both the forward and the mirrored (behind camera) intrinsics are kept so
/// each edge endpoint can be projected with the matrix matching its side of
/// the camera plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraView {
    intrinsics: CameraIntrinsics,
    intrinsics_behind: CameraIntrinsics,
    world_to_camera: DMat4,
    location: DVec3,
    forward: DVec3,
    width: u32,
    height: u32,
}

impl CameraView {
    /// Create a view from the sensor attributes and the current camera pose.
    ///
    /// # Errors
    ///
    /// Returns an error if the sensor attributes do not describe a valid pinhole camera.
    pub fn new(
        config: &CameraConfig,
        camera_transform: &Transform,
    ) -> Result<Self, GeometryError> {
        Ok(Self {
            intrinsics: CameraIntrinsics::from_config(config, CameraSide::InFront)?,
            intrinsics_behind: CameraIntrinsics::from_config(config, CameraSide::Behind)?,
            world_to_camera: camera_transform.inverse_matrix(),
            location: camera_transform.location,
            forward: camera_transform.forward_vector(),
            width: config.width,
            height: config.height,
        })
    }

    /// The camera position in world coordinates.
    pub fn location(&self) -> DVec3 {
        self.location
    }

    /// The camera forward unit vector in world coordinates.
    pub fn forward(&self) -> DVec3 {
        self.forward
    }

    /// Classify a world point against the camera plane.
    pub fn side_of(&self, point: DVec3) -> CameraSide {
        if self.forward.dot(point - self.location) > 0.0 {
            CameraSide::InFront
        } else {
            CameraSide::Behind
        }
    }

    /// Project a world point with the forward intrinsics.
    pub fn project(&self, point: DVec3) -> Result<[f64; 2], GeometryError> {
        project_point(point, &self.intrinsics, &self.world_to_camera)
    }

    /// Check whether an image point is inside the camera raster.
    pub fn in_canvas(&self, point: [f64; 2]) -> bool {
        point_in_canvas(point, self.height, self.width)
    }

    fn project_on_side(&self, point: DVec3, side: CameraSide) -> Result<[f64; 2], GeometryError> {
        match side {
            CameraSide::InFront => self.project(point),
            CameraSide::Behind => {
                project_point(point, &self.intrinsics_behind, &self.world_to_camera)
            }
        }
    }

    /// Project one edge of a cuboid.
    ///
    /// The edge is culled when neither endpoint lands in the canvas using the
    /// forward intrinsics. The cull runs before the behind camera correction,
    /// so an endpoint behind the camera is judged by its uncorrected projection.
    /// An endpoint on the camera plane has no projection and fails the cull test.
    /// Surviving endpoints that are behind the camera are then re-projected with
    /// the mirrored intrinsics, independently of each other.
    ///
    /// # Returns
    ///
    /// `None` if the edge is culled.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge survives the cull with an endpoint on the
    /// camera plane.
    pub fn project_edge(
        &self,
        start: DVec3,
        end: DVec3,
    ) -> Result<Option<LineSegment>, GeometryError> {
        let p0 = self.project(start);
        let p1 = self.project(end);

        let visible =
            |p: &Result<[f64; 2], GeometryError>| matches!(p, Ok(p) if self.in_canvas(*p));
        if !visible(&p0) && !visible(&p1) {
            return Ok(None);
        }

        let p0 = match self.side_of(start) {
            CameraSide::InFront => p0?,
            side => self.project_on_side(start, side)?,
        };
        let p1 = match self.side_of(end) {
            CameraSide::InFront => p1?,
            side => self.project_on_side(end, side)?,
        };

        Ok(Some(LineSegment::from_points(p0, p1)))
    }

    /// Project the wireframe of a cuboid given its 8 world corners.
    ///
    /// Returns between 0 and 12 segments, in [`CUBOID_EDGES`] order.
    pub fn project_cuboid(
        &self,
        vertices: &[DVec3; 8],
    ) -> Result<Vec<LineSegment>, GeometryError> {
        let mut segments = Vec::with_capacity(CUBOID_EDGES.len());
        for [i, j] in CUBOID_EDGES {
            if let Some(segment) = self.project_edge(vertices[i], vertices[j])? {
                segments.push(segment);
            }
        }
        log::trace!(
            "projected {} of {} cuboid edges",
            segments.len(),
            CUBOID_EDGES.len()
        );
        Ok(segments)
    }
}
