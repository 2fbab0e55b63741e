use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::bbox::BoundingBox;
use crate::camera::CameraConfig;
use crate::edge::{CameraView, LineSegment};
use crate::error::GeometryError;
use crate::transform::Transform;

/// The state of a simulated actor at a single frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorSnapshot {
    /// Stable actor id
    pub id: u32,
    /// Blueprint id, e.g. `vehicle.lincoln.mkz_2020`
    #[serde(default)]
    pub type_id: String,
    /// Semantic label tag
    pub semantic_label: u8,
    /// World pose of the actor
    pub transform: Transform,
    /// Bounding box relative to the actor
    pub bounding_box: BoundingBox,
    /// Linear velocity in world coordinates
    #[serde(default)]
    pub velocity: DVec3,
}

/// A 3d vector with named components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3D {
    /// x component
    pub x: f64,
    /// y component
    pub y: f64,
    /// z component
    pub z: f64,
}

impl From<DVec3> for Vector3D {
    fn from(v: DVec3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

/// Full size of a box along its own axes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Size along the forward axis
    pub length: f64,
    /// Size along the right axis
    pub width: f64,
    /// Size along the up axis
    pub height: f64,
}

impl Dimensions {
    /// Full dimensions from half extents.
    pub fn from_extent(extent: DVec3) -> Self {
        Self {
            length: extent.x * 2.0,
            width: extent.y * 2.0,
            height: extent.z * 2.0,
        }
    }
}

/// An actor cuboid expressed in the ego vehicle frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cuboid3D {
    /// Box center in the ego frame
    pub center: Vector3D,
    /// Box size
    pub dimensions: Dimensions,
    /// Yaw of the actor relative to the ego vehicle, in radians
    pub rotation_yaw: f64,
}

/// The 3d bounding box of an actor and its projected wireframe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BBox3D {
    /// Id of the actor owning the box
    pub actor_id: u32,
    /// Semantic label of the actor
    pub semantic_label: u8,
    /// Ego relative cuboid
    pub bbox_3d: Cuboid3D,
    /// Visible wireframe edges in pixel coordinates
    pub projection: Vec<LineSegment>,
}

/// Compute the 3d bounding box of an actor relative to the ego vehicle.
///
/// # Arguments
///
/// * `actor` - The actor to box.
/// * `ego` - The reference vehicle.
/// * `camera` - The camera sensor attributes.
/// * `camera_transform` - The current world pose of the camera.
///
/// # Errors
///
/// Returns an error if the camera attributes are invalid or a box corner lies
/// on the camera plane.
pub fn bbox_3d_for_actor(
    actor: &ActorSnapshot,
    ego: &ActorSnapshot,
    camera: &CameraConfig,
    camera_transform: &Transform,
) -> Result<BBox3D, GeometryError> {
    let view = CameraView::new(camera, camera_transform)?;
    bbox_3d_in_view(actor, ego, &view)
}

/// Same as [`bbox_3d_for_actor`] reusing a camera view built once per frame.
pub fn bbox_3d_in_view(
    actor: &ActorSnapshot,
    ego: &ActorSnapshot,
    view: &CameraView,
) -> Result<BBox3D, GeometryError> {
    let vertices = actor.bounding_box.world_vertices(&actor.transform);

    Ok(BBox3D {
        actor_id: actor.id,
        semantic_label: actor.semantic_label,
        bbox_3d: cuboid_in_ego_frame(actor, ego),
        projection: view.project_cuboid(&vertices)?,
    })
}

/// The cuboid of an actor expressed in the ego vehicle frame.
///
/// Does not depend on the camera, so it is defined even when the wireframe
/// cannot be projected.
pub fn cuboid_in_ego_frame(actor: &ActorSnapshot, ego: &ActorSnapshot) -> Cuboid3D {
    // NOTE: the box offset is added without the actor rotation
    let box_location = actor.transform.location + actor.bounding_box.location;
    let center = ego.transform.inverse_transform_point(box_location);

    let rotation_yaw = (actor.transform.rotation.yaw - ego.transform.rotation.yaw).to_radians();

    Cuboid3D {
        center: center.into(),
        dimensions: Dimensions::from_extent(actor.bounding_box.extent),
        rotation_yaw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::Rotation;
    use approx::assert_relative_eq;

    fn vehicle(id: u32, location: DVec3, yaw: f64) -> ActorSnapshot {
        ActorSnapshot {
            id,
            type_id: "vehicle.test.sedan".to_string(),
            semantic_label: 14,
            transform: Transform::new(location, Rotation::new(0.0, yaw, 0.0)),
            bounding_box: BoundingBox::new(DVec3::new(0.0, 0.0, 0.8), DVec3::new(2.4, 1.0, 0.8)),
            velocity: DVec3::ZERO,
        }
    }

    #[test]
    fn test_bbox_3d_ego_at_origin() -> Result<(), GeometryError> {
        let ego = vehicle(1, DVec3::ZERO, 0.0);
        let npc = vehicle(42, DVec3::new(20.0, 3.0, 0.0), 30.0);
        let camera = Transform::new(DVec3::new(0.0, 0.0, 2.0), Rotation::default());

        let bbox = bbox_3d_for_actor(&npc, &ego, &CameraConfig::default(), &camera)?;

        assert_eq!(bbox.actor_id, 42);
        assert_eq!(bbox.semantic_label, 14);
        assert_relative_eq!(bbox.bbox_3d.center.x, 20.0, epsilon = 1e-9);
        assert_relative_eq!(bbox.bbox_3d.center.y, 3.0, epsilon = 1e-9);
        assert_relative_eq!(bbox.bbox_3d.center.z, 0.8, epsilon = 1e-9);
        assert_eq!(
            bbox.bbox_3d.dimensions,
            Dimensions {
                length: 4.8,
                width: 2.0,
                height: 1.6
            }
        );
        assert_relative_eq!(bbox.bbox_3d.rotation_yaw, 30f64.to_radians());
        assert_eq!(bbox.projection.len(), 12);
        Ok(())
    }

    #[test]
    fn test_bbox_3d_rotated_ego() -> Result<(), GeometryError> {
        let ego = vehicle(1, DVec3::new(5.0, 0.0, 0.0), 90.0);
        let npc = vehicle(7, DVec3::new(20.0, 3.0, 0.0), 45.0);
        let camera = Transform::new(DVec3::new(5.0, 0.0, 2.0), Rotation::new(0.0, 90.0, 0.0));

        let bbox = bbox_3d_for_actor(&npc, &ego, &CameraConfig::default(), &camera)?;

        assert_relative_eq!(bbox.bbox_3d.center.x, 3.0, epsilon = 1e-9);
        assert_relative_eq!(bbox.bbox_3d.center.y, -15.0, epsilon = 1e-9);
        assert_relative_eq!(bbox.bbox_3d.center.z, 0.8, epsilon = 1e-9);
        assert_relative_eq!(bbox.bbox_3d.rotation_yaw, (-45f64).to_radians());
        // the camera looks along +y, the actor is off to its right and out of view
        assert!(bbox.projection.is_empty());
        Ok(())
    }

    #[test]
    fn test_bbox_3d_idempotent() -> Result<(), GeometryError> {
        let ego = vehicle(1, DVec3::new(-3.0, 1.0, 0.2), 12.0);
        let npc = vehicle(9, DVec3::new(14.0, 2.5, 0.1), -80.0);
        let camera = Transform::new(DVec3::new(-3.0, 1.0, 2.2), Rotation::new(-5.0, 12.0, 0.0));
        let config = CameraConfig {
            width: 800,
            height: 600,
            fov: 110.0,
        };

        let first = bbox_3d_for_actor(&npc, &ego, &config, &camera)?;
        let second = bbox_3d_for_actor(&npc, &ego, &config, &camera)?;
        assert_eq!(first, second);
        assert_eq!(
            first.bbox_3d.center.x.to_bits(),
            second.bbox_3d.center.x.to_bits()
        );
        Ok(())
    }

    #[test]
    fn test_bbox_3d_corner_on_camera_plane() -> Result<(), GeometryError> {
        let ego = vehicle(1, DVec3::ZERO, 0.0);
        // the rear corners sit exactly on the camera plane
        let npc = vehicle(3, DVec3::new(2.4, 0.0, 0.0), 0.0);
        let camera = Transform::new(DVec3::new(0.0, 0.0, 2.0), Rotation::default());

        let res = bbox_3d_for_actor(&npc, &ego, &CameraConfig::default(), &camera);
        assert!(matches!(
            res,
            Err(GeometryError::DegenerateProjection { .. })
        ));

        let cuboid = cuboid_in_ego_frame(&npc, &ego);
        assert_relative_eq!(cuboid.center.x, 2.4, epsilon = 1e-9);
        assert_relative_eq!(cuboid.center.z, 0.8, epsilon = 1e-9);
        assert_eq!(cuboid.dimensions.length, 4.8);
        Ok(())
    }

    #[test]
    fn test_bbox_3d_invalid_camera() {
        let ego = vehicle(1, DVec3::ZERO, 0.0);
        let npc = vehicle(2, DVec3::new(10.0, 0.0, 0.0), 0.0);
        let config = CameraConfig {
            width: 1280,
            height: 720,
            fov: 0.0,
        };
        let res = bbox_3d_for_actor(&npc, &ego, &config, &Transform::default());
        assert_eq!(res, Err(GeometryError::InvalidFieldOfView(0.0)));
    }

    #[test]
    fn test_actor_deserialize() -> Result<(), serde_json::Error> {
        let actor: ActorSnapshot = serde_json::from_str(
            r#"{
                "id": 24,
                "type_id": "vehicle.audi.tt",
                "semantic_label": 14,
                "transform": {"location": [1.0, 2.0, 0.0], "rotation": {"yaw": -90.0}},
                "bounding_box": {"location": [0.0, 0.0, 0.7], "extent": [2.0, 0.9, 0.7]}
            }"#,
        )?;
        assert_eq!(actor.id, 24);
        assert_eq!(actor.velocity, DVec3::ZERO);
        assert_eq!(actor.bounding_box.extent, DVec3::new(2.0, 0.9, 0.7));
        Ok(())
    }
}
