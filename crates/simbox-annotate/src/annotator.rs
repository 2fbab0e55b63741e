use serde::{Deserialize, Serialize};
use simbox_3d::bbox3d::{bbox_3d_in_view, cuboid_in_ego_frame, ActorSnapshot, BBox3D};
use simbox_3d::edge::CameraView;
use simbox_3d::GeometryError;
use simbox_imgproc::segmentation::{BBox2D, SegmentationFrame};
use simbox_imgproc::semantic::semantic_class;

use crate::error::AnnotateError;
use crate::record::{FrameRecord, ObjectRecord, Rect2D};
use crate::scene::SceneSnapshot;

/// Options controlling which actors get annotated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotatorConfig {
    /// Actors at this distance from the ego vehicle or further are skipped, in meters
    pub max_distance: f64,
    /// Only actors whose blueprint id contains this pattern are annotated
    pub actor_filter: String,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            max_distance: 100.0,
            actor_filter: "vehicle".to_string(),
        }
    }
}

/// The boxes computed for one actor.
#[derive(Debug, Clone, PartialEq)]
pub struct ActorBoxes {
    /// The 3d box and its projected wireframe
    pub bbox_3d: BBox3D,
    /// The segmentation rectangle, `None` when the actor is not visible
    pub bbox_2d: Option<BBox2D>,
}

/// The result of annotating one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedFrame {
    /// The exportable record
    pub record: FrameRecord,
    /// The boxes for rendering
    pub boxes: Vec<ActorBoxes>,
}

/// Annotates the actors of a scene with 2d and 3d bounding boxes.
///
/// Example:
///
/// ```
/// use simbox_annotate::{AnnotatorConfig, FrameAnnotator};
///
/// let annotator = FrameAnnotator::new(AnnotatorConfig {
///     max_distance: 50.0,
///     ..Default::default()
/// });
/// assert_eq!(annotator.config().actor_filter, "vehicle");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FrameAnnotator {
    config: AnnotatorConfig,
}

impl FrameAnnotator {
    /// Create a new annotator.
    pub fn new(config: AnnotatorConfig) -> Self {
        Self { config }
    }

    /// The annotator options.
    pub fn config(&self) -> &AnnotatorConfig {
        &self.config
    }

    /// Check whether an actor should be annotated.
    ///
    /// The ego vehicle, actors not matching the filter, actors too far from the
    /// ego vehicle and actors whose origin is not in front of the camera are rejected.
    pub fn is_candidate(
        &self,
        actor: &ActorSnapshot,
        ego: &ActorSnapshot,
        view: &CameraView,
    ) -> bool {
        if actor.id == ego.id {
            return false;
        }

        if !actor.type_id.contains(&self.config.actor_filter) {
            return false;
        }

        let location = actor.transform.location;
        if location.distance(ego.transform.location) >= self.config.max_distance {
            return false;
        }

        view.forward().dot(location - view.location()) > 0.0
    }

    /// Annotate every candidate actor of a scene.
    ///
    /// # Arguments
    ///
    /// * `scene` - The simulator state of the tick.
    /// * `segmentation` - The decoded instance segmentation of the same tick.
    ///
    /// # Errors
    ///
    /// Returns an error if the segmentation does not match the camera resolution
    /// or the camera attributes are invalid. Actors with a corner on the camera
    /// plane keep their cuboid and 2d box but get an empty wireframe.
    pub fn annotate(
        &self,
        scene: &SceneSnapshot,
        segmentation: &SegmentationFrame,
    ) -> Result<AnnotatedFrame, AnnotateError> {
        let size = segmentation.size();
        if size.width != scene.camera.width as usize || size.height != scene.camera.height as usize
        {
            return Err(AnnotateError::ResolutionMismatch {
                width: scene.camera.width,
                height: scene.camera.height,
                found_width: size.width,
                found_height: size.height,
            });
        }

        let view = CameraView::new(&scene.camera, &scene.camera_transform)?;

        let mut objects = Vec::new();
        let mut boxes = Vec::new();

        for actor in scene.actors.iter() {
            if !self.is_candidate(actor, &scene.ego, &view) {
                log::debug!("actor {} filtered out", actor.id);
                continue;
            }

            let bbox_3d = match bbox_3d_in_view(actor, &scene.ego, &view) {
                Ok(bbox) => bbox,
                Err(GeometryError::DegenerateProjection { depth }) => {
                    log::warn!(
                        "frame {}: actor {} has a corner at depth {}, wireframe dropped",
                        scene.frame_id,
                        actor.id,
                        depth
                    );
                    BBox3D {
                        actor_id: actor.id,
                        semantic_label: actor.semantic_label,
                        bbox_3d: cuboid_in_ego_frame(actor, &scene.ego),
                        projection: Vec::new(),
                    }
                }
                Err(e) => return Err(e.into()),
            };

            let bbox_2d = segmentation.bbox_2d(actor.id);
            if bbox_2d.is_none() {
                log::debug!(
                    "frame {}: actor {} not visible in the segmentation",
                    scene.frame_id,
                    actor.id
                );
            }

            let class = match semantic_class(actor.semantic_label) {
                Some(class) => class.name.to_string(),
                None => {
                    log::debug!("unknown semantic label {}", actor.semantic_label);
                    format!("label_{}", actor.semantic_label)
                }
            };

            objects.push(ObjectRecord {
                id: actor.id,
                class,
                blueprint_id: actor.type_id.clone(),
                velocity: actor.velocity.into(),
                bbox_3d: bbox_3d.bbox_3d,
                bbox_2d: bbox_2d.as_ref().map(Rect2D::from),
            });
            boxes.push(ActorBoxes { bbox_3d, bbox_2d });
        }

        log::debug!(
            "frame {}: annotated {} of {} actors",
            scene.frame_id,
            objects.len(),
            scene.actors.len()
        );

        Ok(AnnotatedFrame {
            record: FrameRecord {
                frame_id: scene.frame_id,
                timestamp: scene.timestamp,
                objects,
            },
            boxes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;
    use simbox_3d::bbox::BoundingBox;
    use simbox_3d::camera::CameraConfig;
    use simbox_3d::transform::{Rotation, Transform};

    fn actor(id: u32, type_id: &str, location: DVec3) -> ActorSnapshot {
        ActorSnapshot {
            id,
            type_id: type_id.to_string(),
            semantic_label: 14,
            transform: Transform::new(location, Rotation::default()),
            bounding_box: BoundingBox::new(DVec3::ZERO, DVec3::new(2.0, 1.0, 0.8)),
            velocity: DVec3::ZERO,
        }
    }

    #[test]
    fn test_is_candidate() -> Result<(), GeometryError> {
        let ego = actor(1, "vehicle.ego", DVec3::ZERO);
        let view = CameraView::new(
            &CameraConfig::default(),
            &Transform::new(DVec3::new(0.0, 0.0, 2.0), Rotation::default()),
        )?;
        let annotator = FrameAnnotator::default();

        let ahead = actor(2, "vehicle.a", DVec3::new(30.0, 2.0, 0.0));
        let behind = actor(3, "vehicle.a", DVec3::new(-30.0, 2.0, 0.0));
        let far = actor(4, "vehicle.a", DVec3::new(100.0, 0.0, 0.0));
        let walker = actor(5, "walker.pedestrian", DVec3::new(10.0, 0.0, 0.0));

        assert!(!annotator.is_candidate(&ego, &ego, &view));
        assert!(annotator.is_candidate(&ahead, &ego, &view));
        assert!(!annotator.is_candidate(&behind, &ego, &view));
        assert!(!annotator.is_candidate(&far, &ego, &view));
        assert!(!annotator.is_candidate(&walker, &ego, &view));

        let everything = FrameAnnotator::new(AnnotatorConfig {
            max_distance: 200.0,
            actor_filter: String::new(),
        });
        assert!(everything.is_candidate(&walker, &ego, &view));
        assert!(everything.is_candidate(&far, &ego, &view));
        Ok(())
    }

    #[test]
    fn test_config_deserialize_defaults() -> Result<(), serde_json::Error> {
        let config: AnnotatorConfig = serde_json::from_str(r#"{"max_distance": 40.0}"#)?;
        assert_eq!(config.max_distance, 40.0);
        assert_eq!(config.actor_filter, "vehicle");
        Ok(())
    }
}
