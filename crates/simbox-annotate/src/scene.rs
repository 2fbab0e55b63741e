use serde::{Deserialize, Serialize};
use simbox_3d::bbox3d::ActorSnapshot;
use simbox_3d::camera::CameraConfig;
use simbox_3d::transform::Transform;

/// Everything the annotator needs from the simulator for one tick.
///
/// The segmentation frame handed to the annotator must come from the same tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    /// Simulation frame number
    pub frame_id: u64,
    /// Elapsed simulation time in seconds
    #[serde(default)]
    pub timestamp: f64,
    /// Camera sensor attributes
    #[serde(default)]
    pub camera: CameraConfig,
    /// Current world pose of the camera
    pub camera_transform: Transform,
    /// The ego vehicle carrying the camera
    pub ego: ActorSnapshot,
    /// Every other actor of interest in the world
    #[serde(default)]
    pub actors: Vec<ActorSnapshot>,
}
