#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Actor snapshots and ego-relative 3d bounding boxes.
pub mod bbox3d;

/// Oriented bounding boxes and the cuboid wireframe topology.
pub mod bbox;

/// Pinhole camera intrinsics built from sensor attributes.
pub mod camera;

/// Per-edge projection of cuboids into the image plane.
pub mod edge;

/// Error types for the geometry module.
pub mod error;

/// World to image projection.
pub mod projection;

/// Rigid transforms following the simulator conventions.
pub mod transform;

pub use crate::error::GeometryError;
