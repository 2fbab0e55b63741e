#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

mod annotator;
pub use annotator::{ActorBoxes, AnnotatedFrame, AnnotatorConfig, FrameAnnotator};

/// Error types for the annotation pipeline.
pub mod error;
pub use error::AnnotateError;

/// Serializable per frame annotation records.
pub mod record;

/// Simulator state captured at a single tick.
pub mod scene;

/// Overlay rendering of the annotated boxes.
pub mod visualize;
