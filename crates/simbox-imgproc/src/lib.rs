#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// color channel reordering module.
pub mod color;

/// utilities to draw on images.
pub mod draw;

/// instance segmentation decoding and 2d box extraction.
pub mod segmentation;

/// semantic label names and colors.
pub mod semantic;
