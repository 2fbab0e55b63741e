#![deny(missing_docs)]
//! Image types shared by the geometry, processing and io crates.

/// image representation for annotation purposes.
pub mod image;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
