#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
pub mod error;

/// JSON reading and writing of serializable records.
pub mod json;

/// PNG image encoding and decoding.
pub mod png;

pub use crate::error::IoError;
