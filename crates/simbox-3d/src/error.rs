/// An error type for the geometry module.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The field of view is not in the open interval (0, 180) degrees.
    #[error("Invalid field of view: {0} degrees")]
    InvalidFieldOfView(f64),

    /// The image has a zero dimension.
    #[error("Invalid image size: {0}x{1}")]
    InvalidImageSize(u32, u32),

    /// The point lies on the camera plane and has no image projection.
    #[error("Degenerate projection, point depth is {depth}")]
    DegenerateProjection {
        /// depth of the point in camera coordinates
        depth: f64,
    },
}
