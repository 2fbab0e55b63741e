/// An error type for the annotation pipeline.
#[derive(thiserror::Error, Debug)]
pub enum AnnotateError {
    /// The segmentation frame does not match the camera resolution.
    #[error("Segmentation frame is {found_width}x{found_height}, camera is {width}x{height}")]
    ResolutionMismatch {
        /// camera width
        width: u32,
        /// camera height
        height: u32,
        /// segmentation width
        found_width: usize,
        /// segmentation height
        found_height: usize,
    },

    /// Error from the geometry module.
    #[error(transparent)]
    Geometry(#[from] simbox_3d::GeometryError),

    /// Error from the image module.
    #[error(transparent)]
    Image(#[from] simbox_image::ImageError),
}
