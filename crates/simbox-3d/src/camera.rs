use glam::DMat3;
use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

/// Side of the camera plane a point lies on.
///
/// Points behind the camera are projected with a mirrored focal length so that
/// edges crossing the camera plane are drawn towards the correct image border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraSide {
    /// The point is strictly in front of the camera plane.
    InFront,
    /// The point is on or behind the camera plane.
    Behind,
}

/// The sensor attributes needed to build the camera intrinsics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Horizontal field of view in degrees
    pub fov: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            fov: 90.0,
        }
    }
}

/// Represents the intrinsic parameters of a pinhole camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraIntrinsics {
    /// Focal length in x direction
    pub fx: f64,
    /// Focal length in y direction
    pub fy: f64,
    /// Principal point x coordinate
    pub cx: f64,
    /// Principal point y coordinate
    pub cy: f64,
}

impl CameraIntrinsics {
    /// Create camera intrinsics from focal lengths and principal point.
    pub fn new(fx: f64, fy: f64, cx: f64, cy: f64) -> Self {
        Self { fx, fy, cx, cy }
    }

    /// Build the intrinsics of a square pixel camera from its image size and field of view.
    ///
    /// # Arguments
    ///
    /// * `width` - The image width in pixels.
    /// * `height` - The image height in pixels.
    /// * `fov_degrees` - The horizontal field of view in degrees.
    /// * `side` - Use [`CameraSide::Behind`] to get the mirrored focal length used
    ///   for points behind the camera plane.
    ///
    /// # Errors
    ///
    /// Returns an error if the image has a zero dimension or the field of view
    /// is not within (0, 180) degrees.
    ///
    /// Example:
    ///
    /// ```
    /// use simbox_3d::camera::{CameraIntrinsics, CameraSide};
    ///
    /// let k = CameraIntrinsics::from_fov(1280, 720, 90.0, CameraSide::InFront).unwrap();
    /// assert_eq!(k.cx, 640.0);
    /// assert_eq!(k.cy, 360.0);
    /// ```
    pub fn from_fov(
        width: u32,
        height: u32,
        fov_degrees: f64,
        side: CameraSide,
    ) -> Result<Self, GeometryError> {
        if width == 0 || height == 0 {
            return Err(GeometryError::InvalidImageSize(width, height));
        }

        if !fov_degrees.is_finite() || fov_degrees <= 0.0 || fov_degrees >= 180.0 {
            return Err(GeometryError::InvalidFieldOfView(fov_degrees));
        }

        let (w, h) = (width as f64, height as f64);
        let focal = w / (2.0 * (fov_degrees * std::f64::consts::PI / 360.0).tan());
        let focal = match side {
            CameraSide::InFront => focal,
            CameraSide::Behind => -focal,
        };

        Ok(Self::new(focal, focal, w / 2.0, h / 2.0))
    }

    /// Build the intrinsics from the sensor attributes.
    pub fn from_config(config: &CameraConfig, side: CameraSide) -> Result<Self, GeometryError> {
        Self::from_fov(config.width, config.height, config.fov, side)
    }

    /// Convert to 3x3 intrinsics matrix.
    pub fn to_matrix(&self) -> [[f64; 3]; 3] {
        [
            [self.fx, 0.0, self.cx],
            [0.0, self.fy, self.cy],
            [0.0, 0.0, 1.0],
        ]
    }

    /// The intrinsics matrix as a column major glam matrix.
    pub fn as_mat3(&self) -> DMat3 {
        DMat3::from_cols_array_2d(&self.to_matrix()).transpose()
    }
}
