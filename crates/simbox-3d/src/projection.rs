use glam::{DMat4, DVec3};

use crate::camera::CameraIntrinsics;
use crate::error::GeometryError;

/// Points closer than this to the camera plane have no defined projection.
pub const DEPTH_EPSILON: f64 = 1e-9;

/// Project a 3d world point into the image plane.
///
/// The point is first moved to the camera frame with `world_to_camera`, then
/// the simulator axes (x forward, y right, z up) are remapped to the camera
/// axes (x right, y down, z forward) before applying the intrinsics.
///
/// # Arguments
///
/// * `point` - The point in world coordinates.
/// * `intrinsics` - The camera intrinsics.
/// * `world_to_camera` - The world to camera (extrinsic) matrix.
///
/// # Returns
///
/// The `(u, v)` image coordinates. No clamping is applied, use [`point_in_canvas`]
/// to test visibility.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateProjection`] when the point lies on the camera plane.
///
/// Example:
///
/// ```
/// use glam::{DMat4, DVec3};
/// use simbox_3d::camera::{CameraIntrinsics, CameraSide};
/// use simbox_3d::projection::project_point;
///
/// let k = CameraIntrinsics::from_fov(1280, 720, 90.0, CameraSide::InFront).unwrap();
/// let uv = project_point(DVec3::new(10.0, 0.0, 0.0), &k, &DMat4::IDENTITY).unwrap();
/// assert_eq!(uv, [640.0, 360.0]);
/// ```
pub fn project_point(
    point: DVec3,
    intrinsics: &CameraIntrinsics,
    world_to_camera: &DMat4,
) -> Result<[f64; 2], GeometryError> {
    let point_camera = world_to_camera.mul_vec4(point.extend(1.0));

    // (x, y, z) -> (y, -z, x)
    let point_camera = DVec3::new(point_camera.y, -point_camera.z, point_camera.x);

    let point_img = intrinsics.as_mat3() * point_camera;

    if point_img.z.abs() < DEPTH_EPSILON {
        return Err(GeometryError::DegenerateProjection { depth: point_img.z });
    }

    Ok([point_img.x / point_img.z, point_img.y / point_img.z])
}

/// Check whether an image point falls inside the raster.
///
/// # Arguments
///
/// * `point` - The `(u, v)` image coordinates.
/// * `height` - The image height in pixels.
/// * `width` - The image width in pixels.
pub fn point_in_canvas(point: [f64; 2], height: u32, width: u32) -> bool {
    let [u, v] = point;
    u >= 0.0 && u < width as f64 && v >= 0.0 && v < height as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraSide;
    use crate::transform::{Rotation, Transform};
    use approx::assert_relative_eq;

    #[test]
    fn test_project_optical_axis() -> Result<(), GeometryError> {
        let k = CameraIntrinsics::from_fov(1280, 720, 90.0, CameraSide::InFront)?;
        let camera = Transform::default();
        for depth in [0.5, 1.0, 10.0, 250.0] {
            let uv = project_point(DVec3::new(depth, 0.0, 0.0), &k, &camera.inverse_matrix())?;
            assert_relative_eq!(uv[0], 640.0, epsilon = 1e-9);
            assert_relative_eq!(uv[1], 360.0, epsilon = 1e-9);
        }
        Ok(())
    }

    #[test]
    fn test_project_moved_camera() -> Result<(), GeometryError> {
        let k = CameraIntrinsics::from_fov(800, 600, 70.0, CameraSide::InFront)?;
        let camera = Transform::new(DVec3::new(12.0, -4.0, 2.0), Rotation::new(-10.0, 135.0, 0.0));
        let point = camera.location + camera.forward_vector() * 7.5;
        let uv = project_point(point, &k, &camera.inverse_matrix())?;
        assert_relative_eq!(uv[0], 400.0, epsilon = 1e-6);
        assert_relative_eq!(uv[1], 300.0, epsilon = 1e-6);
        Ok(())
    }

    #[test]
    fn test_project_axes() -> Result<(), GeometryError> {
        let k = CameraIntrinsics::from_fov(1280, 720, 90.0, CameraSide::InFront)?;
        // right of the optical axis maps to larger u, above maps to smaller v
        let uv = project_point(DVec3::new(10.0, 1.0, 2.0), &k, &DMat4::IDENTITY)?;
        assert_relative_eq!(uv[0], 640.0 + 64.0, epsilon = 1e-6);
        assert_relative_eq!(uv[1], 360.0 - 128.0, epsilon = 1e-6);
        Ok(())
    }

    #[test]
    fn test_project_camera_plane() -> Result<(), GeometryError> {
        let k = CameraIntrinsics::from_fov(1280, 720, 90.0, CameraSide::InFront)?;
        let res = project_point(DVec3::new(0.0, 3.0, 1.0), &k, &DMat4::IDENTITY);
        assert!(matches!(
            res,
            Err(GeometryError::DegenerateProjection { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_point_in_canvas() {
        assert!(point_in_canvas([0.0, 0.0], 720, 1280));
        assert!(point_in_canvas([1279.9, 719.9], 720, 1280));
        assert!(!point_in_canvas([1280.0, 10.0], 720, 1280));
        assert!(!point_in_canvas([10.0, 720.0], 720, 1280));
        assert!(!point_in_canvas([-0.1, 10.0], 720, 1280));
        assert!(!point_in_canvas([10.0, -0.1], 720, 1280));
        assert!(!point_in_canvas([f64::NAN, 10.0], 720, 1280));
    }
}
