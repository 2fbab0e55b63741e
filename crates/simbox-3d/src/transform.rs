use glam::{DMat3, DMat4, DVec3};
use serde::{Deserialize, Serialize};

/// Euler angles in degrees, following the simulator (Unreal) convention.
///
/// Pitch rotates around the Y axis, yaw around the Z axis and roll around the X axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    /// Rotation around the Y axis in degrees
    #[serde(default)]
    pub pitch: f64,
    /// Rotation around the Z axis in degrees
    #[serde(default)]
    pub yaw: f64,
    /// Rotation around the X axis in degrees
    #[serde(default)]
    pub roll: f64,
}

impl Rotation {
    /// Create a new rotation from pitch, yaw and roll in degrees.
    pub fn new(pitch: f64, yaw: f64, roll: f64) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Compute the rotation matrix.
    ///
    /// Example:
    ///
    /// ```
    /// use simbox_3d::transform::Rotation;
    /// use glam::DVec3;
    ///
    /// let rotation = Rotation::new(0.0, 90.0, 0.0);
    /// let v = rotation.matrix() * DVec3::X;
    /// assert!((v - DVec3::Y).length() < 1e-12);
    /// ```
    pub fn matrix(&self) -> DMat3 {
        let (sp, cp) = self.pitch.to_radians().sin_cos();
        let (sy, cy) = self.yaw.to_radians().sin_cos();
        let (sr, cr) = self.roll.to_radians().sin_cos();

        DMat3::from_cols(
            DVec3::new(cp * cy, cp * sy, sp),
            DVec3::new(cy * sp * sr - sy * cr, sy * sp * sr + cy * cr, -cp * sr),
            DVec3::new(-cy * sp * cr - sy * sr, -sy * sp * cr + cy * sr, cp * cr),
        )
    }

    /// Rotate a vector.
    pub fn rotate_vector(&self, v: DVec3) -> DVec3 {
        self.matrix() * v
    }

    /// The unit vector pointing along the local X axis.
    pub fn forward_vector(&self) -> DVec3 {
        let (sp, cp) = self.pitch.to_radians().sin_cos();
        let (sy, cy) = self.yaw.to_radians().sin_cos();
        DVec3::new(cp * cy, cp * sy, sp)
    }
}

/// A rigid transform from a local frame to the world frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Position in world coordinates
    pub location: DVec3,
    /// Orientation with respect to the world axes
    #[serde(default)]
    pub rotation: Rotation,
}

impl Transform {
    /// Create a new transform.
    pub fn new(location: DVec3, rotation: Rotation) -> Self {
        Self { location, rotation }
    }

    /// The local to world matrix.
    pub fn matrix(&self) -> DMat4 {
        let r = self.rotation.matrix();
        DMat4::from_cols(
            r.x_axis.extend(0.0),
            r.y_axis.extend(0.0),
            r.z_axis.extend(0.0),
            self.location.extend(1.0),
        )
    }

    /// The world to local matrix.
    pub fn inverse_matrix(&self) -> DMat4 {
        // R' = R^T
        let r_inv = self.rotation.matrix().transpose();
        // t' = -R^T * t
        let t_inv = -(r_inv * self.location);
        DMat4::from_cols(
            r_inv.x_axis.extend(0.0),
            r_inv.y_axis.extend(0.0),
            r_inv.z_axis.extend(0.0),
            t_inv.extend(1.0),
        )
    }

    /// Map a point from the local frame to the world frame.
    pub fn transform_point(&self, point: DVec3) -> DVec3 {
        self.rotation.matrix() * point + self.location
    }

    /// Map a point from the world frame to the local frame.
    pub fn inverse_transform_point(&self, point: DVec3) -> DVec3 {
        self.rotation.matrix().transpose() * (point - self.location)
    }

    /// The unit vector pointing along the local X axis.
    pub fn forward_vector(&self) -> DVec3 {
        self.rotation.forward_vector()
    }
}
