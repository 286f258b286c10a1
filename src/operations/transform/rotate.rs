use nalgebra::{Rotation3, Unit};

use crate::error::{GeometryError, Result};
use crate::math::{Matrix4, Point3, Vector3, TOLERANCE};
use crate::tessellation::TriangleMesh;

/// Rotates a mesh around an axis.
pub struct Rotate {
    axis_origin: Point3,
    axis_direction: Vector3,
    angle: f64,
}

impl Rotate {
    /// Creates a new `Rotate` operation.
    ///
    /// * `angle` - Rotation angle in radians, right-handed about the axis.
    #[must_use]
    pub fn new(axis_origin: Point3, axis_direction: Vector3, angle: f64) -> Self {
        Self {
            axis_origin,
            axis_direction,
            angle,
        }
    }

    /// Quarter turn about `+X` through the origin that lays the XY plane onto
    /// the ground: `(x, y, z)` becomes `(x, z, -y)`.
    #[must_use]
    pub fn ground_remap() -> Self {
        Self::new(Point3::origin(), Vector3::x(), -std::f64::consts::FRAC_PI_2)
    }

    /// Builds the homogeneous matrix for this rotation.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if the axis direction is zero-length.
    pub fn matrix(&self) -> Result<Matrix4> {
        let axis = Unit::try_new(self.axis_direction, TOLERANCE).ok_or(GeometryError::ZeroVector)?;
        let rot = Rotation3::from_axis_angle(&axis, self.angle).to_homogeneous();
        let t_neg = Matrix4::new_translation(&(-self.axis_origin.coords));
        let t_pos = Matrix4::new_translation(&self.axis_origin.coords);
        Ok(t_pos * rot * t_neg)
    }

    /// Executes the rotation, modifying the mesh in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the axis direction is zero-length.
    pub fn execute(&self, mesh: &mut TriangleMesh) -> Result<()> {
        let matrix = self.matrix()?;
        mesh.transform(&matrix);
        Ok(())
    }
}
