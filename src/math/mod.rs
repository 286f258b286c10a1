pub mod polygon_2d;

use std::f64::consts::PI;

use nalgebra::Unit;

use crate::error::{GeometryError, Result};

/// 2D point type (ground plan, meters).
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 4x4 transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Rigid transform (rotation followed by translation).
pub type Isometry3 = nalgebra::Isometry3<f64>;

/// Unit quaternion rotation.
pub type UnitQuaternion = nalgebra::UnitQuaternion<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Maps a ground-plan point to the Y-up world frame at the given height.
///
/// Ground `x` stays world `x`, ground `y` runs along world `-z`.
#[must_use]
pub fn ground_to_world(p: &Point2, height: f64) -> Point3 {
    Point3::new(p.x, height, -p.y)
}

/// Returns the shortest-arc rotation taking direction `from` onto `to`.
///
/// Both vectors are normalized first. When they point in opposite
/// directions the rotation is a half turn about an axis perpendicular to
/// `from`; for `from = +X` that axis is `+Y`.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] if either vector is zero-length.
pub fn shortest_arc(from: &Vector3, to: &Vector3) -> Result<UnitQuaternion> {
    let from = Unit::try_new(*from, TOLERANCE).ok_or(GeometryError::ZeroVector)?;
    let to = Unit::try_new(*to, TOLERANCE).ok_or(GeometryError::ZeroVector)?;

    if let Some(q) = UnitQuaternion::rotation_between_axis(&from, &to) {
        return Ok(q);
    }

    let perpendicular = if from.x.abs() > from.z.abs() {
        Vector3::new(-from.y, from.x, 0.0)
    } else {
        Vector3::new(0.0, -from.z, from.y)
    };
    let axis = Unit::try_new(perpendicular, TOLERANCE).ok_or_else(|| {
        GeometryError::Degenerate("no axis perpendicular to rotation source".into())
    })?;
    Ok(UnitQuaternion::from_axis_angle(&axis, PI))
}
