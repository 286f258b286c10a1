use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::{open_loop, signed_area};
use crate::math::{Point2, Point3, Vector3, TOLERANCE};
use crate::tessellation::{triangulate_polygon, TriangleMesh};

/// Extrudes a closed 2D profile in the XY plane along `+Z` into a prism mesh.
///
/// The prism spans `z = 0` to `z = depth` with flat caps and no bevel. A
/// trailing point equal to the first is ignored.
pub struct ExtrudeProfile<'a> {
    profile: &'a [Point2],
    depth: f64,
}

impl<'a> ExtrudeProfile<'a> {
    /// Creates a new `ExtrudeProfile` operation.
    #[must_use]
    pub fn new(profile: &'a [Point2], depth: f64) -> Self {
        Self { profile, depth }
    }

    /// Executes the extrusion, returning the prism mesh.
    ///
    /// Faces are wound counter-clockwise seen from outside regardless of
    /// the profile's orientation.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the depth is not positive or
    /// the profile has fewer than 3 points or no area.
    pub fn execute(&self) -> Result<TriangleMesh> {
        if self.depth.is_nan() || self.depth <= TOLERANCE {
            return Err(
                GeometryError::Degenerate(format!("extrusion depth {} is not positive", self.depth))
                    .into(),
            );
        }

        let points = open_loop(self.profile);
        if points.len() < 3 {
            return Err(
                GeometryError::Degenerate("extrusion profile needs at least 3 points".into()).into(),
            );
        }
        let area = signed_area(points);
        if area.abs() < TOLERANCE {
            return Err(GeometryError::Degenerate("extrusion profile has no area".into()).into());
        }
        let ccw: Vec<Point2> = if area > 0.0 {
            points.to_vec()
        } else {
            points.iter().rev().copied().collect()
        };

        let triangles = triangulate_polygon(&ccw)?;
        let depth = self.depth;
        let mut mesh = TriangleMesh::default();

        // Bottom cap faces -Z, so its triangles are reversed.
        let bottom: Vec<u32> = ccw
            .iter()
            .map(|p| mesh.push_vertex(Point3::new(p.x, p.y, 0.0), -Vector3::z()))
            .collect();
        for &[a, b, c] in &triangles {
            mesh.indices.push([bottom[a], bottom[c], bottom[b]]);
        }

        let top: Vec<u32> = ccw
            .iter()
            .map(|p| mesh.push_vertex(Point3::new(p.x, p.y, depth), Vector3::z()))
            .collect();
        for &[a, b, c] in &triangles {
            mesh.indices.push([top[a], top[b], top[c]]);
        }

        let n = ccw.len();
        for i in 0..n {
            let (pi, pj) = (ccw[i], ccw[(i + 1) % n]);
            let (dx, dy) = (pj.x - pi.x, pj.y - pi.y);
            let len = dx.hypot(dy);
            if len < TOLERANCE {
                continue;
            }
            let outward = Vector3::new(dy / len, -dx / len, 0.0);
            mesh.push_quad(
                [
                    Point3::new(pi.x, pi.y, 0.0),
                    Point3::new(pj.x, pj.y, 0.0),
                    Point3::new(pj.x, pj.y, depth),
                    Point3::new(pi.x, pi.y, depth),
                ],
                outward,
            );
        }

        Ok(mesh)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn box_profile_has_12_triangles() {
        let profile = [p(0.0, 0.0), p(2.0, 0.0), p(2.0, 3.0), p(0.0, 3.0)];
        let mesh = ExtrudeProfile::new(&profile, 0.5).execute().unwrap();
        // 2 caps x 2 + 4 sides x 2
        assert_eq!(mesh.triangle_count(), 12);
        assert_relative_eq!(mesh.signed_volume(), 3.0, epsilon = 1e-9);
        assert_relative_eq!(mesh.surface_area(), 2.0 * 6.0 + 2.0 * (2.0 + 3.0) * 0.5, epsilon = 1e-9);
    }

    #[test]
    fn clockwise_profile_still_winds_outward() {
        let profile = [p(0.0, 0.0), p(0.0, 3.0), p(2.0, 3.0), p(2.0, 0.0)];
        let mesh = ExtrudeProfile::new(&profile, 1.0).execute().unwrap();
        assert_relative_eq!(mesh.signed_volume(), 6.0, epsilon = 1e-9);
    }

    #[test]
    fn closing_point_is_ignored() {
        let profile = [p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0), p(0.0, 0.0)];
        let mesh = ExtrudeProfile::new(&profile, 1.0).execute().unwrap();
        assert_eq!(mesh.triangle_count(), 12);
    }

    #[test]
    fn concave_profile_keeps_notch() {
        let profile = [
            p(0.0, 0.0), p(4.0, 0.0), p(4.0, 2.0),
            p(2.0, 2.0), p(2.0, 4.0), p(0.0, 4.0),
        ];
        let mesh = ExtrudeProfile::new(&profile, 3.0).execute().unwrap();
        assert_relative_eq!(mesh.signed_volume(), 36.0, epsilon = 1e-9);
    }

    #[test]
    fn side_normals_point_away_from_center() {
        let profile = [p(-1.0, -1.0), p(1.0, -1.0), p(1.0, 1.0), p(-1.0, 1.0)];
        let mesh = ExtrudeProfile::new(&profile, 2.0).execute().unwrap();
        for (v, n) in mesh.vertices.iter().zip(&mesh.normals) {
            let to_vertex = v - Point3::new(0.0, 0.0, 1.0);
            assert!(n.dot(&to_vertex) > 0.0, "normal {n:?} at {v:?} points inward");
        }
    }

    #[test]
    fn zero_depth_and_degenerate_profiles_are_errors() {
        let square = [p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)];
        assert!(ExtrudeProfile::new(&square, 0.0).execute().is_err());
        assert!(ExtrudeProfile::new(&square[..2], 1.0).execute().is_err());
        let line = [p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0)];
        assert!(ExtrudeProfile::new(&line, 1.0).execute().is_err());
    }
}
