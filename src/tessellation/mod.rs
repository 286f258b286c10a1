mod triangulate;

pub use triangulate::triangulate_polygon;

use crate::math::{Matrix4, Point3, Vector3};

/// A triangle mesh with per-vertex normals.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Vertex normals.
    pub normals: Vec<Vector3>,
    /// Triangle indices (each triple defines a counter-clockwise triangle).
    pub indices: Vec<[u32; 3]>,
}

impl TriangleMesh {
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Appends a vertex and returns its index.
    #[allow(clippy::cast_possible_truncation)]
    pub fn push_vertex(&mut self, position: Point3, normal: Vector3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        self.normals.push(normal);
        index
    }

    /// Appends a flat quad `a b c d` (counter-clockwise seen from `normal`).
    pub fn push_quad(&mut self, corners: [Point3; 4], normal: Vector3) {
        let [a, b, c, d] = corners.map(|p| self.push_vertex(p, normal));
        self.indices.push([a, b, c]);
        self.indices.push([a, c, d]);
    }

    /// Transforms positions by `matrix` and normals by its rotational part.
    ///
    /// The matrix is expected to be rigid; normals are renormalized.
    pub fn transform(&mut self, matrix: &Matrix4) {
        for v in &mut self.vertices {
            *v = matrix.transform_point(v);
        }
        for n in &mut self.normals {
            let t = matrix.transform_vector(n);
            let len = t.norm();
            if len > 0.0 {
                *n = t / len;
            }
        }
    }

    /// Total area of all triangles.
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        self.indices
            .iter()
            .map(|&[a, b, c]| {
                let v0 = self.vertices[a as usize];
                let e1 = self.vertices[b as usize] - v0;
                let e2 = self.vertices[c as usize] - v0;
                e1.cross(&e2).norm() * 0.5
            })
            .sum()
    }

    /// Enclosed volume via the divergence theorem (positive for outward winding).
    #[must_use]
    pub fn signed_volume(&self) -> f64 {
        self.indices
            .iter()
            .map(|&[a, b, c]| {
                let v0 = self.vertices[a as usize].coords;
                let v1 = self.vertices[b as usize].coords;
                let v2 = self.vertices[c as usize].coords;
                v0.dot(&v1.cross(&v2)) / 6.0
            })
            .sum()
    }
}
