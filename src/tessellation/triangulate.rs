use std::collections::{HashMap, HashSet, VecDeque};

use spade::handles::{FixedFaceHandle, InnerTag};
use spade::{ConstrainedDelaunayTriangulation, InsertionError, Point2 as SpadePoint2, Triangulation};

use crate::error::{Result, TessellationError};
use crate::math::Point2;

type Cdt = ConstrainedDelaunayTriangulation<SpadePoint2<f64>>;

/// Triangulates a simple closed polygon, concave shapes included.
///
/// Returns index triples into `points`, each counter-clockwise. A point
/// repeated within the loop maps to its first occurrence.
///
/// # Errors
///
/// Returns [`TessellationError::Failed`] for fewer than 3 points, points
/// spade rejects (non-finite or out of range), self-intersecting contours,
/// or a polygon without interior.
pub fn triangulate_polygon(points: &[Point2]) -> Result<Vec<[usize; 3]>> {
    if points.len() < 3 {
        return Err(
            TessellationError::Failed("polygon needs at least 3 points".into()).into(),
        );
    }

    let mut cdt = Cdt::new();
    let mut handle_to_input: HashMap<usize, usize> = HashMap::new();
    let mut handles = Vec::with_capacity(points.len());
    for (i, p) in points.iter().enumerate() {
        let h = cdt
            .insert(SpadePoint2::new(p.x, p.y))
            .map_err(|e: InsertionError| TessellationError::Failed(format!("CDT insert: {e}")))?;
        handle_to_input.entry(h.index()).or_insert(i);
        handles.push(h);
    }

    for i in 0..handles.len() {
        let from = handles[i];
        let to = handles[(i + 1) % handles.len()];
        if from == to {
            continue;
        }
        if !cdt.can_add_constraint(from, to) {
            return Err(TessellationError::Failed("contour edges intersect".into()).into());
        }
        cdt.add_constraint(from, to);
    }

    let interior = classify_interior_faces(&cdt);
    let mut triangles = Vec::with_capacity(interior.len());
    for face in cdt.inner_faces() {
        if !interior.contains(&face.fix().index()) {
            continue;
        }
        let mut tri = [0usize; 3];
        for (slot, vh) in tri.iter_mut().zip(face.vertices()) {
            *slot = *handle_to_input
                .get(&vh.fix().index())
                .ok_or_else(|| TessellationError::Failed("CDT produced an unknown vertex".into()))?;
        }
        if cross(&points[tri[0]], &points[tri[1]], &points[tri[2]]) < 0.0 {
            tri.swap(1, 2);
        }
        triangles.push(tri);
    }

    if triangles.is_empty() {
        return Err(TessellationError::Failed("polygon has no interior".into()).into());
    }
    Ok(triangles)
}

fn cross(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Flood-fills from the outer face; crossing a constraint edge increments
/// depth and odd depth is interior.
fn classify_interior_faces(cdt: &Cdt) -> HashSet<usize> {
    let mut interior = HashSet::new();
    let mut depth_map: HashMap<usize, u32> = HashMap::new();
    let mut queue: VecDeque<(FixedFaceHandle<InnerTag>, u32)> = VecDeque::new();

    let outer_fix = cdt.outer_face().fix();

    for edge in cdt.directed_edges() {
        if edge.face().fix() != outer_fix {
            continue;
        }
        if let Some(inner) = edge.rev().face().as_inner() {
            let idx = inner.fix().index();
            if depth_map.contains_key(&idx) {
                continue;
            }
            let depth = u32::from(cdt.is_constraint_edge(edge.as_undirected().fix()));
            depth_map.insert(idx, depth);
            if depth % 2 == 1 {
                interior.insert(idx);
            }
            queue.push_back((inner.fix(), depth));
        }
    }

    while let Some((face_fix, depth)) = queue.pop_front() {
        for edge in cdt.face(face_fix).adjacent_edges() {
            let Some(neighbor) = edge.rev().face().as_inner() else {
                continue;
            };
            let n_idx = neighbor.fix().index();
            if depth_map.contains_key(&n_idx) {
                continue;
            }
            let new_depth = depth + u32::from(cdt.is_constraint_edge(edge.as_undirected().fix()));
            depth_map.insert(n_idx, new_depth);
            if new_depth % 2 == 1 {
                interior.insert(n_idx);
            }
            queue.push_back((neighbor.fix(), new_depth));
        }
    }

    interior
}
