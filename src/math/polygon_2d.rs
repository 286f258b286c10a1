use super::{Point2, TOLERANCE};

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Returns the axis-aligned bounds `(min, max)` of a point set, or `None` if empty.
#[must_use]
pub fn bounds(points: &[Point2]) -> Option<(Point2, Point2)> {
    let first = points.first()?;
    let init = (*first, *first);
    Some(points.iter().fold(init, |(min, max), p| {
        (
            Point2::new(min.x.min(p.x), min.y.min(p.y)),
            Point2::new(max.x.max(p.x), max.y.max(p.y)),
        )
    }))
}

/// Grows the bounding rectangle of `contour` by `d` on all four sides.
///
/// The result is always a counter-clockwise rectangle starting at the
/// minimum corner, whatever the shape of the input: a concave or
/// non-rectangular contour collapses to its bounding box.
#[must_use]
pub fn expand_rect(contour: &[Point2], d: f64) -> Vec<Point2> {
    let Some((min, max)) = bounds(contour) else {
        return Vec::new();
    };
    let (x0, y0) = (min.x - d, min.y - d);
    let (x1, y1) = (max.x + d, max.y + d);
    vec![
        Point2::new(x0, y0),
        Point2::new(x1, y0),
        Point2::new(x1, y1),
        Point2::new(x0, y1),
    ]
}

/// Euclidean distance between two ground points.
#[must_use]
pub fn distance(a: &Point2, b: &Point2) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Drops a trailing point that repeats the first, so the loop is implicitly closed.
#[must_use]
pub fn open_loop(points: &[Point2]) -> &[Point2] {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) if points.len() > 1 && distance(first, last) < TOLERANCE => {
            &points[..points.len() - 1]
        }
        _ => points,
    }
}
