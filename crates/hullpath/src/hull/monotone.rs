use super::predicates::{cross, sorted_unique};
use super::types::{Coord, Hull, Point};

/// Andrew's monotone chain (returns hull in CCW order).
///
/// Pops while `cross <= 0`, so collinear boundary points are discarded.
pub fn monotone_chain<T: Coord>(points: &[Point<T>]) -> Hull<T> {
    if points.len() < 3 {
        return Hull::empty();
    }
    let pts = sorted_unique(points);
    if pts.len() < 2 {
        return Hull::from_ccw(pts);
    }
    let mut lower: Vec<Point<T>> = Vec::with_capacity(pts.len());
    for &p in &pts {
        while let [.., a, b] = lower[..] {
            if cross(a, b, p) > T::WIDE_ZERO {
                break;
            }
            lower.pop();
        }
        lower.push(p);
    }
    let mut upper: Vec<Point<T>> = Vec::with_capacity(pts.len());
    for &p in pts.iter().rev() {
        while let [.., a, b] = upper[..] {
            if cross(a, b, p) > T::WIDE_ZERO {
                break;
            }
            upper.pop();
        }
        upper.push(p);
    }
    // Each chain ends where the other starts.
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    Hull::from_ccw(hull)
}
