use tracing::debug;

use super::predicates::{cmp_dist, orientation, sorted_unique};
use super::types::{Coord, Hull, Orientation, Point};

/// Gift wrapping (Jarvis march), O(n·h).
///
/// Starts at the lowest of the left-most points and walks counter-clockwise.
/// From the current point `p` the next point is the candidate with no other
/// point strictly clockwise of `p→q`; among collinear candidates the farthest
/// wins, which both drops collinear boundary points and guarantees progress.
pub fn jarvis_march<T: Coord>(points: &[Point<T>]) -> Hull<T> {
    if points.len() < 3 {
        return Hull::empty();
    }
    // Sorted input puts the start point at index 0.
    let pts = sorted_unique(points);
    let n = pts.len();
    if n < 2 {
        return Hull::from_ccw(pts);
    }
    let mut hull = Vec::new();
    let mut p = 0;
    // A hull never has more than n corners.
    for _ in 0..n {
        hull.push(pts[p]);
        let mut q = if p == 0 { 1 } else { 0 };
        for r in 0..n {
            if r == p || r == q {
                continue;
            }
            match orientation(pts[p], pts[q], pts[r]) {
                Orientation::Clockwise => q = r,
                Orientation::Collinear if cmp_dist(pts[p], pts[r], pts[q]).is_gt() => q = r,
                _ => {}
            }
        }
        p = q;
        if p == 0 {
            return Hull::from_ccw(hull);
        }
    }
    debug!(n, "gift wrapping did not close within n steps");
    Hull::from_ccw(hull)
}
