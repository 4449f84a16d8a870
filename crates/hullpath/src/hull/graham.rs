use std::cmp::Ordering;

use super::predicates::{cross, sorted_unique};
use super::types::{Coord, Hull, Point};

/// Graham scan around the bottom-most point (ties: left-most).
///
/// Remaining points are sorted by polar angle (`Coord::polar_cmp`), nearer
/// first on equal angle; the scan pops while `cross <= 0`.
pub fn graham_scan<T: Coord>(points: &[Point<T>]) -> Hull<T> {
    if points.len() < 3 {
        return Hull::empty();
    }
    let mut pts = sorted_unique(points);
    if pts.len() < 2 {
        return Hull::from_ccw(pts);
    }
    let pivot_idx = pts
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| match a.y.cmp_total(&b.y) {
            Ordering::Equal => a.x.cmp_total(&b.x),
            o => o,
        })
        .map(|(i, _)| i)
        .unwrap_or(0);
    pts.swap(0, pivot_idx);
    let pivot = pts[0];
    pts[1..].sort_by(|a, b| T::polar_cmp(pivot, *a, *b));
    let mut stack: Vec<Point<T>> = Vec::with_capacity(pts.len());
    for p in pts {
        while let [.., a, b] = stack[..] {
            if cross(a, b, p) > T::WIDE_ZERO {
                break;
            }
            stack.pop();
        }
        stack.push(p);
    }
    Hull::from_ccw(stack)
}
