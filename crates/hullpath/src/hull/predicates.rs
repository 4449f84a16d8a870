use std::cmp::Ordering;

use tracing::debug;

use super::types::{Coord, Orientation, Point};

/// 2D cross product of `o→a` and `o→b` in the widened type.
///
/// Positive for a counter-clockwise turn `o, a, b`, negative for clockwise,
/// zero if collinear. If a float evaluation overflows, the value returned is
/// the cross product of the downscaled coordinates (same sign, smaller magnitude).
#[inline]
pub fn cross<T: Coord>(o: Point<T>, a: Point<T>, b: Point<T>) -> T::Wide {
    let c = cross_in(o, a, b, T::widen);
    if T::wide_is_finite(c) {
        c
    } else {
        cross_in(o, a, b, T::widen_small)
    }
}

#[inline]
fn cross_in<T: Coord>(o: Point<T>, a: Point<T>, b: Point<T>, w: fn(T) -> T::Wide) -> T::Wide {
    let (ox, oy) = (w(o.x), w(o.y));
    (w(a.x) - ox) * (w(b.y) - oy) - (w(a.y) - oy) * (w(b.x) - ox)
}

/// Squared distance in the widened type. Floats may overflow to infinity;
/// comparisons should go through `cmp_dist`.
#[inline]
pub fn dist2<T: Coord>(a: Point<T>, b: Point<T>) -> T::Wide {
    dist2_in(a, b, T::widen)
}

#[inline]
fn dist2_in<T: Coord>(a: Point<T>, b: Point<T>, w: fn(T) -> T::Wide) -> T::Wide {
    let dx = w(b.x) - w(a.x);
    let dy = w(b.y) - w(a.y);
    dx * dx + dy * dy
}

/// Compares `|o - a|` with `|o - b|`, both evaluated at the same scale.
pub(crate) fn cmp_dist<T: Coord>(o: Point<T>, a: Point<T>, b: Point<T>) -> Ordering {
    let (mut da, mut db) = (dist2(o, a), dist2(o, b));
    if !(T::wide_is_finite(da) && T::wide_is_finite(db)) {
        da = dist2_in(o, a, T::widen_small);
        db = dist2_in(o, b, T::widen_small);
    }
    da.partial_cmp(&db).unwrap_or(Ordering::Equal)
}

/// Orientation of the ordered triplet `(p, q, r)`, read off the sign of `cross`.
#[inline]
pub fn orientation<T: Coord>(p: Point<T>, q: Point<T>, r: Point<T>) -> Orientation {
    let c = cross(p, q, r);
    if c > T::WIDE_ZERO {
        Orientation::CounterClockwise
    } else if c < T::WIDE_ZERO {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Finite points, sorted lexicographically, exact duplicates removed.
pub(crate) fn sorted_unique<T: Coord>(points: &[Point<T>]) -> Vec<Point<T>> {
    let mut pts: Vec<Point<T>> = points.iter().copied().filter(Point::is_finite).collect();
    if pts.len() != points.len() {
        debug!(
            dropped = points.len() - pts.len(),
            "ignoring points with non-finite coordinates"
        );
    }
    pts.sort_by(Point::lex_cmp);
    pts.dedup_by(|a, b| a.lex_cmp(b).is_eq());
    pts
}
