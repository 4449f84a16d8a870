//! Coordinate scalars, points, hulls and hull configuration.
//!
//! - `Coord`: coordinate scalar with a widened type for exact predicates.
//! - `Point`: immutable `(x, y)` pair with lexicographic order.
//! - `Hull`: CCW boundary starting at the lexicographically smallest point.
//! - `HullCfg`, `HullAlgorithm`: strategy selection.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Sub};

use nalgebra::{Scalar, Vector2};

use super::predicates::{cmp_dist, cross, dist2};

/// Coordinate scalar accepted by the hull engine.
///
/// Every cross product and squared distance is evaluated in `Wide`. Integer
/// widening keeps predicates exact: `i16` and `i32` differences need 17 and 33
/// bits, so their products fit `i64` and `i128`. Floats are evaluated in `f64`;
/// a predicate that overflows is re-evaluated on coordinates scaled by `2^-520`
/// so its sign stays meaningful up to `f64::MAX`.
pub trait Coord: Scalar + Copy + PartialOrd {
    type Wide: Copy
        + PartialOrd
        + fmt::Debug
        + Add<Output = Self::Wide>
        + Sub<Output = Self::Wide>
        + Mul<Output = Self::Wide>;

    const WIDE_ZERO: Self::Wide;

    fn widen(self) -> Self::Wide;

    /// `widen` scaled down for the overflow fallback.
    #[inline]
    fn widen_small(self) -> Self::Wide {
        self.widen()
    }

    /// False once a widened computation has overflowed (or produced NaN).
    #[inline]
    fn wide_is_finite(_w: Self::Wide) -> bool {
        true
    }

    /// Total order used for sorting. `-0.0` and `0.0` compare equal.
    fn cmp_total(&self, other: &Self) -> Ordering;

    fn is_finite(self) -> bool;

    fn wide_to_f64(w: Self::Wide) -> f64;

    /// Counter-clockwise order of `a` and `b` around `pivot`, nearer first on
    /// a shared ray.
    ///
    /// Both points lie strictly above `pivot` or on its right at the same
    /// height, so angles fall in `[0, π)`. The result is a total order on
    /// such points, which `sort_by` requires.
    fn polar_cmp(pivot: Point<Self>, a: Point<Self>, b: Point<Self>) -> Ordering;
}

macro_rules! int_coord {
    ($($t:ty => $w:ty),*) => {$(
        impl Coord for $t {
            type Wide = $w;
            const WIDE_ZERO: $w = 0;
            #[inline]
            fn widen(self) -> $w {
                self as $w
            }
            #[inline]
            fn cmp_total(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }
            #[inline]
            fn is_finite(self) -> bool {
                true
            }
            #[inline]
            fn wide_to_f64(w: $w) -> f64 {
                w as f64
            }
            fn polar_cmp(pivot: Point<Self>, a: Point<Self>, b: Point<Self>) -> Ordering {
                // Exact arithmetic: the sign of `cross` is a strict weak order on a half-plane.
                Self::WIDE_ZERO
                    .cmp(&cross(pivot, a, b))
                    .then_with(|| dist2(pivot, a).cmp(&dist2(pivot, b)))
            }
        }
    )*};
}

int_coord!(i16 => i64, i32 => i128);

/// `2^-520`: scaled coordinates stay below `2^504`, so products of their
/// differences stay below `2^1010`.
const F64_DOWNSCALE: f64 = 2.913_414_348_125_081e-157;

macro_rules! float_coord {
    ($($t:ty),*) => {$(
        impl Coord for $t {
            type Wide = f64;
            const WIDE_ZERO: f64 = 0.0;
            #[inline]
            fn widen(self) -> f64 {
                f64::from(self)
            }
            #[inline]
            fn widen_small(self) -> f64 {
                f64::from(self) * F64_DOWNSCALE
            }
            #[inline]
            fn wide_is_finite(w: f64) -> bool {
                w.is_finite()
            }
            #[inline]
            fn cmp_total(&self, other: &Self) -> Ordering {
                // Adding +0.0 folds -0.0 into +0.0.
                (*self + 0.0).total_cmp(&(*other + 0.0))
            }
            #[inline]
            fn is_finite(self) -> bool {
                <$t>::is_finite(self)
            }
            #[inline]
            fn wide_to_f64(w: f64) -> f64 {
                w
            }
            fn polar_cmp(pivot: Point<Self>, a: Point<Self>, b: Point<Self>) -> Ordering {
                // Per-point keys compared with `total_cmp`; rounding in `cross`
                // never reaches the sort.
                let (ox, oy) = (pivot.x.widen(), pivot.y.widen());
                let key = |p: Point<Self>| {
                    let (px, py) = (p.x.widen(), p.y.widen());
                    let (dx, dy) = ((px - ox) + 0.0, (py - oy) + 0.0);
                    let r = dx.hypot(dy);
                    if r.is_finite() {
                        (dy.atan2(dx), false, r)
                    } else {
                        // Farther than f64::MAX: halve first, the angle is scale-free.
                        let (dx, dy) = ((px * 0.5 - ox * 0.5) + 0.0, (py * 0.5 - oy * 0.5) + 0.0);
                        (dy.atan2(dx), true, dx.hypot(dy))
                    }
                };
                let ((ta, fa, ra), (tb, fb, rb)) = (key(a), key(b));
                ta.total_cmp(&tb)
                    .then(fa.cmp(&fb))
                    .then_with(|| ra.total_cmp(&rb))
            }
        }
    )*};
}

float_coord!(f32, f64);

/// A point in the plane. Equality is coordinate equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T: Coord> Point<T> {
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Lexicographic `(x, y)` order.
    #[inline]
    pub fn lex_cmp(&self, other: &Self) -> Ordering {
        match self.x.cmp_total(&other.x) {
            Ordering::Equal => self.y.cmp_total(&other.y),
            o => o,
        }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<T: Coord> From<(T, T)> for Point<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T: Coord> From<Vector2<T>> for Point<T> {
    #[inline]
    fn from(v: Vector2<T>) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl<T: Coord> From<Point<T>> for Vector2<T> {
    #[inline]
    fn from(p: Point<T>) -> Self {
        Vector2::new(p.x, p.y)
    }
}

/// Rotational sense of an ordered triplet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    Collinear,
    CounterClockwise,
}

/// Convex polygon boundary in counter-clockwise order.
///
/// Invariants
/// - Points are a subsequence of the input; no point is synthesized.
/// - Only strict corners are kept (collinear boundary points are dropped).
/// - The first point is the lexicographically smallest one, so hulls from
///   different strategies compare equal with `==`.
/// - Degenerate inputs give 0, 1 or 2 points.
#[derive(Clone, Debug, PartialEq)]
pub struct Hull<T> {
    points: Vec<Point<T>>,
}

impl<T: Coord> Hull<T> {
    #[inline]
    pub(crate) fn empty() -> Self {
        Self { points: Vec::new() }
    }

    /// Wrap a CCW sequence and rotate it to the canonical start.
    pub(crate) fn from_ccw(mut points: Vec<Point<T>>) -> Self {
        let start = points
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.lex_cmp(b))
            .map(|(i, _)| i)
            .unwrap_or(0);
        points.rotate_left(start);
        Self { points }
    }

    #[inline]
    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True if `p` lies inside or on the boundary.
    pub fn contains(&self, p: Point<T>) -> bool {
        match self.points.as_slice() {
            [] => false,
            [a] => *a == p,
            [a, b] => on_segment(*a, *b, p),
            pts => {
                let n = pts.len();
                (0..n).all(|k| cross(pts[k], pts[(k + 1) % n], p) >= T::WIDE_ZERO)
            }
        }
    }

    /// Twice the signed area (shoelace), evaluated in the widened type.
    /// Non-negative for a CCW hull.
    pub fn twice_signed_area(&self) -> T::Wide {
        let n = self.points.len();
        let mut total = T::WIDE_ZERO;
        for k in 0..n {
            let p = self.points[k];
            let q = self.points[(k + 1) % n];
            total = total + (p.x.widen() * q.y.widen() - q.x.widen() * p.y.widen());
        }
        total
    }

    pub fn area(&self) -> f64 {
        (T::wide_to_f64(self.twice_signed_area()) * 0.5).abs()
    }
}

fn on_segment<T: Coord>(a: Point<T>, b: Point<T>, p: Point<T>) -> bool {
    if cross(a, b, p) != T::WIDE_ZERO {
        return false;
    }
    // Collinear: p is on [a, b] iff it is no farther from either end than the other end.
    cmp_dist(a, p, b).is_le() && cmp_dist(b, p, a).is_le()
}

/// Hull construction strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HullAlgorithm {
    /// Andrew's monotone chain, O(n log n).
    #[default]
    MonotoneChain,
    /// Gift wrapping, O(n·h).
    JarvisMarch,
    /// Graham scan around the bottom-most point, O(n log n).
    GrahamScan,
}

impl HullAlgorithm {
    pub const ALL: [HullAlgorithm; 3] = [
        HullAlgorithm::MonotoneChain,
        HullAlgorithm::JarvisMarch,
        HullAlgorithm::GrahamScan,
    ];

    pub fn name(self) -> &'static str {
        match self {
            HullAlgorithm::MonotoneChain => "monotone_chain",
            HullAlgorithm::JarvisMarch => "jarvis_march",
            HullAlgorithm::GrahamScan => "graham_scan",
        }
    }
}

impl fmt::Display for HullAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Hull configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct HullCfg {
    pub algorithm: HullAlgorithm,
}
