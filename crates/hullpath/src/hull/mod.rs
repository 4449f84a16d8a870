//! Convex hulls of planar point sets.
//!
//! Purpose
//! - Compute the minimal convex polygon enclosing a point set with one of three
//!   strategies (monotone chain, gift wrapping, Graham scan) that agree exactly.
//! - Keep predicates exact for integer coordinates by evaluating them in a
//!   widened type (`Coord::Wide`); float predicates that overflow are redone
//!   at a smaller scale, so any finite input is accepted.
//!
//! Conventions
//! - `cross(o, a, b) > 0` means `o, a, b` turn counter-clockwise. This is the
//!   only sign convention used anywhere in the crate.
//! - Hulls are CCW, start at the lexicographically smallest point and keep
//!   strict corners only; collinear boundary points are dropped by every
//!   strategy.
//! - Fewer than three input points give an empty hull. After deduplication a
//!   single distinct point gives a one-point hull and a collinear set gives its
//!   two extreme points.
//! - Non-finite float coordinates are ignored.
//!
//! Code cross-refs: `Hull`, `Point`, `Coord`, `HullCfg`

mod graham;
mod jarvis;
mod monotone;
mod predicates;
pub mod rand;
mod types;

pub use graham::graham_scan;
pub use jarvis::jarvis_march;
pub use monotone::monotone_chain;
pub use predicates::{cross, dist2, orientation};
pub use types::{Coord, Hull, HullAlgorithm, HullCfg, Orientation, Point};

/// Convex hull with the default strategy (monotone chain).
pub fn convex_hull<T: Coord>(points: &[Point<T>]) -> Hull<T> {
    monotone_chain(points)
}

/// Convex hull with an explicit strategy.
pub fn convex_hull_with<T: Coord>(points: &[Point<T>], cfg: HullCfg) -> Hull<T> {
    match cfg.algorithm {
        HullAlgorithm::MonotoneChain => monotone_chain(points),
        HullAlgorithm::JarvisMarch => jarvis_march(points),
        HullAlgorithm::GrahamScan => graham_scan(points),
    }
}

#[cfg(test)]
mod tests;
