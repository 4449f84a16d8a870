//! Convex hulls and dense single-source shortest paths.
//!
//! Two independent, pure components:
//! - [`hull`]: minimal convex polygon of a planar point set (monotone chain,
//!   gift wrapping, Graham scan), exact for integer coordinates.
//! - [`paths`]: Dijkstra over a dense V×V non-negative weight lookup, with
//!   explicit unreachable handling and path reconstruction.
//!
//! Every call owns its working state; nothing is shared between calls, so
//! independent inputs may be processed from different threads freely.

pub mod hull;
pub mod paths;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::hull::rand::{
        draw_cloud_f64, draw_cloud_i32, draw_on_circle, CloudCfg, PointCount, ReplayToken,
    };
    pub use crate::hull::{
        convex_hull, convex_hull_with, cross, orientation, Coord, Hull, HullAlgorithm, HullCfg,
        Orientation, Point,
    };
    pub use crate::paths::{
        dijkstra, dijkstra_all, shortest_path, DenseGraph, DistanceTable, InvalidGraphError,
        NoPathError, PathError, Weight, WeightedGraph,
    };
}
