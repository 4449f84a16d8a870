//! Single-source shortest paths on dense non-negative weighted digraphs.
//!
//! Purpose
//! - Dijkstra's algorithm with the O(V²) adjacency-matrix formulation: each
//!   round scans all vertices for the unsettled minimum, then relaxes one row.
//! - Distances and predecessors are returned together in a `DistanceTable`;
//!   paths are reconstructed from it on demand (`DistanceTable::path_to`) or
//!   in one call (`shortest_path`).
//!
//! Conventions
//! - Vertices are `0..V`. A lookup returning `None` means "no edge". When a
//!   graph is built from a plain matrix, `0` means "no edge".
//! - Negative or non-finite weights are rejected before the search starts.
//! - Unreachable vertices have distance `None`; asking for their path is an
//!   explicit `NoPathError`.
//!
//! Code cross-refs: `DenseGraph`, `WeightedGraph`, `DistanceTable`

mod dijkstra;
mod error;
mod types;

pub use dijkstra::{dijkstra, dijkstra_all, shortest_path, validate};
pub use error::{InvalidGraphError, NoPathError, PathError};
pub use types::{DenseGraph, DistanceTable, Weight, WeightedGraph};
