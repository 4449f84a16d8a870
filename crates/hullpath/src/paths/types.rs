//! Weights, graph lookups, the dense adjacency matrix and distance tables.

use std::fmt;

use nalgebra::{DMatrix, Scalar};

use super::error::{InvalidGraphError, NoPathError};

/// Edge weight scalar.
pub trait Weight: Scalar + Copy + PartialOrd + fmt::Debug {
    fn zero() -> Self;
    /// Sum, or `None` if it does not fit the type.
    fn try_add(self, rhs: Self) -> Option<Self>;
    fn is_negative(self) -> bool;
    /// False for NaN and infinities.
    fn is_valid(self) -> bool;
}

macro_rules! int_weight {
    ($($t:ty),*) => {$(
        impl Weight for $t {
            #[inline]
            fn zero() -> Self {
                0
            }
            #[inline]
            fn try_add(self, rhs: Self) -> Option<Self> {
                <$t>::checked_add(self, rhs)
            }
            #[inline]
            #[allow(unused_comparisons)]
            fn is_negative(self) -> bool {
                self < 0
            }
            #[inline]
            fn is_valid(self) -> bool {
                true
            }
        }
    )*};
}

int_weight!(u32, u64, i32, i64);

macro_rules! float_weight {
    ($($t:ty),*) => {$(
        impl Weight for $t {
            #[inline]
            fn zero() -> Self {
                0.0
            }
            #[inline]
            fn try_add(self, rhs: Self) -> Option<Self> {
                let s = self + rhs;
                s.is_finite().then_some(s)
            }
            #[inline]
            fn is_negative(self) -> bool {
                self < 0.0
            }
            #[inline]
            fn is_valid(self) -> bool {
                self.is_finite()
            }
        }
    )*};
}

float_weight!(f32, f64);

/// Weight lookup over vertices `0..vertex_count()`. `None` means no edge; a
/// vertex outside the range has no edges.
pub trait WeightedGraph {
    type W: Weight;

    fn vertex_count(&self) -> usize;

    fn weight(&self, from: usize, to: usize) -> Option<Self::W>;
}

/// Dense V×V adjacency matrix. Entry `(u, v)` is the weight of `u → v`.
///
/// All constructors reject negative and non-finite weights, so a `DenseGraph`
/// is always a valid Dijkstra input.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseGraph<W: Weight> {
    weights: DMatrix<Option<W>>,
}

impl<W: Weight> DenseGraph<W> {
    /// Graph with `n` vertices and no edges.
    pub fn with_vertices(n: usize) -> Self {
        Self {
            weights: DMatrix::from_element(n, n, None),
        }
    }

    /// Build from rows of an adjacency matrix where `0` means "no edge".
    pub fn from_matrix<R: AsRef<[W]>>(rows: &[R]) -> Result<Self, InvalidGraphError> {
        let n = rows.len();
        for (row, r) in rows.iter().enumerate() {
            let len = r.as_ref().len();
            if len != n {
                return Err(InvalidGraphError::RaggedRow { row, len, expected: n });
            }
        }
        let weights = DMatrix::from_fn(n, n, |u, v| Some(rows[u].as_ref()[v]));
        Self::from_entries(weights)
    }

    /// Build from a square matrix where `0` means "no edge".
    pub fn from_dmatrix(m: &DMatrix<W>) -> Result<Self, InvalidGraphError> {
        if m.nrows() != m.ncols() {
            return Err(InvalidGraphError::NotSquare {
                rows: m.nrows(),
                cols: m.ncols(),
            });
        }
        Self::from_entries(m.map(Some))
    }

    fn from_entries(mut weights: DMatrix<Option<W>>) -> Result<Self, InvalidGraphError> {
        for u in 0..weights.nrows() {
            for v in 0..weights.ncols() {
                if let Some(w) = weights[(u, v)] {
                    check_weight(u, v, w)?;
                    if w == W::zero() {
                        weights[(u, v)] = None;
                    }
                }
            }
        }
        Ok(Self { weights })
    }

    /// Insert or replace `from → to`. A zero weight is stored as a real edge.
    pub fn set_edge(&mut self, from: usize, to: usize, w: W) -> Result<(), InvalidGraphError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        check_weight(from, to, w)?;
        self.weights[(from, to)] = Some(w);
        Ok(())
    }

    pub fn remove_edge(&mut self, from: usize, to: usize) -> Result<Option<W>, InvalidGraphError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        Ok(self.weights[(from, to)].take())
    }

    /// Number of stored edges, diagonal included.
    pub fn edge_count(&self) -> usize {
        self.weights.iter().filter(|w| w.is_some()).count()
    }

    fn check_vertex(&self, vertex: usize) -> Result<(), InvalidGraphError> {
        let vertices = self.weights.nrows();
        if vertex >= vertices {
            return Err(InvalidGraphError::VertexOutOfRange { vertex, vertices });
        }
        Ok(())
    }
}

pub(crate) fn check_weight<W: Weight>(
    from: usize,
    to: usize,
    w: W,
) -> Result<(), InvalidGraphError> {
    if !w.is_valid() {
        return Err(InvalidGraphError::InvalidWeight { from, to });
    }
    if w.is_negative() {
        return Err(InvalidGraphError::NegativeWeight { from, to });
    }
    Ok(())
}

impl<W: Weight> WeightedGraph for DenseGraph<W> {
    type W = W;

    #[inline]
    fn vertex_count(&self) -> usize {
        self.weights.nrows()
    }

    #[inline]
    fn weight(&self, from: usize, to: usize) -> Option<W> {
        self.weights.get((from, to)).copied().flatten()
    }
}

/// Result of one single-source run.
///
/// Invariant: for every reachable `v != source`,
/// `distance(v) == distance(pred(v)) + weight(pred(v), v)`, and following
/// predecessors from `v` ends at `source` without revisiting a vertex.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceTable<W> {
    pub(crate) source: usize,
    pub(crate) distances: Vec<Option<W>>,
    pub(crate) predecessors: Vec<Option<usize>>,
    pub(crate) settled: usize,
}

impl<W: Weight> DistanceTable<W> {
    #[inline]
    pub fn source(&self) -> usize {
        self.source
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Shortest distance, `None` if unreachable or out of range.
    #[inline]
    pub fn distance(&self, v: usize) -> Option<W> {
        self.distances.get(v).copied().flatten()
    }

    /// Predecessor on a shortest path, `None` for the source and unreachable vertices.
    #[inline]
    pub fn predecessor(&self, v: usize) -> Option<usize> {
        self.predecessors.get(v).copied().flatten()
    }

    #[inline]
    pub fn is_reachable(&self, v: usize) -> bool {
        self.distance(v).is_some()
    }

    #[inline]
    pub fn distances(&self) -> &[Option<W>] {
        &self.distances
    }

    #[inline]
    pub fn predecessors(&self) -> &[Option<usize>] {
        &self.predecessors
    }

    /// Vertices settled before the search stopped (the reachable ones).
    #[inline]
    pub fn settled_count(&self) -> usize {
        self.settled
    }

    /// Vertices from `source` to `target`, both included.
    pub fn path_to(&self, target: usize) -> Result<Vec<usize>, NoPathError> {
        let n = self.len();
        if target >= n {
            return Err(NoPathError::OutOfRange { target, vertices: n });
        }
        let unreachable = NoPathError::Unreachable {
            origin: self.source,
            target,
        };
        if self.distances[target].is_none() {
            return Err(unreachable);
        }
        let mut path = vec![target];
        let mut cur = target;
        while cur != self.source {
            cur = self.predecessors[cur].ok_or_else(|| unreachable.clone())?;
            path.push(cur);
            if path.len() > n {
                return Err(unreachable);
            }
        }
        path.reverse();
        Ok(path)
    }
}
