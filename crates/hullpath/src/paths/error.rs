use thiserror::Error;

/// A graph that Dijkstra's algorithm cannot run on.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidGraphError {
    /// Dijkstra requires non-negative weights.
    #[error("edge {from} -> {to} has a negative weight")]
    NegativeWeight { from: usize, to: usize },
    /// NaN or infinite weight.
    #[error("edge {from} -> {to} has a non-finite weight")]
    InvalidWeight { from: usize, to: usize },
    #[error("row {row} has {len} entries, expected {expected}")]
    RaggedRow { row: usize, len: usize, expected: usize },
    #[error("weight matrix is {rows}x{cols}, expected a square matrix")]
    NotSquare { rows: usize, cols: usize },
    #[error("source vertex {vertex} is out of range for {vertices} vertices")]
    SourceOutOfRange { vertex: usize, vertices: usize },
    #[error("vertex {vertex} is out of range for {vertices} vertices")]
    VertexOutOfRange { vertex: usize, vertices: usize },
}

/// Path reconstruction failure. Never produced by walking stale predecessors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NoPathError {
    #[error("vertex {target} is unreachable from {origin}")]
    Unreachable { origin: usize, target: usize },
    #[error("target vertex {target} is out of range for {vertices} vertices")]
    OutOfRange { target: usize, vertices: usize },
}

/// Failure of the fused search-and-reconstruct call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PathError {
    #[error(transparent)]
    InvalidGraph(#[from] InvalidGraphError),
    #[error(transparent)]
    NoPath(#[from] NoPathError),
}
