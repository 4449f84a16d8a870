//! Dijkstra's algorithm with dense O(V²) minimum selection.

use tracing::debug;

use super::error::{InvalidGraphError, NoPathError, PathError};
use super::types::{check_weight, DistanceTable, Weight, WeightedGraph};

/// Reject negative and non-finite weights. Scans every ordered pair.
pub fn validate<G: WeightedGraph + ?Sized>(graph: &G) -> Result<(), InvalidGraphError> {
    let n = graph.vertex_count();
    for u in 0..n {
        for v in 0..n {
            if let Some(w) = graph.weight(u, v) {
                check_weight(u, v, w)?;
            }
        }
    }
    Ok(())
}

/// Single-source shortest distances and predecessors.
///
/// The graph is validated before any relaxation. Ties in the minimum
/// selection go to the lowest vertex index.
pub fn dijkstra<G: WeightedGraph + ?Sized>(
    graph: &G,
    source: usize,
) -> Result<DistanceTable<G::W>, InvalidGraphError> {
    check_source(graph, source)?;
    validate(graph)?;
    Ok(DijkstraRunner::new(graph, source).run())
}

/// One independent run per source vertex, in vertex order.
pub fn dijkstra_all<G: WeightedGraph + ?Sized>(
    graph: &G,
) -> Result<Vec<DistanceTable<G::W>>, InvalidGraphError> {
    validate(graph)?;
    Ok((0..graph.vertex_count())
        .map(|s| DijkstraRunner::new(graph, s).run())
        .collect())
}

/// Search and reconstruct in one call: `(distance, vertices source..=target)`.
pub fn shortest_path<G: WeightedGraph + ?Sized>(
    graph: &G,
    source: usize,
    target: usize,
) -> Result<(G::W, Vec<usize>), PathError> {
    let table = dijkstra(graph, source)?;
    let path = table.path_to(target)?;
    let d = table.distance(target).ok_or(NoPathError::Unreachable {
        origin: source,
        target,
    })?;
    Ok((d, path))
}

fn check_source<G: WeightedGraph + ?Sized>(
    graph: &G,
    source: usize,
) -> Result<(), InvalidGraphError> {
    let vertices = graph.vertex_count();
    if source >= vertices {
        return Err(InvalidGraphError::SourceOutOfRange {
            vertex: source,
            vertices,
        });
    }
    Ok(())
}

/// Per-run working state. `settled[v]` only ever flips false → true; the
/// distance and predecessor of a settled vertex are never written again.
struct DijkstraRunner<'a, G: WeightedGraph + ?Sized> {
    g: &'a G,
    source: usize,
    dist: Vec<Option<G::W>>,
    pred: Vec<Option<usize>>,
    settled: Vec<bool>,
    settled_count: usize,
}

impl<'a, G: WeightedGraph + ?Sized> DijkstraRunner<'a, G> {
    fn new(g: &'a G, source: usize) -> Self {
        let n = g.vertex_count();
        let mut dist = vec![None; n];
        dist[source] = Some(<G::W as Weight>::zero());
        Self {
            g,
            source,
            dist,
            pred: vec![None; n],
            settled: vec![false; n],
            settled_count: 0,
        }
    }

    fn run(mut self) -> DistanceTable<G::W> {
        let n = self.dist.len();
        for _ in 0..n {
            let Some(u) = self.next_unsettled() else {
                debug!(
                    source = self.source,
                    settled = self.settled_count,
                    vertices = n,
                    "remaining vertices unreachable"
                );
                break;
            };
            self.settled[u] = true;
            self.settled_count += 1;
            self.relax_from(u);
        }
        DistanceTable {
            source: self.source,
            distances: self.dist,
            predecessors: self.pred,
            settled: self.settled_count,
        }
    }

    /// Unsettled vertex with the smallest finite distance; lowest index on ties.
    fn next_unsettled(&self) -> Option<usize> {
        let mut best: Option<(usize, G::W)> = None;
        for v in 0..self.dist.len() {
            if self.settled[v] {
                continue;
            }
            if let Some(d) = self.dist[v] {
                if best.map_or(true, |(_, bd)| d < bd) {
                    best = Some((v, d));
                }
            }
        }
        best.map(|(v, _)| v)
    }

    fn relax_from(&mut self, u: usize) {
        let Some(du) = self.dist[u] else {
            return;
        };
        for v in 0..self.dist.len() {
            if v == u || self.settled[v] {
                continue;
            }
            let Some(w) = self.g.weight(u, v) else {
                continue;
            };
            // An overflowing sum can never be shorter.
            let Some(cand) = du.try_add(w) else {
                continue;
            };
            if self.dist[v].map_or(true, |dv| cand < dv) {
                self.dist[v] = Some(cand);
                self.pred[v] = Some(u);
            }
        }
    }
}
