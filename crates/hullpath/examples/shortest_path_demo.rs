//! Print shortest paths from one source of the 4- and 8-vertex sample graphs.
//!
//! Usage:
//!   cargo run -p hullpath --example shortest_path_demo

use hullpath::paths::{dijkstra, DenseGraph, InvalidGraphError};

fn main() -> Result<(), InvalidGraphError> {
    let g4 = DenseGraph::from_matrix(&[[0, 1, 4, 5], [1, 0, 2, 2], [4, 2, 0, 3], [4, 2, 2, 0]])?;
    let g8 = DenseGraph::from_matrix(&[
        [0, 1, 4, 5, 1, 2, 1, 3],
        [1, 0, 2, 2, 6, 2, 3, 1],
        [4, 2, 0, 3, 2, 1, 7, 2],
        [4, 2, 2, 0, 1, 3, 1, 3],
        [1, 6, 2, 1, 0, 1, 4, 5],
        [2, 2, 1, 4, 1, 0, 2, 2],
        [1, 3, 9, 2, 4, 2, 0, 3],
        [3, 1, 2, 3, 4, 2, 2, 0],
    ])?;
    for (name, g, source) in [("g4", &g4, 1), ("g8", &g8, 4)] {
        let table = dijkstra(g, source)?;
        println!("{name}, source {source}");
        for v in 0..table.len() {
            match (table.distance(v), table.path_to(v)) {
                (Some(d), Ok(path)) => println!("  {v}: {d} via {path:?}"),
                _ => println!("  {v}: unreachable"),
            }
        }
    }
    Ok(())
}
