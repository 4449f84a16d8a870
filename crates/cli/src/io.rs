//! Input readers (points via Polars, graphs via serde_json) and JSON outputs.

use anyhow::{bail, Context, Result};
use hullpath::hull::{Hull, HullAlgorithm, Point};
use hullpath::paths::{DenseGraph, DistanceTable};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Read points from `.csv` or `.parquet` with numeric columns `x` and `y`.
pub fn read_points(path: &Path) -> Result<Vec<Point<f64>>> {
    let lf = match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => LazyCsvReader::new(path)
            .with_infer_schema_length(Some(100))
            .finish()?,
        Some("parquet") => LazyFrame::scan_parquet(path, ScanArgsParquet::default())?,
        other => bail!("unsupported point file extension {:?} for {}", other, path.display()),
    };
    let df = lf
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x/y columns from {}", path.display()))?;
    tracing::debug!(rows = df.height(), "points_read");
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok(Point::new(x, y)),
            _ => bail!("row {row} of {} has a missing coordinate", path.display()),
        })
        .collect()
}

#[derive(Deserialize)]
struct GraphFile {
    weights: Vec<Vec<f64>>,
}

/// Read `{"weights": [[...], ...]}`; zero entries mean "no edge".
pub fn read_graph(path: &Path) -> Result<DenseGraph<f64>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let file: GraphFile = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing graph JSON {}", path.display()))?;
    DenseGraph::from_matrix(&file.weights)
        .with_context(|| format!("validating graph {}", path.display()))
}

#[derive(Debug, Serialize)]
pub struct HullOutput {
    pub algorithm: &'static str,
    pub points: Vec<[f64; 2]>,
    pub area: f64,
}

impl HullOutput {
    pub fn new(algorithm: HullAlgorithm, hull: &Hull<f64>) -> Self {
        Self {
            algorithm: algorithm.name(),
            points: hull.points().iter().map(|p| [p.x, p.y]).collect(),
            area: hull.area(),
        }
    }
}

/// Distances are `null` for unreachable vertices; `path` is `null` when no
/// target was requested or the target is unreachable.
#[derive(Debug, Serialize)]
pub struct PathsOutput {
    pub source: usize,
    pub distances: Vec<Option<f64>>,
    pub predecessors: Vec<Option<usize>>,
    pub target: Option<usize>,
    pub path: Option<Vec<usize>>,
}

impl PathsOutput {
    pub fn new(table: &DistanceTable<f64>, target: Option<usize>) -> Self {
        Self {
            source: table.source(),
            distances: table.distances().to_vec(),
            predecessors: table.predecessors().to_vec(),
            target,
            path: target.and_then(|t| table.path_to(t).ok()),
        }
    }
}

/// Pretty-print `value` to `path`, creating parent directories.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}
