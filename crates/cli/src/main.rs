use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use hullpath::hull::{convex_hull_with, HullAlgorithm, HullCfg};
use hullpath::paths::dijkstra;
use serde_json::json;
use std::path::Path;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

use io::{read_graph, read_points, write_json, HullOutput, PathsOutput};
use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex hull and shortest-path runner")]
struct Cmd {
    /// Optional run tag; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    /// Log at debug level
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Convex hull of points read from CSV or Parquet (columns `x`, `y`)
    Hull {
        #[arg(long)]
        input: String,
        #[arg(long, value_enum, default_value_t = Algo::Monotone)]
        algo: Algo,
        #[arg(long)]
        out: String,
    },
    /// Dijkstra over a JSON weight matrix `{"weights": [[...]]}` (0 = no edge)
    Paths {
        #[arg(long)]
        input: String,
        #[arg(long)]
        source: usize,
        /// Also reconstruct the path to this vertex
        #[arg(long)]
        target: Option<usize>,
        #[arg(long)]
        out: String,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Algo {
    Monotone,
    Jarvis,
    Graham,
}

impl From<Algo> for HullAlgorithm {
    fn from(a: Algo) -> Self {
        match a {
            Algo::Monotone => HullAlgorithm::MonotoneChain,
            Algo::Jarvis => HullAlgorithm::JarvisMarch,
            Algo::Graham => HullAlgorithm::GrahamScan,
        }
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Hull { input, algo, out } => hull(input, algo.into(), out, cmd.tag),
        Action::Paths {
            input,
            source,
            target,
            out,
        } => paths(input, source, target, out, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn hull(input: String, algorithm: HullAlgorithm, out: String, tag: Option<String>) -> Result<()> {
    tracing::info!(input, %algorithm, out, tag = ?tag, "hull");
    let points = read_points(Path::new(&input))?;
    let hull = convex_hull_with(&points, HullCfg { algorithm });
    tracing::info!(points = points.len(), corners = hull.len(), "hull_done");

    let output = HullOutput::new(algorithm, &hull);
    write_json(Path::new(&out), &output)?;
    let payload = Payload::new(json!({
        "subcommand": "hull",
        "input": input,
        "algorithm": algorithm.name(),
        "input_points": points.len(),
    }))
    .with_tag(tag);
    write_sidecar(&out, payload)?;
    Ok(())
}

fn paths(
    input: String,
    source: usize,
    target: Option<usize>,
    out: String,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(input, source, to = ?target, out, tag = ?tag, "paths");
    let graph = read_graph(Path::new(&input))?;
    let table = dijkstra(&graph, source).with_context(|| format!("running dijkstra on {input}"))?;
    tracing::info!(
        vertices = table.len(),
        reachable = table.settled_count(),
        "paths_done"
    );

    let output = PathsOutput::new(&table, target);
    if let (Some(t), None) = (target, &output.path) {
        tracing::warn!(source, to = t, "no path to target");
    }
    write_json(Path::new(&out), &output)?;
    let payload = Payload::new(json!({
        "subcommand": "paths",
        "input": input,
        "source": source,
        "target": target,
    }))
    .with_tag(tag);
    write_sidecar(&out, payload)?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "version": hullpath::VERSION,
        "tag": tag,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
