//! Print the hull of a small point set with each strategy.
//!
//! Usage:
//!   cargo run -p hullpath --example hull_demo

use hullpath::hull::{convex_hull_with, HullAlgorithm, HullCfg, Point};

fn main() {
    let points: Vec<Point<i32>> = [(0, 3), (2, 2), (1, 1), (2, 1), (3, 0), (0, 0), (3, 3)]
        .into_iter()
        .map(Point::from)
        .collect();
    for algorithm in HullAlgorithm::ALL {
        let hull = convex_hull_with(&points, HullCfg { algorithm });
        println!("{algorithm}: {} corners, area {}", hull.len(), hull.area());
        for p in hull.points() {
            println!("  ({}, {})", p.x, p.y);
        }
    }
}
