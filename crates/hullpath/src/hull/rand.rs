//! Random point clouds for hull tests and benchmarks (replay tokens).
//!
//! Model
//! - Uniform clouds in the square `[-h, h]²`, either real or on the integer grid.
//! - Points on a circle with jittered angles, so every point is a hull corner.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::types::Point;

/// Point count distribution.
#[derive(Clone, Copy, Debug)]
pub enum PointCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl PointCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            PointCount::Fixed(n) => n,
            PointCount::Uniform { min, max } => rng.gen_range(min..=max.max(min)),
        }
    }
}

/// Cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: PointCount,
    /// Half side length of the sampling square.
    pub half_extent: f64,
}
impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: PointCount::Fixed(64),
            half_extent: 1.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

/// Uniform real cloud in `[-h, h]²`.
pub fn draw_cloud_f64(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point<f64>> {
    let mut rng = tok.to_std_rng();
    let n = cfg.count.sample(&mut rng);
    let h = cfg.half_extent.abs().max(f64::MIN_POSITIVE);
    (0..n)
        .map(|_| Point::new(rng.gen_range(-h..=h), rng.gen_range(-h..=h)))
        .collect()
}

/// Uniform integer cloud in `[-h, h]²` with `h = round(half_extent)`, at least 1.
/// Small extents produce many duplicates and collinear triples.
pub fn draw_cloud_i32(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point<i32>> {
    let mut rng = tok.to_std_rng();
    let n = cfg.count.sample(&mut rng);
    let h = (cfg.half_extent.abs().round() as i32).max(1);
    (0..n)
        .map(|_| Point::new(rng.gen_range(-h..=h), rng.gen_range(-h..=h)))
        .collect()
}

/// `n` points on a circle of radius `radius`, shuffled. Angles are jittered by
/// at most 0.3 of the base spacing so no two points coincide.
pub fn draw_on_circle(n: usize, radius: f64, tok: ReplayToken) -> Vec<Point<f64>> {
    let mut rng = tok.to_std_rng();
    if n == 0 {
        return Vec::new();
    }
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = rng.gen::<f64>() * std::f64::consts::TAU;
    let mut pts: Vec<Point<f64>> = (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * 0.3 * delta;
            let th = phase + (k as f64) * delta + jitter;
            Point::from(Vector2::new(th.cos(), th.sin()) * radius)
        })
        .collect();
    pts.shuffle(&mut rng);
    pts
}
