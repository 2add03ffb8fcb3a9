//! Force-directed spring layout (Fruchterman-Reingold)
//!
//! Nodes repel each other with force `k^2 / d` and adjacent nodes attract
//! with force `d^2 / k`, where `k` is the optimal pairwise distance. The
//! step length is capped by a temperature that cools linearly to zero.

use super::common::GraphView;
use super::point::{rescale_layout, Point};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

/// Minimum distance used when two nodes coincide
const MIN_DISTANCE: f64 = 0.01;

/// Spring layout configuration
#[derive(Debug, Clone)]
pub struct SpringConfig {
    /// Maximum number of iterations
    pub iterations: usize,
    /// Optimal distance between nodes. `None` uses `1 / sqrt(n)`.
    pub k: Option<f64>,
    /// Seed for the initial random positions
    pub seed: u64,
    /// Largest coordinate magnitude of the result
    pub scale: f64,
    /// Stop when the mean displacement per node falls below this value
    pub tolerance: f64,
    /// Scale attraction by edge weight when the view carries weights
    pub weighted: bool,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            iterations: 50,
            k: None,
            seed: 42,
            scale: 1.0,
            tolerance: 1e-4,
            weighted: false,
        }
    }
}

/// Compute a spring layout for the view.
pub fn spring_layout(view: &GraphView, config: &SpringConfig) -> Vec<Point> {
    let n = view.node_count;

    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![Point::default()];
    }

    // 1. Seeded initial positions in the unit square
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut positions: Vec<Point> = (0..n)
        .map(|_| Point::new(rng.gen::<f64>(), rng.gen::<f64>()))
        .collect();

    let k = config.k.unwrap_or_else(|| (1.0 / n as f64).sqrt());

    // 2. Temperature starts at 10% of the initial extent
    let mut temperature = 0.1 * extent(&positions);
    let cooling = temperature / (config.iterations as f64 + 1.0);

    for _ in 0..config.iterations {
        // 3. Displacement per node (read-only over current positions)
        let displacement: Vec<Point> = (0..n)
            .into_par_iter()
            .map(|i| node_displacement(view, &positions, i, k, config.weighted))
            .collect();

        // 4. Move each node by at most `temperature`
        let mut total_step = 0.0;
        for (p, d) in positions.iter_mut().zip(&displacement) {
            let length = d.norm().max(MIN_DISTANCE);
            let step = Point::new(d.x * temperature / length, d.y * temperature / length);
            p.x += step.x;
            p.y += step.y;
            total_step += step.norm();
        }

        temperature -= cooling;

        if total_step / (n as f64) < config.tolerance {
            break;
        }
    }

    rescale_layout(&mut positions, config.scale);
    positions
}

fn node_displacement(view: &GraphView, positions: &[Point], i: usize, k: f64, weighted: bool) -> Point {
    let pi = positions[i];
    let k2 = k * k;
    let mut disp = Point::default();

    // Repulsion from every other node
    for (j, pj) in positions.iter().enumerate() {
        if j == i {
            continue;
        }
        let dx = pi.x - pj.x;
        let dy = pi.y - pj.y;
        let dist = (dx * dx + dy * dy).sqrt().max(MIN_DISTANCE);
        let force = k2 / (dist * dist);
        disp.x += dx * force;
        disp.y += dy * force;
    }

    // Attraction along edges
    let weights = if weighted { view.weights(i) } else { None };
    for (slot, &j) in view.neighbors(i).iter().enumerate() {
        if j == i {
            continue;
        }
        let w = weights.map(|ws| ws[slot]).unwrap_or(1.0);
        let dx = pi.x - positions[j].x;
        let dy = pi.y - positions[j].y;
        let dist = (dx * dx + dy * dy).sqrt().max(MIN_DISTANCE);
        let force = w * dist / k;
        disp.x -= dx * force;
        disp.y -= dy * force;
    }

    disp
}

fn extent(points: &[Point]) -> f64 {
    let (mut min_x, mut max_x) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
    for p in points {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }
    (max_x - min_x).max(max_y - min_y)
}
