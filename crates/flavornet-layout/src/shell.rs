//! Shell layout: nodes on concentric circles

use super::common::GraphView;
use super::point::Point;
use std::f64::consts::PI;

/// Shell layout configuration
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Radius of the outermost shell
    pub scale: f64,
    /// Angular offset added per shell. `None` uses `PI / shell_count`.
    pub rotate: Option<f64>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            rotate: None,
        }
    }
}

/// Place nodes on concentric circles.
///
/// `shells` lists node indices per ring, innermost first. `None` puts every
/// node on a single ring. A first shell holding a single node is placed at
/// the center. Nodes not listed in any shell stay at the origin.
pub fn shell_layout(node_count: usize, shells: Option<&[Vec<usize>]>, config: &ShellConfig) -> Vec<Point> {
    let mut positions = vec![Point::default(); node_count];
    if node_count <= 1 {
        return positions;
    }

    let single;
    let shells = match shells {
        Some(s) if !s.is_empty() => s,
        _ => {
            single = vec![(0..node_count).collect::<Vec<_>>()];
            &single[..]
        }
    };

    let radius_bump = config.scale / shells.len() as f64;
    let rotate = config.rotate.unwrap_or(PI / shells.len() as f64);

    let mut radius = if shells[0].len() == 1 { 0.0 } else { radius_bump };
    let mut first_theta = rotate;

    for ring in shells {
        let len = ring.len() as f64;
        for (j, &idx) in ring.iter().enumerate() {
            if idx >= node_count {
                continue;
            }
            let theta = 2.0 * PI * j as f64 / len + first_theta;
            positions[idx] = Point::new(radius * theta.cos(), radius * theta.sin());
        }
        radius += radius_bump;
        first_theta += rotate;
    }

    positions
}

/// Group nodes into `count` rings by descending degree, most connected
/// nodes innermost. Ties keep index order.
pub fn shells_by_degree(view: &GraphView, count: usize) -> Vec<Vec<usize>> {
    let n = view.node_count;
    if n == 0 || count == 0 {
        return Vec::new();
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| view.degree(b).cmp(&view.degree(a)));

    let count = count.min(n);
    let per_ring = n.div_ceil(count);
    order.chunks(per_ring).map(|c| c.to_vec()).collect()
}
