//! 2D positions

/// A position in layout space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

/// Center positions on their mean and scale so the largest coordinate
/// magnitude equals `scale`.
///
/// Layouts whose points all coincide are only centered.
pub fn rescale_layout(points: &mut [Point], scale: f64) {
    if points.is_empty() {
        return;
    }

    let n = points.len() as f64;
    let mean_x = points.iter().map(|p| p.x).sum::<f64>() / n;
    let mean_y = points.iter().map(|p| p.y).sum::<f64>() / n;

    let mut lim: f64 = 0.0;
    for p in points.iter_mut() {
        p.x -= mean_x;
        p.y -= mean_y;
        lim = lim.max(p.x.abs()).max(p.y.abs());
    }

    if lim > 0.0 {
        let factor = scale / lim;
        for p in points.iter_mut() {
            p.x *= factor;
            p.y *= factor;
        }
    }
}
