//! Threshold filtering and linear weight rescaling
//!
//! Boundary rule: an edge survives a threshold `t` iff `weight > t`.

use super::edge::EdgeRecord;

/// Keep the edges whose weight exceeds `threshold`, preserving order.
pub fn filter_by_threshold(edges: &[EdgeRecord], threshold: f64) -> Vec<EdgeRecord> {
    edges.iter().filter(|e| e.weight > threshold).cloned().collect()
}

/// `(min, max)` of the weights, or `None` for an empty slice
pub fn weight_range(edges: &[EdgeRecord]) -> Option<(f64, f64)> {
    value_range(edges.iter().map(|e| e.weight))
}

/// Replace each weight with `(k - 1) * (w - min) / (max - min)`, where
/// `min`/`max` are taken over `edges`.
///
/// When every weight is equal the result is all zeros.
pub fn rescale(edges: &[EdgeRecord], k: f64) -> Vec<EdgeRecord> {
    let weights: Vec<f64> = edges.iter().map(|e| e.weight).collect();
    edges
        .iter()
        .zip(rescale_values(&weights, k))
        .map(|(e, w)| e.with_weight(w))
        .collect()
}

/// Same linear map as [`rescale`] over plain values.
pub fn rescale_values(values: &[f64], k: f64) -> Vec<f64> {
    let Some((min, max)) = value_range(values.iter().copied()) else {
        return Vec::new();
    };

    let span = max - min;
    if span <= 0.0 {
        return vec![0.0; values.len()];
    }

    values.iter().map(|v| (v - min) / span * (k - 1.0)).collect()
}

/// Sorted distinct weights
pub fn distinct_weights(edges: &[EdgeRecord]) -> Vec<f64> {
    let mut weights: Vec<f64> = edges.iter().map(|e| e.weight).collect();
    weights.sort_by(f64::total_cmp);
    weights.dedup();
    weights
}

fn value_range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}
