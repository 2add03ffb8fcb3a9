//! Slider and dropdown descriptors

use super::context::DataContext;
use crate::data::{distinct_weights, weight_range};
use serde::Serialize;
use std::collections::BTreeSet;

/// Threshold slider: range, marks at every distinct weight, and the
/// initial value (the minimum weight)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderControl {
    pub min: f64,
    pub max: f64,
    pub value: f64,
    pub marks: Vec<f64>,
}

/// Control descriptors for the page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Controls {
    /// Dropdown options, sorted
    pub ingredients: Vec<String>,
    pub threshold: SliderControl,
}

/// Derive the controls from the loaded data
pub fn controls(ctx: &DataContext) -> Controls {
    let mut names: BTreeSet<&str> = BTreeSet::new();
    for e in &ctx.edges {
        names.insert(&e.source);
        names.insert(&e.target);
    }
    for matrix in ctx.cuisines.iter().chain(ctx.regions.iter()) {
        names.extend(matrix.ingredients());
    }

    let (min, max) = weight_range(&ctx.edges).unwrap_or((0.0, 0.0));

    Controls {
        ingredients: names.into_iter().map(str::to_string).collect(),
        threshold: SliderControl {
            min,
            max,
            value: min,
            marks: distinct_weights(&ctx.edges),
        },
    }
}
