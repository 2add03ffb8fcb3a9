//! Dashboard recomputation
//!
//! A render is a pure function of the selection, the loaded data and the
//! render settings:
//!
//! ```text
//! (Selection, &DataContext, &RenderConfig) -> RenderPayload
//! ```
//!
//! Whatever UI sits on top (the HTTP server, the CLI) calls [`render`]
//! whenever the threshold or the selected ingredient changes.

pub mod context;
pub mod controls;
pub mod geography;
pub mod network;
pub mod popularity;

pub use context::DataContext;
pub use controls::{controls, Controls, SliderControl};
pub use geography::geography_figure;
pub use network::{layout_positions, network_figure};
pub use popularity::popularity_figure;

use crate::config::RenderConfig;
use crate::data::filter_by_threshold;
use crate::error::{DashboardError, DashboardResult};
use crate::figure::Figure;
use crate::graph::IngredientNetwork;
use serde::Serialize;
use tracing::debug;

/// Control state driving a render
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    threshold: f64,
    ingredient: Option<String>,
}

impl Selection {
    /// Validate and build a selection. An empty ingredient means none.
    pub fn new(threshold: f64, ingredient: Option<String>) -> DashboardResult<Self> {
        if !threshold.is_finite() {
            return Err(DashboardError::InvalidThreshold(threshold));
        }
        let ingredient = ingredient
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());
        Ok(Self { threshold, ingredient })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn ingredient(&self) -> Option<&str> {
        self.ingredient.as_deref()
    }
}

/// Check a rescale target maximum `k`
pub fn validate_rescale_max(k: f64) -> DashboardResult<f64> {
    if k.is_finite() && k > 1.0 {
        Ok(k)
    } else {
        Err(DashboardError::InvalidRescaleMax(k))
    }
}

/// Counts describing a render
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSummary {
    pub threshold: f64,
    pub edges: usize,
    pub ingredients: usize,
    pub selected: Option<String>,
    /// Whether the selected ingredient is a node of the filtered network
    pub selected_in_network: bool,
}

/// Figures for one selection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderPayload {
    pub network: Figure,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popularity: Option<Figure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geography: Option<Figure>,
    pub summary: RenderSummary,
}

/// Recompute every figure for a selection
pub fn render(selection: &Selection, ctx: &DataContext, config: &RenderConfig) -> RenderPayload {
    let selected = selection.ingredient();

    // 1. Filter, then build the graph from the surviving edges
    let filtered = filter_by_threshold(&ctx.edges, selection.threshold());
    let network = IngredientNetwork::from_edges(&filtered);

    debug!(
        "Render threshold={} selected={:?}: {} of {} edges, {} ingredients",
        selection.threshold(),
        selected,
        filtered.len(),
        ctx.edges.len(),
        network.node_count()
    );

    // 2. Figures
    let network_fig = network_figure(&filtered, &network, selected, selection.threshold(), config);
    let popularity = ctx
        .cuisines
        .as_ref()
        .map(|m| popularity_figure(m, selected, config));
    let geography = ctx
        .regions
        .as_ref()
        .map(|m| geography_figure(m, selected, config));

    RenderPayload {
        network: network_fig,
        popularity,
        geography,
        summary: RenderSummary {
            threshold: selection.threshold(),
            edges: network.edge_count(),
            ingredients: network.node_count(),
            selected: selected.map(str::to_string),
            selected_in_network: selected.is_some_and(|name| network.contains(name)),
        },
    }
}
