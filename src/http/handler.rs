//! HTTP handlers for the Dashboard API

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use crate::config::RenderConfig;
use crate::dashboard::{controls, render, validate_rescale_max, DataContext, Selection};
use crate::data::{filter_by_threshold, rescale, weight_range};
use crate::error::DashboardError;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::warn;

/// Loaded data and render settings, shared by every request
pub struct AppState {
    pub ctx: DataContext,
    pub render: RenderConfig,
}

impl AppState {
    fn default_threshold(&self) -> f64 {
        weight_range(&self.ctx.edges).map(|(min, _)| min).unwrap_or(0.0)
    }
}

/// Query parameters for figure recomputation.
///
/// Numbers arrive as strings so a malformed value gets a JSON error body.
#[derive(Debug, Deserialize)]
pub struct FigureParams {
    pub threshold: Option<String>,
    pub ingredient: Option<String>,
}

/// Query parameters for the edge listing
#[derive(Debug, Deserialize)]
pub struct EdgeParams {
    pub threshold: Option<String>,
    pub k: Option<String>,
}

fn parse_number(name: &str, raw: Option<&str>, default: f64) -> Result<f64, DashboardError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value.parse().map_err(|_| DashboardError::InvalidParameter {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}

fn bad_request(err: DashboardError) -> Response {
    warn!("Rejected request: {}", err);
    (StatusCode::BAD_REQUEST, Json(json!({ "error": err.to_string() }))).into_response()
}

/// Handler for figure recomputation
pub async fn figures_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FigureParams>,
) -> Response {
    let selection = parse_number("threshold", params.threshold.as_deref(), state.default_threshold())
        .and_then(|threshold| Selection::new(threshold, params.ingredient));
    match selection {
        Ok(selection) => Json(render(&selection, &state.ctx, &state.render)).into_response(),
        Err(e) => bad_request(e),
    }
}

/// Handler for the filtered and rescaled edge set
pub async fn edges_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<EdgeParams>,
) -> Response {
    let selection = match parse_number("threshold", params.threshold.as_deref(), state.default_threshold())
        .and_then(|threshold| Selection::new(threshold, None))
    {
        Ok(s) => s,
        Err(e) => return bad_request(e),
    };
    let k = match parse_number("k", params.k.as_deref(), state.render.rescale_max).and_then(validate_rescale_max) {
        Ok(k) => k,
        Err(e) => return bad_request(e),
    };

    let filtered = filter_by_threshold(&state.ctx.edges, selection.threshold());
    Json(json!({
        "threshold": selection.threshold(),
        "k": k,
        "edges": filtered,
        "rescaled": rescale(&filtered, k),
    }))
    .into_response()
}

/// Handler for slider and dropdown descriptors
pub async fn controls_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(controls(&state.ctx))
}

/// Handler for system status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let controls = controls(&state.ctx);
    Json(json!({
        "status": "healthy",
        "version": crate::VERSION,
        "data": {
            "edges": state.ctx.edges.len(),
            "ingredients": controls.ingredients.len(),
            "cuisines": state.ctx.cuisines.as_ref().map(|m| m.row_count()),
            "regions": state.ctx.regions.as_ref().map(|m| m.row_count()),
        }
    }))
}
