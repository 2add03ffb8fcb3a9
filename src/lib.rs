//! Flavornet
//!
//! An ingredient co-occurrence dashboard: edge tables are filtered by a
//! strength threshold, weights are rescaled for visual encoding, and the
//! surviving network is laid out and rendered as plotly figures next to a
//! per-cuisine bar chart and a per-country choropleth.
//!
//! # Architecture
//!
//! - [`data`]: edge records, CSV loading, threshold filter and rescale
//! - [`graph`]: the ingredient network built from filtered edges
//! - [`figure`]: serializable figure payloads
//! - [`dashboard`]: immutable data context and the pure `render` function
//! - [`http`]: axum server for the browser page
//! - [`config`]: YAML/CLI configuration
//!
//! Layout algorithms live in the `flavornet-layout` crate.
//!
//! ## Example Usage
//!
//! ```rust
//! use flavornet::config::RenderConfig;
//! use flavornet::dashboard::{render, DataContext, Selection};
//! use flavornet::data::EdgeRecord;
//!
//! let ctx = DataContext::new(vec![
//!     EdgeRecord::new("garlic", "onion", 0.9),
//!     EdgeRecord::new("basil", "tomato", 0.2),
//! ]);
//!
//! let selection = Selection::new(0.5, Some("garlic".to_string())).unwrap();
//! let payload = render(&selection, &ctx, &RenderConfig::default());
//!
//! assert_eq!(payload.summary.edges, 1);
//! assert!(payload.summary.selected_in_network);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod dashboard;
pub mod data;
pub mod error;
pub mod figure;
pub mod graph;
pub mod http;

// Re-export main types for convenience
pub use config::{DashboardConfig, DataSources, LayoutAlgorithm, LayoutConfig, RenderConfig, ServerConfig};
pub use dashboard::{controls, render, Controls, DataContext, RenderPayload, RenderSummary, Selection};
pub use data::{filter_by_threshold, rescale, EdgeColumns, EdgeRecord, OccurrenceMatrix};
pub use error::{DashboardError, DashboardResult};
pub use figure::{Figure, Trace};
pub use graph::IngredientNetwork;
pub use http::HttpServer;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.3.0");
    }
}
