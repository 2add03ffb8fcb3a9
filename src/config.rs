//! Dashboard configuration
//!
//! Every section has a `Default`, so a YAML file only needs the keys it
//! overrides:
//!
//! ```yaml
//! server:
//!   port: 9000
//! data:
//!   edges: data/connection_strength_norm.csv
//!   cuisines: data/cuisine_occurrence.csv
//! render:
//!   rescale_max: 12
//!   layout:
//!     algorithm: shell
//! ```

use crate::data::EdgeColumns;
use crate::error::{DashboardError, DashboardResult};
use flavornet_layout::{ShellConfig, SpringConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub server: ServerConfig,
    pub data: DataSources,
    pub render: RenderConfig,
}

impl DashboardConfig {
    /// Parse a YAML document and check the render settings
    pub fn from_yaml_str(yaml: &str) -> DashboardResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.render.validate()?;
        Ok(config)
    }

    /// Read and parse a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> DashboardResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| DashboardError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&text)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub address: String,
    /// Port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 8050,
        }
    }
}

/// Input CSV locations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSources {
    /// Edge list (ingredient pairs with co-occurrence weight)
    pub edges: PathBuf,
    /// Per-cuisine occurrence table (`Cuisine`, <ingredient>...)
    pub cuisines: Option<PathBuf>,
    /// Per-country occurrence table (`CODE`, `region`, <ingredient>...)
    pub regions: Option<PathBuf>,
    /// Explicit edge columns; detected from the header when absent
    pub edge_columns: Option<EdgeColumns>,
}

impl Default for DataSources {
    fn default() -> Self {
        Self {
            edges: PathBuf::from("connection_strength_norm.csv"),
            cuisines: None,
            regions: None,
            edge_columns: None,
        }
    }
}

/// Figure rendering settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Target maximum `k`; rescaled weights land in `[0, k - 1]`
    pub rescale_max: f64,
    /// Line width added to every rescaled edge weight
    pub edge_width: f64,
    /// Marker size added to every rescaled node strength
    pub node_size: f64,
    /// Figure height in pixels
    pub height: u32,
    pub edge_color: String,
    pub node_color: String,
    pub highlight_color: String,
    /// Plotly colorscale name for the choropleth
    pub colorscale: String,
    pub layout: LayoutConfig,
}

impl RenderConfig {
    /// Reject settings that would break the edge width ordering
    pub fn validate(&self) -> DashboardResult<()> {
        crate::dashboard::validate_rescale_max(self.rescale_max)?;
        Ok(())
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            rescale_max: 4.0,
            edge_width: 0.5,
            node_size: 20.0,
            height: 1000,
            edge_color: "rgba(0, 0, 0, 0.8)".to_string(),
            node_color: "rgba(31, 119, 180, 0.9)".to_string(),
            highlight_color: "rgba(214, 39, 40, 1.0)".to_string(),
            colorscale: "Reds".to_string(),
            layout: LayoutConfig::default(),
        }
    }
}

/// Node placement algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutAlgorithm {
    #[default]
    Spring,
    Shell,
}

/// Layout settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub algorithm: LayoutAlgorithm,
    /// Spring iterations
    pub iterations: usize,
    /// Spring seed
    pub seed: u64,
    /// Largest coordinate magnitude
    pub scale: f64,
    /// Number of shells, ordered by degree
    pub shells: usize,
    /// Pull strongly co-occurring ingredients closer in the spring layout
    pub weighted: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            algorithm: LayoutAlgorithm::Spring,
            iterations: 50,
            seed: 42,
            scale: 1.0,
            shells: 1,
            weighted: false,
        }
    }
}

impl LayoutConfig {
    pub fn spring(&self) -> SpringConfig {
        SpringConfig {
            iterations: self.iterations,
            seed: self.seed,
            scale: self.scale,
            weighted: self.weighted,
            ..SpringConfig::default()
        }
    }

    pub fn shell(&self) -> ShellConfig {
        ShellConfig {
            scale: self.scale,
            ..ShellConfig::default()
        }
    }
}
