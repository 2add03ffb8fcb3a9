//! Immutable data context, loaded once and shared by every render

use crate::config::DataSources;
use crate::data::{load_edges_from_path, load_matrix_from_path, EdgeRecord, OccurrenceMatrix};
use crate::error::DashboardResult;
use tracing::info;

/// Key column of the cuisine occurrence table
pub const CUISINE_KEY: &str = "Cuisine";
/// Key and label columns of the country occurrence table
pub const REGION_KEY: &str = "CODE";
pub const REGION_LABEL: &str = "region";

/// Everything a render needs from storage
#[derive(Debug, Clone, Default)]
pub struct DataContext {
    pub edges: Vec<EdgeRecord>,
    pub cuisines: Option<OccurrenceMatrix>,
    pub regions: Option<OccurrenceMatrix>,
}

impl DataContext {
    pub fn new(edges: Vec<EdgeRecord>) -> Self {
        Self {
            edges,
            cuisines: None,
            regions: None,
        }
    }

    pub fn with_cuisines(mut self, cuisines: OccurrenceMatrix) -> Self {
        self.cuisines = Some(cuisines);
        self
    }

    pub fn with_regions(mut self, regions: OccurrenceMatrix) -> Self {
        self.regions = Some(regions);
        self
    }

    /// Read every configured source
    pub fn load(sources: &DataSources) -> DashboardResult<Self> {
        let edges = load_edges_from_path(&sources.edges, sources.edge_columns.as_ref())?;
        info!("Loaded {} edges from {}", edges.len(), sources.edges.display());

        let cuisines = match &sources.cuisines {
            Some(path) => {
                let matrix = load_matrix_from_path(path, CUISINE_KEY, None)?;
                info!("Loaded {} cuisines from {}", matrix.row_count(), path.display());
                Some(matrix)
            }
            None => None,
        };

        let regions = match &sources.regions {
            Some(path) => {
                let matrix = load_matrix_from_path(path, REGION_KEY, Some(REGION_LABEL))?;
                info!("Loaded {} regions from {}", matrix.row_count(), path.display());
                Some(matrix)
            }
            None => None,
        };

        Ok(Self {
            edges,
            cuisines,
            regions,
        })
    }
}
