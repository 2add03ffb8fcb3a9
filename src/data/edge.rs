//! Edge record: an ingredient pair with a co-occurrence weight

use serde::{Deserialize, Serialize};

/// A single row of the edge table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// First ingredient of the pair
    pub source: String,

    /// Second ingredient of the pair
    pub target: String,

    /// Co-occurrence strength (>= 0)
    pub weight: f64,
}

impl EdgeRecord {
    pub fn new(source: impl Into<String>, target: impl Into<String>, weight: f64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }

    /// Copy of this record carrying a different weight
    pub fn with_weight(&self, weight: f64) -> Self {
        Self {
            source: self.source.clone(),
            target: self.target.clone(),
            weight,
        }
    }
}
