//! Shared graph view for layout algorithms
//!
//! Provides a read-only, compact view of the graph topology for layout
//! execution.

/// A dense, integer-indexed view of an undirected graph using Compressed
/// Sparse Row (CSR) format.
///
/// Every undirected edge `(u, v)` is stored twice, once in the row of `u`
/// and once in the row of `v`. Self-loops are stored once.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphView {
    /// Number of nodes
    pub node_count: usize,

    /// Offsets into `neighbors`. Size = node_count + 1
    pub offsets: Vec<usize>,
    /// Contiguous array of neighbor node indices
    pub neighbors: Vec<usize>,

    /// Edge weights: aligned with `neighbors`
    pub weights: Option<Vec<f64>>,
}

impl GraphView {
    /// Build a view from an undirected edge list over `0..node_count`.
    ///
    /// Edges referring to indices outside the node range are ignored.
    pub fn from_edges(node_count: usize, edges: &[(usize, usize)], weights: Option<&[f64]>) -> Self {
        // 1. Bucket neighbors per node
        let mut adjacency: Vec<Vec<(usize, f64)>> = vec![Vec::new(); node_count];
        for (i, &(u, v)) in edges.iter().enumerate() {
            if u >= node_count || v >= node_count {
                continue;
            }
            let w = weights.and_then(|ws| ws.get(i).copied()).unwrap_or(1.0);
            adjacency[u].push((v, w));
            if u != v {
                adjacency[v].push((u, w));
            }
        }

        // 2. Flatten to CSR
        let mut offsets = Vec::with_capacity(node_count + 1);
        let mut neighbors = Vec::new();
        let mut flat_weights = weights.map(|_| Vec::new());

        offsets.push(0);
        for row in adjacency {
            for (v, w) in row {
                neighbors.push(v);
                if let Some(ref mut fw) = flat_weights {
                    fw.push(w);
                }
            }
            offsets.push(neighbors.len());
        }

        Self {
            node_count,
            offsets,
            neighbors,
            weights: flat_weights,
        }
    }

    /// Get the degree of a node (by index)
    pub fn degree(&self, idx: usize) -> usize {
        self.offsets[idx + 1] - self.offsets[idx]
    }

    /// Get neighbors of a node
    pub fn neighbors(&self, idx: usize) -> &[usize] {
        &self.neighbors[self.offsets[idx]..self.offsets[idx + 1]]
    }

    /// Get weights aligned with `neighbors(idx)`
    pub fn weights(&self, idx: usize) -> Option<&[f64]> {
        self.weights
            .as_ref()
            .map(|w| &w[self.offsets[idx]..self.offsets[idx + 1]])
    }

    /// Number of undirected edges (self-loops counted once)
    pub fn edge_count(&self) -> usize {
        let loops = (0..self.node_count)
            .map(|u| self.neighbors(u).iter().filter(|&&v| v == u).count())
            .sum::<usize>();
        (self.neighbors.len() - loops) / 2 + loops
    }

    pub fn is_empty(&self) -> bool {
        self.node_count == 0
    }
}
