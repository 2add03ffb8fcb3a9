//! Undirected ingredient co-occurrence network

use crate::data::EdgeRecord;
use flavornet_layout::GraphView;
use indexmap::IndexSet;
use serde::Serialize;

/// An edge between two node indices
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NetworkEdge {
    pub source: usize,
    pub target: usize,
    pub weight: f64,
}

/// Ingredient network
///
/// Node indices are dense (`0..node_count`) and follow first appearance
/// in the edge sequence, source before target.
#[derive(Debug, Clone, Default)]
pub struct IngredientNetwork {
    nodes: IndexSet<String>,
    edges: Vec<NetworkEdge>,
}

impl IngredientNetwork {
    /// Create an empty network
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a network from edge records, keeping their order
    pub fn from_edges(records: &[EdgeRecord]) -> Self {
        let mut network = Self::new();
        for record in records {
            network.add_edge(&record.source, &record.target, record.weight);
        }
        network
    }

    /// Add an edge, creating missing endpoints
    pub fn add_edge(&mut self, source: &str, target: &str, weight: f64) {
        let source = self.intern(source);
        let target = self.intern(target);
        self.edges.push(NetworkEdge { source, target, weight });
    }

    fn intern(&mut self, name: &str) -> usize {
        match self.nodes.get_index_of(name) {
            Some(idx) => idx,
            None => self.nodes.insert_full(name.to_string()).0,
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node names in index order
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.as_str())
    }

    pub fn node_index(&self, name: &str) -> Option<usize> {
        self.nodes.get_index_of(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains(name)
    }

    pub fn edges(&self) -> &[NetworkEdge] {
        &self.edges
    }

    /// Number of incident edges per node
    pub fn degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.node_count()];
        for e in &self.edges {
            degrees[e.source] += 1;
            if e.target != e.source {
                degrees[e.target] += 1;
            }
        }
        degrees
    }

    /// Sum of incident edge weights per node
    pub fn strengths(&self) -> Vec<f64> {
        let mut strengths = vec![0.0; self.node_count()];
        for e in &self.edges {
            strengths[e.source] += e.weight;
            if e.target != e.source {
                strengths[e.target] += e.weight;
            }
        }
        strengths
    }

    /// Per-node flag: `true` only for the node named `selected`.
    ///
    /// An absent or unknown selection flags nothing.
    pub fn highlight(&self, selected: Option<&str>) -> Vec<bool> {
        let target = selected.and_then(|name| self.node_index(name));
        (0..self.node_count()).map(|idx| Some(idx) == target).collect()
    }

    /// Dense view for layout algorithms
    pub fn view(&self) -> GraphView {
        let pairs: Vec<(usize, usize)> = self.edges.iter().map(|e| (e.source, e.target)).collect();
        let weights: Vec<f64> = self.edges.iter().map(|e| e.weight).collect();
        GraphView::from_edges(self.node_count(), &pairs, Some(&weights))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> IngredientNetwork {
        IngredientNetwork::from_edges(&[
            EdgeRecord::new("garlic", "onion", 0.8),
            EdgeRecord::new("onion", "tomato", 0.5),
            EdgeRecord::new("basil", "tomato", 0.6),
        ])
    }

    #[test]
    fn test_nodes_follow_first_appearance() {
        let network = sample();

        assert_eq!(
            network.nodes().collect::<Vec<_>>(),
            vec!["garlic", "onion", "tomato", "basil"]
        );
        assert_eq!(network.edge_count(), 3);
        assert_eq!(network.edges()[2], NetworkEdge { source: 3, target: 2, weight: 0.6 });
    }

    #[test]
    fn test_degrees_and_strengths() {
        let network = sample();

        assert_eq!(network.degrees(), vec![1, 2, 2, 1]);
        let s = network.strengths();
        assert!((s[1] - 1.3).abs() < 1e-12);
        assert!((s[2] - 1.1).abs() < 1e-12);
    }

    #[test]
    fn test_highlight_known_and_unknown() {
        let network = sample();

        assert_eq!(network.highlight(Some("onion")), vec![false, true, false, false]);
        assert!(network.highlight(Some("saffron")).iter().all(|h| !h));
        assert!(network.highlight(None).iter().all(|h| !h));
    }

    #[test]
    fn test_parallel_edges_are_kept() {
        let network = IngredientNetwork::from_edges(&[
            EdgeRecord::new("a", "b", 1.0),
            EdgeRecord::new("b", "a", 2.0),
        ]);

        assert_eq!(network.node_count(), 2);
        assert_eq!(network.edge_count(), 2);
        assert_eq!(network.view().degree(0), 2);
    }

    #[test]
    fn test_empty_network() {
        let network = IngredientNetwork::from_edges(&[]);
        assert!(network.is_empty());
        assert!(network.view().is_empty());
        assert!(network.highlight(Some("garlic")).is_empty());
    }
}
