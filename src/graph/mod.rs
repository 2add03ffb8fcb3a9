//! Ingredient network built from filtered edge records
//!
//! Nodes are ingredient names indexed in order of first appearance;
//! edges are undirected and may repeat between the same pair.

pub mod network;

pub use network::{IngredientNetwork, NetworkEdge};
