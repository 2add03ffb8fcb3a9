//! Tabular data: edge records, CSV loading and the threshold/rescale transform
//!
//! ```text
//!   edges.csv ──► load_edges ──► Vec<EdgeRecord>
//!                                    │
//!                     filter_by_threshold(t)
//!                                    │
//!                               rescale(k)
//!                                    ▼
//!                        graph construction / figures
//! ```

pub mod edge;
pub mod table;
pub mod transform;

pub use edge::EdgeRecord;
pub use table::{load_edges, load_edges_from_path, load_matrix, load_matrix_from_path, EdgeColumns, OccurrenceMatrix};
pub use transform::{distinct_weights, filter_by_threshold, rescale, rescale_values, weight_range};
