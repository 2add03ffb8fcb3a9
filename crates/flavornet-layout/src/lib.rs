//! Node placement for ingredient networks.
//!
//! Layouts operate on a [`GraphView`], a dense CSR view of an undirected
//! graph, and return one [`Point`] per node index. All layouts are
//! deterministic: the same view and configuration always produce the same
//! positions.

pub mod common;
pub mod point;
pub mod shell;
pub mod spring;

pub use common::GraphView;
pub use point::{rescale_layout, Point};
pub use shell::{shell_layout, shells_by_degree, ShellConfig};
pub use spring::{spring_layout, SpringConfig};
