//! HTTP surface for the dashboard
//!
//! Serves the embedded page and the JSON endpoints it polls.

pub mod handler;
pub mod server;

pub use handler::AppState;
pub use server::{build_router, HttpServer};
