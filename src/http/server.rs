//! HTTP server implementation for the Dashboard

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use super::handler::{controls_handler, edges_handler, figures_handler, status_handler, AppState};
use crate::config::{RenderConfig, ServerConfig};
use crate::dashboard::DataContext;
use rust_embed::RustEmbed;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

#[derive(RustEmbed)]
#[folder = "src/http/static/"]
struct Assets;

async fn static_handler() -> impl IntoResponse {
    match Assets::get("index.html") {
        Some(page) => Html(String::from_utf8_lossy(page.data.as_ref()).into_owned()).into_response(),
        None => (StatusCode::NOT_FOUND, "index.html not embedded").into_response(),
    }
}

/// Build the dashboard router over shared, read-only state
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(static_handler))
        .route("/api/controls", get(controls_handler))
        .route("/api/figures", get(figures_handler))
        .route("/api/edges", get(edges_handler))
        .route("/api/status", get(status_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// HTTP server managing the Dashboard API and static assets
pub struct HttpServer {
    state: Arc<AppState>,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server
    pub fn new(ctx: DataContext, render: RenderConfig, config: ServerConfig) -> Self {
        Self {
            state: Arc::new(AppState { ctx, render }),
            config,
        }
    }

    /// Start the HTTP server
    pub async fn start(&self) -> std::io::Result<()> {
        let app = build_router(Arc::clone(&self.state));

        let addr = format!("{}:{}", self.config.address, self.config.port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        info!("Dashboard available at http://{}", addr);

        axum::serve(listener, app).await
    }
}
