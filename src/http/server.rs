//! HTTP server exposing the org chart

use super::handler::{
    add_handler, delete_handler, export_handler, find_handler, reset_handler, status_handler,
    update_handler, SharedChart,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
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
            port: 3000,
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }
}

/// Build the API router over a shared chart
pub fn router(chart: SharedChart) -> Router {
    Router::new()
        .route("/v1/add", post(add_handler))
        .route("/v1/find/:query", get(find_handler))
        .route("/v1/update", post(update_handler))
        .route("/v1/delete", post(delete_handler))
        .route("/v1/export", get(export_handler))
        .route("/v1/reset", post(reset_handler))
        .route("/api/status", get(status_handler))
        .layer(CorsLayer::permissive())
        .with_state(chart)
}

/// HTTP server managing the org chart API
pub struct HttpServer {
    chart: SharedChart,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server
    pub fn new(chart: SharedChart, config: ServerConfig) -> Self {
        Self { chart, config }
    }

    pub fn router(&self) -> Router {
        router(Arc::clone(&self.chart))
    }

    /// Start the HTTP server
    pub async fn start(&self) -> std::io::Result<()> {
        let addr = self.config.bind_address();
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        info!("Org chart API listening on http://{}", addr);

        axum::serve(listener, self.router()).await
    }
}
