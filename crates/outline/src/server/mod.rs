mod cli;
mod handlers;

pub use cli::App;

use crate::config::OutlineConfig;
use crate::prelude::{eprintln, *};
use crate::wiki::WikipediaClient;
use axum::{
    routing::{get, post},
    Router,
};
use log::info;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Per-process state shared by every request
#[derive(Debug, Clone)]
pub struct AppState {
    pub client: WikipediaClient,
    pub config: OutlineConfig,
}

impl AppState {
    pub fn new(config: OutlineConfig) -> Result<Self, Error> {
        let client = WikipediaClient::new(&config)?;
        Ok(Self { client, config })
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/outline", get(handlers::outline_handler))
        .route("/file", post(handlers::mime_handler))
        .route("/health", get(handlers::health_handler))
        .layer(cors)
        .with_state(state)
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let config = OutlineConfig::try_from(app.outline)?;
    let addr = format!("{}:{}", app.host, app.port);

    if global.verbose {
        eprintln!("Wiki URL: {}", config.wiki_url);
        eprintln!("Content scope: {}", config.scope.marker().unwrap_or("<document>"));
        eprintln!("Outline endpoint: http://{}/api/outline?country=<name>", addr);
        eprintln!("MIME endpoint: http://{}/file", addr);
        eprintln!("Health endpoint: http://{}/health", addr);
    }

    let state = Arc::new(AppState::new(config)?);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    info!("Listening on http://{addr}");

    axum::serve(listener, router(state))
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}
