use anyhow::Result;
use std::{sync::Arc, time::Duration, time::Instant};

use tracing::info;

use crate::catalog::EventCatalog;
use tower_http::services::ServeDir;

use axum::{extract::State, middleware, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use super::{
    api_routes::make_api_routes, log_requests, page_routes::make_page_routes, state::*,
    ServerConfig,
};

#[derive(Serialize)]
struct ServerHealth {
    pub uptime: String,
    pub events_loaded: usize,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

async fn health(State(state): State<ServerState>) -> impl IntoResponse {
    let health = ServerHealth {
        uptime: format_uptime(state.start_time.elapsed()),
        events_loaded: state.catalog.load().len(),
    };
    Json(health)
}

pub fn make_app(config: ServerConfig, catalog: Arc<EventCatalog>) -> Router {
    let state = ServerState {
        config: config.clone(),
        start_time: Instant::now(),
        catalog,
    };

    let api_routes = make_api_routes(state.clone());
    let page_routes = make_page_routes(state.clone());

    let mut app: Router = Router::new()
        .route("/health", get(health))
        .with_state(state.clone())
        .nest("/api", api_routes)
        .merge(page_routes);

    if let Some(frontend_dir) = &config.frontend_dir_path {
        app = app.nest_service("/static", ServeDir::new(frontend_dir));
    }

    app.layer(middleware::from_fn_with_state(state, log_requests))
}

pub async fn run_server(config: ServerConfig, catalog: Arc<EventCatalog>) -> Result<()> {
    let port = config.port;
    let app = make_app(config, catalog);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    info!("Listening on port {}", port);

    Ok(axum::serve(listener, app).await?)
}
