use axum::{middleware, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::config::Config;
use crate::logging::request_logger;
use crate::models::MapDocument;
use crate::routes::{api_router, viewer_router};
use crate::VERSION;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// The map assembled at startup. Immutable for the process lifetime.
    pub map: Arc<MapDocument>,
}

#[derive(Serialize)]
struct HealthcheckResponse {
    status: String,
    version: String,
}

async fn healthcheck() -> Json<HealthcheckResponse> {
    Json(HealthcheckResponse {
        status: "healthy".to_string(),
        version: VERSION.to_string(),
    })
}

pub fn create_app(config: Arc<Config>, map: Arc<MapDocument>) -> Router {
    let state = AppState { config, map };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/healthcheck", get(healthcheck))
        .merge(api_router());

    Router::new()
        .nest("/api/v1", api_routes)
        .merge(viewer_router())
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
        .with_state(state)
}
