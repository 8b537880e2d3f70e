mod map;
mod viewer;

use crate::app::AppState;
use axum::Router;

pub use viewer::viewer_router;

pub fn api_router() -> Router<AppState> {
    Router::new().merge(map::router())
}
