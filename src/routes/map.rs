use axum::{extract::State, routing::get, Json, Router};

use crate::app::AppState;
use crate::error::AppResult;
use crate::models::MapDocument;

pub fn router() -> Router<AppState> {
    Router::new().route("/map", get(get_map))
}

async fn get_map(State(state): State<AppState>) -> AppResult<Json<MapDocument>> {
    Ok(Json(state.map.as_ref().clone()))
}
