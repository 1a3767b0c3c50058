use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version and layout cache occupancy.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "gallery-api",
        "pedestal_layout": state.config.pedestal_layout,
        "cached_layouts": state.layout_cache.len(),
    }))
}
