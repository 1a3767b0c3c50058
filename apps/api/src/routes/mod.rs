pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::gallery::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> Result<(), AppError> {
    Err(AppError::NotFound(format!("No route for {uri}")))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Gallery layout API
        .route("/api/v1/gallery/layout", post(handlers::handle_layout))
        .route("/api/v1/gallery/frame", post(handlers::handle_frame))
        .fallback(not_found)
        .with_state(state)
}
