//! Router and shared state.
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::studio::Studio;

use super::handlers;

pub struct AppState {
    pub studio: Studio,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/catalog", get(handlers::catalog))
        .route("/upload", post(handlers::upload))
        .route("/preview", post(handlers::preview))
        .route("/generate", post(handlers::generate))
        .route("/jobs", get(handlers::jobs))
        .route("/jobs/:key/regenerate", post(handlers::regenerate))
        .route("/reset", post(handlers::reset))
        .route("/album", get(handlers::album))
        .route("/suggest/:field", post(handlers::suggest))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
