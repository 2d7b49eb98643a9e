pub mod api;
pub mod database;
pub mod errors;
pub mod queries;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<database::RosterDatabase>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // REST API
        .route("/user", post(api::create_user).get(api::list_users))
        // Health check
        .route("/health", get(|| async { "OK" }))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
