//! API route definitions

use axum::routing::post;
use axum::Router;

use super::handlers::AppState;
use super::handlers::{
    self,
};

/// Create the API router
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/ask", post(handlers::ask))
        .with_state(state)
}
