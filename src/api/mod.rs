use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::client::AnscClient;

pub mod handlers;
pub mod models;

pub fn create_router(client: Arc<AnscClient>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/appeals/search", post(handlers::search_appeals_handler))
        .route(
            "/api/decisions/search",
            post(handlers::search_decisions_handler),
        )
        .route("/api/appeals/:year", get(handlers::appeals_by_year_handler))
        .route(
            "/api/decisions/:year",
            get(handlers::decisions_by_year_handler),
        )
        .with_state(client)
        .layer(cors)
}
