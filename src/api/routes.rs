use axum::{middleware, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers;
use super::AppState;
use crate::middleware::{make_span_with_request_id, request_id_middleware};

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Recommendations
        .route("/api/recommend", get(handlers::recommend))
        .route("/api/autocomplete", get(handlers::autocomplete))
        // Provider-backed lookups
        .route("/api/details/:tmdb_id", get(handlers::movie_details))
        .route("/api/sentiment", get(handlers::sentiment))
        .route("/api/actor/:actor_id", get(handlers::actor_details))
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
