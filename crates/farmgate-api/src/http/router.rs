//! Axum router configuration with middleware.
//!
//! All routes are under `/api/`. Middleware: CORS (any origin) and request
//! tracing.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/register", post(handlers::user::register))
        .route("/api/user/{telegram_id}", get(handlers::user::get_user))
        .route("/api/bookings", post(handlers::booking::create_booking))
        .route(
            "/api/bookings/{user_id}",
            get(handlers::booking::list_bookings),
        )
        .route("/api/processing", post(handlers::guide::create_guide))
        .route(
            "/api/processing/{user_id}",
            get(handlers::guide::list_guides),
        )
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
